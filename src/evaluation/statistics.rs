//! Summary statistics over raw feature arrays.
//!
//! ## Purpose
//!
//! This module reduces a per-point or per-stroke feature array into the
//! summary statistics requested by the caller.
//!
//! ## Design notes
//!
//! * **Closed set**: `Statistic` enumerates every supported reduction; names
//!   are parsed up front so an unknown name fails before anything is computed.
//! * **Independent**: Each statistic is computed from its own copy of the
//!   defined values; no result feeds another.
//! * **Sentinel-aware**: Undefined (`None`) slots are skipped. A statistic
//!   with no defined input is itself `None`.
//!
//! ## Key concepts
//!
//! * **Std**: Population standard deviation (divides by `n`).
//! * **Percentile**: Linear interpolation between the two closest ranks.
//! * **Cv**: Coefficient of variation, `std / mean`; undefined for zero mean.
//!
//! ## Invariants
//!
//! * The output preserves the order of the requested statistics.
//! * For a single value, mean, median, min and max equal it and std is zero.
//!
//! ## Non-goals
//!
//! * This module does not filter genuine NaN measurements; any NaN among the
//!   defined values makes every statistic NaN.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use core::fmt;
use core::str::FromStr;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::order::{median_inplace, percentile_inplace};
use crate::primitives::errors::FeatureError;

// ============================================================================
// Statistic
// ============================================================================

/// A summary statistic that can be requested for an array feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Arithmetic mean.
    Mean,

    /// Median (50th percentile).
    Median,

    /// Population standard deviation.
    Std,

    /// Minimum value.
    Min,

    /// Maximum value.
    Max,

    /// `max - min`.
    Range,

    /// Interquartile range, `quartile_3 - quartile_1`.
    Iqr,

    /// Coefficient of variation, `std / mean`.
    Cv,

    /// 25th percentile.
    Quartile1,

    /// 75th percentile.
    Quartile3,

    /// Arbitrary percentile in `[0, 100]`; larger values are rejected at dispatch.
    Percentile(u8),
}

impl Statistic {
    /// Parse a list of statistic names, failing on the first unsupported one.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Statistic>, FeatureError> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }

    /// Compute the statistic over fully defined values.
    ///
    /// Returns `None` when `values` is empty or the statistic is undefined
    /// for them (e.g. `Cv` with zero mean). A NaN value yields NaN.
    pub fn compute<T: Float>(self, values: &[T]) -> Option<T> {
        if values.is_empty() {
            return None;
        }
        if values.iter().any(|v| v.is_nan()) {
            return Some(T::nan());
        }

        match self {
            Statistic::Mean => mean(values),
            Statistic::Std => std_dev(values),
            Statistic::Min => Some(values.iter().copied().fold(T::infinity(), T::min)),
            Statistic::Max => Some(values.iter().copied().fold(T::neg_infinity(), T::max)),
            Statistic::Range => {
                let min = Statistic::Min.compute(values)?;
                let max = Statistic::Max.compute(values)?;
                Some(max - min)
            }
            Statistic::Median => median_inplace(&mut values.to_vec()),
            Statistic::Quartile1 => percentile(values, 25),
            Statistic::Quartile3 => percentile(values, 75),
            Statistic::Iqr => {
                let q1 = percentile(values, 25)?;
                let q3 = percentile(values, 75)?;
                Some(q3 - q1)
            }
            Statistic::Cv => {
                let m = mean(values)?;
                if m == T::zero() {
                    return None;
                }
                Some(std_dev(values)? / m)
            }
            Statistic::Percentile(p) => percentile(values, p),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Mean => f.write_str("mean"),
            Statistic::Median => f.write_str("median"),
            Statistic::Std => f.write_str("std"),
            Statistic::Min => f.write_str("min"),
            Statistic::Max => f.write_str("max"),
            Statistic::Range => f.write_str("range"),
            Statistic::Iqr => f.write_str("iqr"),
            Statistic::Cv => f.write_str("cv"),
            Statistic::Quartile1 => f.write_str("quartile_1"),
            Statistic::Quartile3 => f.write_str("quartile_3"),
            Statistic::Percentile(p) => write!(f, "percentile_{}", p),
        }
    }
}

impl FromStr for Statistic {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stat = match s {
            "mean" => Statistic::Mean,
            "median" => Statistic::Median,
            "std" => Statistic::Std,
            "min" => Statistic::Min,
            "max" => Statistic::Max,
            "range" => Statistic::Range,
            "iqr" => Statistic::Iqr,
            "cv" => Statistic::Cv,
            "quartile_1" => Statistic::Quartile1,
            "quartile_3" => Statistic::Quartile3,
            other => match other.strip_prefix("percentile_").map(str::parse::<u8>) {
                Some(Ok(p)) if p <= 100 => Statistic::Percentile(p),
                _ => return Err(FeatureError::UnsupportedStatistic(other.to_string())),
            },
        };
        Ok(stat)
    }
}

// ============================================================================
// Statistics Map
// ============================================================================

/// Requested statistics and their values, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsMap<T> {
    entries: Vec<(Statistic, Option<T>)>,
}

impl<T: Copy> StatisticsMap<T> {
    /// Value of `stat`, or `None` if it was not requested or is undefined.
    pub fn value(&self, stat: Statistic) -> Option<T> {
        self.entries
            .iter()
            .find(|(s, _)| *s == stat)
            .and_then(|(_, v)| *v)
    }

    /// Returns `true` if `stat` was requested.
    pub fn contains(&self, stat: Statistic) -> bool {
        self.entries.iter().any(|(s, _)| *s == stat)
    }

    /// Iterate over `(statistic, value)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (Statistic, Option<T>)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of requested statistics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no statistic was requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for StatisticsMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (stat, value) in &self.entries {
            match value {
                Some(v) => writeln!(f, "  {:<14} {:.6}", stat.to_string(), v)?,
                None => writeln!(f, "  {:<14} undefined", stat.to_string())?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Reduction
// ============================================================================

/// Reduce a feature array to the requested statistics.
///
/// Undefined slots are skipped; with no defined value every statistic is `None`.
pub fn reduce<T: Float>(values: &[Option<T>], statistics: &[Statistic]) -> StatisticsMap<T> {
    let defined: Vec<T> = values.iter().flatten().copied().collect();

    let entries = statistics
        .iter()
        .map(|&stat| (stat, stat.compute(&defined)))
        .collect();

    StatisticsMap { entries }
}

/// Parse statistic names, then reduce.
///
/// Fails with `UnsupportedStatistic` before any statistic is computed if a
/// name is unknown.
pub fn reduce_named<T: Float, S: AsRef<str>>(
    values: &[Option<T>],
    names: &[S],
) -> Result<StatisticsMap<T>, FeatureError> {
    let statistics = Statistic::parse_all(names)?;
    Ok(reduce(values, &statistics))
}

fn mean<T: Float>(values: &[T]) -> Option<T> {
    let n = T::from(values.len())?;
    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    Some(sum / n)
}

fn std_dev<T: Float>(values: &[T]) -> Option<T> {
    let m = mean(values)?;
    let n = T::from(values.len())?;
    let ss = values
        .iter()
        .map(|&v| (v - m) * (v - m))
        .fold(T::zero(), |acc, v| acc + v);
    Some((ss / n).sqrt())
}

fn percentile<T: Float>(values: &[T], p: u8) -> Option<T> {
    percentile_inplace(&mut values.to_vec(), T::from(p)?)
}
