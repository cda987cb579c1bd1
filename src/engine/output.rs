//! Feature results returned to callers.
//!
//! ## Purpose
//!
//! This module defines `Feature`, the value every public feature accessor
//! returns: a raw array, a scalar, a statistics mapping, or the
//! insufficient-data sentinel.
//!
//! ## Design notes
//!
//! * **Explicit sentinel**: Insufficient data is `Feature::Undefined` (whole
//!   feature) or a `None` slot (single value), never a float NaN. A NaN in a
//!   result therefore always comes from a malformed input measurement.
//! * **Composable**: `Feature::reduce` applied to a raw result equals
//!   computing the feature with the same statistics requested.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::Derived;
use crate::engine::validator::Validator;
use crate::evaluation::statistics::{Statistic, StatisticsMap, reduce};
use crate::primitives::errors::FeatureError;

/// Result of a feature computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature<T> {
    /// Not enough points or strokes to compute the feature.
    Undefined,

    /// One value per point or per stroke; `None` marks an undefined slot.
    Array(Vec<Option<T>>),

    /// Inherently scalar feature.
    Scalar(T),

    /// Requested statistics, in request order.
    Statistics(StatisticsMap<T>),
}

impl<T: Float> Feature<T> {
    /// Returns `true` for the insufficient-data sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Feature::Undefined)
    }

    /// Raw values, if this is an array result.
    pub fn as_array(&self) -> Option<&[Option<T>]> {
        match self {
            Feature::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Scalar value, if this is a scalar result.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Feature::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Statistics mapping, if statistics were requested.
    pub fn as_statistics(&self) -> Option<&StatisticsMap<T>> {
        match self {
            Feature::Statistics(map) => Some(map),
            _ => None,
        }
    }

    /// Value of one requested statistic, if defined.
    pub fn statistic(&self, stat: Statistic) -> Option<T> {
        self.as_statistics().and_then(|map| map.value(stat))
    }

    /// Reduce a raw result to statistics.
    ///
    /// `Undefined` reduces like an empty array. Scalar and already reduced
    /// results cannot be reduced, and percentiles above 100 are rejected.
    pub fn reduce(&self, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        Validator::validate_statistics(statistics)?;

        match self {
            Feature::Array(values) => Ok(Feature::Statistics(reduce(values, statistics))),
            Feature::Undefined => Ok(Feature::Statistics(reduce(&[], statistics))),
            Feature::Scalar(_) => Err(FeatureError::InvalidRequest {
                feature: "scalar",
                reason: "statistics cannot be computed on a scalar feature",
            }),
            Feature::Statistics(_) => Err(FeatureError::InvalidRequest {
                feature: "statistics",
                reason: "result is already reduced",
            }),
        }
    }
}

impl<T> From<Derived<T>> for Feature<T> {
    fn from(derived: Derived<T>) -> Self {
        match derived {
            Derived::Undefined => Feature::Undefined,
            Derived::Array(values) => Feature::Array(values),
            Derived::Scalar(value) => Feature::Scalar(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Feature<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Undefined => write!(f, "undefined"),
            Feature::Scalar(value) => write!(f, "{:.6}", value),
            Feature::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match value {
                        Some(v) => write!(f, "{:.6}", v)?,
                        None => write!(f, "undefined")?,
                    }
                }
                write!(f, "]")
            }
            Feature::Statistics(map) => write!(f, "{}", map),
        }
    }
}
