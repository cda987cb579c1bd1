//! Dynamic features: azimuth, tilt and pressure.
//!
//! ## Purpose
//!
//! This module extracts the recorded pen-orientation and pressure channels.
//! Angles are restricted to the on-surface or in-air subsequence and
//! converted to the configured unit; pressure covers the whole sample.
//!
//! ## Invariants
//!
//! * One value per selected point.
//! * An empty selection (or empty sample, for pressure) yields `Derived::Undefined`.
//!
//! ## Non-goals
//!
//! * Pressure has no in-air variant; devices report zero or no pressure in air.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::Derived;
use crate::algorithms::segmentation::select;
use crate::primitives::config::FeatureConfig;
use crate::primitives::partition::AngleUnit;
use crate::primitives::sample::{Point, Sample};

/// Azimuth of the selected subsequence.
pub fn azimuth<T: Float>(sample: &Sample<T>, in_air: bool, config: &FeatureConfig<T>) -> Derived<T> {
    angle(sample, in_air, config, |p| p.azimuth)
}

/// Tilt of the selected subsequence.
pub fn tilt<T: Float>(sample: &Sample<T>, in_air: bool, config: &FeatureConfig<T>) -> Derived<T> {
    angle(sample, in_air, config, |p| p.tilt)
}

/// Pressure over the whole sample.
pub fn pressure<T: Float>(sample: &Sample<T>, config: &FeatureConfig<T>) -> Derived<T> {
    if sample.is_empty() {
        return Derived::Undefined;
    }

    let values: Vec<T> = match config.pressure_levels() {
        Some(levels) => sample.iter().map(|p| p.pressure / levels).collect(),
        None => sample.iter().map(|p| p.pressure).collect(),
    };
    Derived::defined(values)
}

fn angle<T, F>(sample: &Sample<T>, in_air: bool, config: &FeatureConfig<T>, field: F) -> Derived<T>
where
    T: Float,
    F: Fn(&Point<T>) -> T,
{
    let selection = select(sample, in_air);
    if selection.is_empty() {
        return Derived::Undefined;
    }

    let values = match config.angle_unit() {
        AngleUnit::Degrees => selection.column(field),
        AngleUnit::Radians => selection.column(|p| field(p).to_radians()),
    };
    Derived::defined(values)
}
