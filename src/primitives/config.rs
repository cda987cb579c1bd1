//! Unit and normalization settings shared by every derivation.
//!
//! ## Purpose
//!
//! This module defines `FeatureConfig`, the immutable configuration of a
//! feature-extraction session. It is built and validated by
//! `FeatureConfigBuilder` in the API layer and shared by reference across all
//! computations on a sample.
//!
//! ## Invariants
//!
//! * Scales are finite and strictly positive.
//! * `pressure_levels`, when set, is finite and strictly positive.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::partition::AngleUnit;

/// Unit conventions for a feature-extraction session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureConfig<T> {
    distance_scale: T,
    time_scale: T,
    angle_unit: AngleUnit,
    pressure_levels: Option<T>,
}

impl<T: Float> Default for FeatureConfig<T> {
    fn default() -> Self {
        Self {
            distance_scale: T::one(),
            time_scale: T::one(),
            angle_unit: AngleUnit::default(),
            pressure_levels: None,
        }
    }
}

impl<T: Float> FeatureConfig<T> {
    /// Assemble an already validated configuration.
    pub(crate) fn from_parts(
        distance_scale: T,
        time_scale: T,
        angle_unit: AngleUnit,
        pressure_levels: Option<T>,
    ) -> Self {
        Self {
            distance_scale,
            time_scale,
            angle_unit,
            pressure_levels,
        }
    }

    /// Factor converting device coordinates to the distance unit.
    #[inline]
    pub fn distance_scale(&self) -> T {
        self.distance_scale
    }

    /// Factor converting device timestamps to the time unit.
    #[inline]
    pub fn time_scale(&self) -> T {
        self.time_scale
    }

    /// Unit in which azimuth and tilt are reported.
    #[inline]
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Maximum pressure level of the device, if pressure is normalized.
    #[inline]
    pub fn pressure_levels(&self) -> Option<T> {
        self.pressure_levels
    }
}
