//! Pen-trajectory sample representation.
//!
//! ## Purpose
//!
//! This module defines `Point`, a single tablet reading, and `Sample`, the
//! immutable time-ordered trajectory every feature is computed from.
//!
//! ## Design notes
//!
//! * **Validated once**: `Sample` can only be constructed through `new`,
//!   `from_columns` or `TryFrom`, all of which check the timestamp invariant.
//! * **Read-only**: No method hands out mutable access to the points.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Timestamps are finite and non-decreasing.
//! * A sample may be empty.
//!
//! ## Non-goals
//!
//! * This module does not parse device file formats.
//! * This module does not validate coordinates, pressure or angles; a
//!   non-finite reading is kept as a genuine measurement.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::FeatureError;
use crate::primitives::partition::PenState;

// ============================================================================
// Point
// ============================================================================

/// A single reading of the digitizing device.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    /// Horizontal position in device units.
    pub x: T,

    /// Vertical position in device units.
    pub y: T,

    /// Pen pressure in device levels.
    pub pressure: T,

    /// Pen azimuth in degrees.
    pub azimuth: T,

    /// Pen tilt (altitude) in degrees.
    pub tilt: T,

    /// Time of the reading in device ticks.
    pub timestamp: T,

    /// Whether the pen touches the surface.
    pub pen_state: PenState,
}

impl<T: Float> Point<T> {
    /// Create a point with position, time and pen state; pressure and angles are zero.
    pub fn at(x: T, y: T, timestamp: T, pen_state: PenState) -> Self {
        Self {
            x,
            y,
            pressure: T::zero(),
            azimuth: T::zero(),
            tilt: T::zero(),
            timestamp,
            pen_state,
        }
    }

    /// Set the pressure reading.
    pub fn with_pressure(mut self, pressure: T) -> Self {
        self.pressure = pressure;
        self
    }

    /// Set the azimuth and tilt readings.
    pub fn with_angles(mut self, azimuth: T, tilt: T) -> Self {
        self.azimuth = azimuth;
        self.tilt = tilt;
        self
    }
}

// ============================================================================
// Sample
// ============================================================================

/// Immutable, time-ordered handwriting trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    points: Vec<Point<T>>,
}

impl<T: Float> Sample<T> {
    /// Create a sample from points in recording order.
    pub fn new(points: Vec<Point<T>>) -> Result<Self, FeatureError> {
        Validator::validate_timestamps(points.iter().map(|p| p.timestamp))?;
        Ok(Self { points })
    }

    /// Create a sample from per-field column arrays.
    ///
    /// All columns must have the length of `x`.
    pub fn from_columns(
        x: &[T],
        y: &[T],
        pressure: &[T],
        azimuth: &[T],
        tilt: &[T],
        timestamp: &[T],
        pen_state: &[PenState],
    ) -> Result<Self, FeatureError> {
        let n = x.len();
        Validator::validate_column_len("y", n, y.len())?;
        Validator::validate_column_len("pressure", n, pressure.len())?;
        Validator::validate_column_len("azimuth", n, azimuth.len())?;
        Validator::validate_column_len("tilt", n, tilt.len())?;
        Validator::validate_column_len("timestamp", n, timestamp.len())?;
        Validator::validate_column_len("pen_state", n, pen_state.len())?;

        let points = (0..n)
            .map(|i| Point {
                x: x[i],
                y: y[i],
                pressure: pressure[i],
                azimuth: azimuth[i],
                tilt: tilt[i],
                timestamp: timestamp[i],
                pen_state: pen_state[i],
            })
            .collect();

        Self::new(points)
    }

    /// All points in recording order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the sample has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point<T>> {
        self.points.get(index)
    }

    /// Iterate over the points in recording order.
    pub fn iter(&self) -> core::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }
}

impl<T: Float> TryFrom<Vec<Point<T>>> for Sample<T> {
    type Error = FeatureError;

    fn try_from(points: Vec<Point<T>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<'a, T> IntoIterator for &'a Sample<T> {
    type Item = &'a Point<T>;
    type IntoIter = core::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
