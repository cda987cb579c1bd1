//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the segmenter and the derivation functions, one
//! module per feature family:
//! - Segmentation into pen-state selections and strokes
//! - Kinematic features (velocity, acceleration, jerk)
//! - Dynamic features (azimuth, tilt, pressure)
//! - Spatial features (stroke length, height, width)
//! - Temporal features (stroke and writing durations and their ratios)
//!
//! Every derivation is a pure function of a sample and a configuration and
//! returns a [`Derived`] value.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Pen-state selection and stroke segmentation.
pub mod segmentation;

/// Velocity, acceleration and jerk.
pub mod kinematic;

/// Azimuth, tilt and pressure.
pub mod dynamic;

/// Stroke length, height and width.
pub mod spatial;

/// Stroke and writing durations.
pub mod temporal;

/// Raw output of a derivation function, before any reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum Derived<T> {
    /// Not enough points or strokes to compute the feature.
    Undefined,

    /// One value per point or per stroke; `None` marks an undefined slot.
    Array(Vec<Option<T>>),

    /// Inherently scalar feature.
    Scalar(T),
}

impl<T> Derived<T> {
    /// Wrap fully defined values.
    pub fn defined(values: Vec<T>) -> Self {
        Derived::Array(values.into_iter().map(Some).collect())
    }

    /// Returns `true` for the insufficient-data sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Derived::Undefined)
    }
}
