//! # Handwriting Features: quantitative handwriting analysis for Rust
//!
//! Kinematic, dynamic, spatial and temporal features computed from
//! digitized pen trajectories captured by a tablet or stylus.
//!
//! ## What is a handwriting feature?
//!
//! A digitizing tablet records, at a fixed rate, the pen position, pressure,
//! azimuth and tilt together with a timestamp and whether the pen touches
//! the surface. Handwriting features summarize such a recording:
//!
//! | Family    | Features                                                          |
//! |-----------|-------------------------------------------------------------------|
//! | Kinematic | velocity, acceleration, jerk (x, y or xy projection)              |
//! | Dynamic   | azimuth, tilt, pressure                                           |
//! | Spatial   | stroke length, stroke height, stroke width                        |
//! | Temporal  | stroke duration, writing duration and their on-surface/in-air ratios |
//!
//! Most features can be computed over the on-surface movement or over the
//! in-air movement between strokes, and reduced to summary statistics.
//!
//! ## Quick Start
//!
//! ```rust
//! use handwriting_features::prelude::*;
//!
//! // Five on-surface points, one time unit apart, moving right
//! let points = (0..5)
//!     .map(|i| Point::at(i as f64, 0.0, i as f64, OnSurface))
//!     .collect();
//! let sample = Sample::new(points)?;
//! let config = FeatureConfigBuilder::new().build()?;
//!
//! let features = HandwritingFeatures::new(&sample, &config);
//!
//! // Raw array, one value per consecutive point pair
//! let velocity = features.velocity(X, false, &[])?;
//! assert_eq!(velocity, Feature::Array(vec![Some(1.0); 4]));
//!
//! // Reduced to statistics
//! let stats = features.velocity(X, false, &[Mean, Std])?;
//! assert_eq!(stats.statistic(Mean), Some(1.0));
//! assert_eq!(stats.statistic(Std), Some(0.0));
//! # Result::<(), FeatureError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Feature methods return `Result<Feature<T>, FeatureError>`.
//!
//! - **`Ok(Feature::Array(..))`**: per-point or per-stroke values.
//! - **`Ok(Feature::Scalar(..))`**: writing duration and its ratio.
//! - **`Ok(Feature::Statistics(..))`**: requested statistics, in request order.
//! - **`Ok(Feature::Undefined)`**: not enough data (e.g. a velocity over a
//!   single in-air point). This is an expected outcome, not an error.
//! - **`Err(FeatureError)`**: a malformed request, such as an unknown
//!   statistic name or statistics requested on a scalar feature.
//!
//! ```rust
//! use handwriting_features::prelude::*;
//!
//! let sample = Sample::<f64>::new(vec![])?;
//! let config = FeatureConfigBuilder::new().build()?;
//! let features = HandwritingFeatures::new(&sample, &config);
//!
//! // Sparse data is absorbed into the sentinel
//! assert!(features.velocity(Xy, true, &[])?.is_undefined());
//!
//! // Malformed requests are rejected before anything is computed
//! let request = FeatureRequest::new().statistics_named(&["mean", "mode"]);
//! assert_eq!(
//!     request.unwrap_err(),
//!     FeatureError::UnsupportedStatistic("mode".to_string())
//! );
//! # Result::<(), FeatureError>::Ok(())
//! ```
//!
//! ## Units
//!
//! Positions and timestamps are taken in device units unless a scale is
//! configured:
//!
//! ```rust
//! use handwriting_features::prelude::*;
//!
//! let config = FeatureConfigBuilder::<f64>::new()
//!     .distance_scale(0.01)      // device units → mm
//!     .time_scale(0.001)         // ms → s
//!     .angle_unit(Radians)       // report azimuth/tilt in radians
//!     .pressure_levels(1024.0)   // normalize pressure to [0, 1]
//!     .build()?;
//! # Result::<(), FeatureError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! handwriting-features = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The engine emits `tracing` events (`debug` on dispatch, `trace` when a
//! feature falls back to the undefined sentinel). Install any subscriber to
//! see them; the library never installs one itself.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, pen-state/axis/angle-unit enums, the session
// configuration and the `Point` / `Sample` trajectory types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains forward differences, planar distances and order statistics.
mod math;

// Layer 3: Algorithms - segmentation and derivation functions.
//
// Contains the segmenter and the kinematic, dynamic, spatial and temporal
// derivations.
mod algorithms;

// Layer 4: Evaluation - summary statistics.
//
// Contains the statistics reducer.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the feature registry, the dispatcher and results.
mod engine;

// High-level API.
//
// Provides the configuration builder and the `HandwritingFeatures` facade.
mod api;

pub use api::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard handwriting-features prelude.
///
/// Brings the facade, the builder, the data types and every enum variant
/// used in requests into scope.
pub mod prelude {
    pub use crate::api::{
        AngleUnit,
        AngleUnit::{Degrees, Radians},
        Axis,
        Axis::{X, Xy, Y},
        Feature, FeatureConfig, FeatureConfigBuilder, FeatureError, FeatureId, FeatureRequest,
        HandwritingFeatures, PenState,
        PenState::{InAir, OnSurface},
        Point, Sample, Statistic,
        Statistic::{Cv, Iqr, Max, Mean, Median, Min, Percentile, Quartile1, Quartile3, Range, Std},
        StatisticsMap,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules exposed for integration tests.
///
/// Enabled with the `dev` feature; not part of the stable API.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal segmentation and derivation functions.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal statistics reducer.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
