//! High-level API for handwriting feature extraction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for the session configuration and the `HandwritingFeatures`
//! facade exposing one method per feature.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called.
//! * **Thin facade**: Every feature method builds a `FeatureRequest` and
//!   delegates to the engine's dispatcher.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FeatureConfigBuilder`] via `FeatureConfigBuilder::new()`.
//! 2. Chain configuration methods (`.distance_scale()`, `.angle_unit()`, etc.).
//! 3. Call `.build()` to obtain a validated [`FeatureConfig`].
//! 4. Wrap a sample and the configuration in [`HandwritingFeatures`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::FeatureExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::segmentation::{Selection, Stroke, select, strokes};
pub use crate::engine::executor::{FeatureRequest, compute};
pub use crate::engine::output::Feature;
pub use crate::engine::registry::{FeatureId, ParameterSet};
pub use crate::evaluation::statistics::{Statistic, StatisticsMap, reduce, reduce_named};
pub use crate::primitives::config::FeatureConfig;
pub use crate::primitives::errors::FeatureError;
pub use crate::primitives::partition::{AngleUnit, Axis, PenState};
pub use crate::primitives::sample::{Point, Sample};

// ============================================================================
// Configuration Builder
// ============================================================================

/// Fluent builder for [`FeatureConfig`].
#[derive(Debug, Clone)]
pub struct FeatureConfigBuilder<T: Float> {
    /// Device units → distance unit factor (default 1).
    pub distance_scale: Option<T>,

    /// Device ticks → time unit factor (default 1).
    pub time_scale: Option<T>,

    /// Unit of azimuth and tilt (default degrees).
    pub angle_unit: Option<AngleUnit>,

    /// Maximum pressure level; when set, pressure is normalized to [0, 1].
    pub pressure_levels: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FeatureConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FeatureConfigBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            distance_scale: None,
            time_scale: None,
            angle_unit: None,
            pressure_levels: None,
            duplicate_param: None,
        }
    }

    /// Set the factor converting device coordinates to the distance unit.
    pub fn distance_scale(mut self, scale: T) -> Self {
        if self.distance_scale.is_some() {
            self.duplicate_param = Some("distance_scale");
        }
        self.distance_scale = Some(scale);
        self
    }

    /// Set the factor converting device timestamps to the time unit.
    ///
    /// E.g. `0.001` for millisecond timestamps reported in seconds.
    pub fn time_scale(mut self, scale: T) -> Self {
        if self.time_scale.is_some() {
            self.duplicate_param = Some("time_scale");
        }
        self.time_scale = Some(scale);
        self
    }

    /// Set the unit in which azimuth and tilt are reported.
    pub fn angle_unit(mut self, unit: AngleUnit) -> Self {
        if self.angle_unit.is_some() {
            self.duplicate_param = Some("angle_unit");
        }
        self.angle_unit = Some(unit);
        self
    }

    /// Normalize pressure by the device's maximum pressure level.
    pub fn pressure_levels(mut self, levels: T) -> Self {
        if self.pressure_levels.is_some() {
            self.duplicate_param = Some("pressure_levels");
        }
        self.pressure_levels = Some(levels);
        self
    }

    /// Validate the settings and build the configuration.
    pub fn build(self) -> Result<FeatureConfig<T>, FeatureError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let distance_scale = self.distance_scale.unwrap_or_else(T::one);
        let time_scale = self.time_scale.unwrap_or_else(T::one);
        Validator::validate_scale(distance_scale, "distance_scale")?;
        Validator::validate_scale(time_scale, "time_scale")?;
        if let Some(levels) = self.pressure_levels {
            Validator::validate_scale(levels, "pressure_levels")?;
        }

        Ok(FeatureConfig::from_parts(
            distance_scale,
            time_scale,
            self.angle_unit.unwrap_or_default(),
            self.pressure_levels,
        ))
    }
}

// ============================================================================
// Facade
// ============================================================================

/// Handwriting features of one sample under one configuration.
///
/// Every method recomputes its feature from the sample; results are
/// reproducible and independent of call order.
#[derive(Debug, Clone, Copy)]
pub struct HandwritingFeatures<'a, T> {
    executor: FeatureExecutor<'a, T>,
}

impl<'a, T: Float> HandwritingFeatures<'a, T> {
    /// Create the facade over a sample and configuration.
    pub fn new(sample: &'a Sample<T>, config: &'a FeatureConfig<T>) -> Self {
        Self {
            executor: FeatureExecutor::new(sample, config),
        }
    }

    /// Sample the features are computed from.
    pub fn sample(&self) -> &'a Sample<T> {
        self.executor.sample()
    }

    /// Configuration applied to every feature.
    pub fn config(&self) -> &'a FeatureConfig<T> {
        self.executor.config()
    }

    /// Compute any feature with an explicit request.
    pub fn compute(&self, feature: FeatureId, request: &FeatureRequest) -> Result<Feature<T>, FeatureError> {
        self.executor.compute(feature, request)
    }

    /// Compute a feature identified by name, e.g. `"stroke_length"`.
    pub fn compute_by_name(&self, name: &str, request: &FeatureRequest) -> Result<Feature<T>, FeatureError> {
        self.executor.compute_by_name(name, request)
    }

    // ------------------------------------------------------------------
    // Kinematic features
    // ------------------------------------------------------------------

    /// Velocity along `axis`.
    pub fn velocity(&self, axis: Axis, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.kinematic(FeatureId::Velocity, axis, in_air, statistics)
    }

    /// Acceleration along `axis`.
    pub fn acceleration(&self, axis: Axis, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.kinematic(FeatureId::Acceleration, axis, in_air, statistics)
    }

    /// Jerk along `axis`.
    pub fn jerk(&self, axis: Axis, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.kinematic(FeatureId::Jerk, axis, in_air, statistics)
    }

    // ------------------------------------------------------------------
    // Dynamic features
    // ------------------------------------------------------------------

    /// Pen azimuth.
    pub fn azimuth(&self, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.selected(FeatureId::Azimuth, in_air, statistics)
    }

    /// Pen tilt.
    pub fn tilt(&self, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.selected(FeatureId::Tilt, in_air, statistics)
    }

    /// Pen pressure over the whole sample.
    pub fn pressure(&self, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.compute(FeatureId::Pressure, &FeatureRequest::new().statistics(statistics))
    }

    // ------------------------------------------------------------------
    // Spatial features
    // ------------------------------------------------------------------

    /// Path length of each stroke.
    pub fn stroke_length(&self, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.selected(FeatureId::StrokeLength, in_air, statistics)
    }

    /// Bounding-box height of each stroke.
    pub fn stroke_height(&self, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.selected(FeatureId::StrokeHeight, in_air, statistics)
    }

    /// Bounding-box width of each stroke.
    pub fn stroke_width(&self, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.selected(FeatureId::StrokeWidth, in_air, statistics)
    }

    // ------------------------------------------------------------------
    // Temporal features
    // ------------------------------------------------------------------

    /// Elapsed time of each stroke.
    pub fn stroke_duration(&self, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.selected(FeatureId::StrokeDuration, in_air, statistics)
    }

    /// On-surface / in-air duration of each stroke pair.
    pub fn ratio_of_stroke_durations(&self, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        self.compute(
            FeatureId::RatioOfStrokeDurations,
            &FeatureRequest::new().statistics(statistics),
        )
    }

    /// Elapsed time of the on-surface or in-air subsequence.
    pub fn writing_duration(&self, in_air: bool) -> Result<Feature<T>, FeatureError> {
        self.compute(FeatureId::WritingDuration, &FeatureRequest::new().in_air(in_air))
    }

    /// On-surface / in-air writing duration.
    pub fn ratio_of_writing_durations(&self) -> Result<Feature<T>, FeatureError> {
        self.compute(FeatureId::RatioOfWritingDurations, &FeatureRequest::new())
    }

    fn kinematic(
        &self,
        feature: FeatureId,
        axis: Axis,
        in_air: bool,
        statistics: &[Statistic],
    ) -> Result<Feature<T>, FeatureError> {
        let request = FeatureRequest::new()
            .axis(axis)
            .in_air(in_air)
            .statistics(statistics);
        self.compute(feature, &request)
    }

    fn selected(&self, feature: FeatureId, in_air: bool, statistics: &[Statistic]) -> Result<Feature<T>, FeatureError> {
        let request = FeatureRequest::new().in_air(in_air).statistics(statistics);
        self.compute(feature, &request)
    }
}
