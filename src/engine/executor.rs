//! Execution engine for handwriting feature computation.
//!
//! ## Purpose
//!
//! This module provides the compute dispatcher every public feature accessor
//! goes through. It validates the per-call request against the feature's
//! parameter set, resolves defaults, runs the derivation function and, when
//! statistics are requested, hands the raw array to the statistics reducer.
//!
//! ## Design notes
//!
//! * **Closed dispatch**: `FeatureExecutor::derive` matches exhaustively on
//!   `FeatureId`; there is no lookup by name at dispatch time.
//! * **Explicit requests**: Optional parameters live in `FeatureRequest`;
//!   unset fields take documented defaults, parameters a feature does not
//!   accept are rejected.
//! * **Stateless**: Nothing is cached between calls; the sample and the
//!   configuration are only borrowed immutably.
//!
//! ## Key concepts
//!
//! * **Request**: `axis` (default `Axis::Xy`), `in_air` (default `false`),
//!   `statistics` (default none, i.e. raw output).
//!
//! ## Invariants
//!
//! * Parameter and request errors are raised before any derivation runs.
//! * Identical inputs always produce identical results.
//!
//! ## Non-goals
//!
//! * This module does not validate sample contents (handled by `Sample::new`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::Derived;
use crate::algorithms::{dynamic, kinematic, spatial, temporal};
use crate::engine::output::Feature;
use crate::engine::registry::FeatureId;
use crate::engine::validator::Validator;
use crate::evaluation::statistics::{Statistic, reduce};
use crate::primitives::config::FeatureConfig;
use crate::primitives::errors::FeatureError;
use crate::primitives::partition::Axis;
use crate::primitives::sample::Sample;

// ============================================================================
// Request
// ============================================================================

/// Per-call parameters of a feature computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRequest {
    /// Axis projection for kinematic features; `None` means `Axis::Xy`.
    pub axis: Option<Axis>,

    /// Select the in-air subsequence; `None` means on-surface.
    pub in_air: Option<bool>,

    /// Statistics to reduce the raw array to; empty means raw output.
    pub statistics: Vec<Statistic>,
}

impl FeatureRequest {
    /// Request with every parameter at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axis projection.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the in-air flag.
    pub fn in_air(mut self, in_air: bool) -> Self {
        self.in_air = Some(in_air);
        self
    }

    /// Set the statistics to compute.
    pub fn statistics(mut self, statistics: &[Statistic]) -> Self {
        self.statistics = statistics.to_vec();
        self
    }

    /// Set the statistics to compute by name.
    pub fn statistics_named<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, FeatureError> {
        self.statistics = Statistic::parse_all(names)?;
        Ok(self)
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Dispatches feature computations over one sample and configuration.
#[derive(Debug, Clone, Copy)]
pub struct FeatureExecutor<'a, T> {
    sample: &'a Sample<T>,
    config: &'a FeatureConfig<T>,
}

impl<'a, T: Float> FeatureExecutor<'a, T> {
    /// Create an executor over a sample and configuration.
    pub fn new(sample: &'a Sample<T>, config: &'a FeatureConfig<T>) -> Self {
        Self { sample, config }
    }

    /// Sample the executor reads from.
    pub fn sample(&self) -> &'a Sample<T> {
        self.sample
    }

    /// Configuration the executor applies.
    pub fn config(&self) -> &'a FeatureConfig<T> {
        self.config
    }

    /// Compute a feature.
    ///
    /// Fails with `InvalidParameter` if the request sets a parameter the
    /// feature does not accept, and with `InvalidRequest` if statistics are
    /// requested on a scalar feature.
    pub fn compute(&self, feature: FeatureId, request: &FeatureRequest) -> Result<Feature<T>, FeatureError> {
        Validator::validate_request(feature, request)?;

        let axis = request.axis.unwrap_or_default();
        let in_air = request.in_air.unwrap_or(false);

        debug!(
            feature = %feature,
            axis = %axis,
            in_air,
            points = self.sample.len(),
            statistics = request.statistics.len(),
            "computing feature"
        );

        let derived = self.derive(feature, axis, in_air);

        if request.statistics.is_empty() {
            return Ok(derived.into());
        }

        match derived {
            Derived::Array(values) => Ok(Feature::Statistics(reduce(&values, &request.statistics))),
            Derived::Undefined => Ok(Feature::Statistics(reduce(&[], &request.statistics))),
            Derived::Scalar(_) => Err(FeatureError::InvalidRequest {
                feature: feature.name(),
                reason: "statistics cannot be computed on a scalar feature",
            }),
        }
    }

    /// Compute a feature identified by its name.
    pub fn compute_by_name(&self, name: &str, request: &FeatureRequest) -> Result<Feature<T>, FeatureError> {
        let feature: FeatureId = name.parse()?;
        self.compute(feature, request)
    }

    /// Run the derivation function of a feature with resolved parameters.
    ///
    /// Parameters the feature does not accept are ignored.
    pub fn derive(&self, feature: FeatureId, axis: Axis, in_air: bool) -> Derived<T> {
        let (sample, config) = (self.sample, self.config);
        match feature {
            FeatureId::Velocity => kinematic::velocity(sample, axis, in_air, config),
            FeatureId::Acceleration => kinematic::acceleration(sample, axis, in_air, config),
            FeatureId::Jerk => kinematic::jerk(sample, axis, in_air, config),
            FeatureId::Azimuth => dynamic::azimuth(sample, in_air, config),
            FeatureId::Tilt => dynamic::tilt(sample, in_air, config),
            FeatureId::Pressure => dynamic::pressure(sample, config),
            FeatureId::StrokeLength => spatial::stroke_length(sample, in_air, config),
            FeatureId::StrokeHeight => spatial::stroke_height(sample, in_air, config),
            FeatureId::StrokeWidth => spatial::stroke_width(sample, in_air, config),
            FeatureId::StrokeDuration => temporal::stroke_duration(sample, in_air, config),
            FeatureId::RatioOfStrokeDurations => temporal::ratio_of_stroke_durations(sample, config),
            FeatureId::WritingDuration => temporal::writing_duration(sample, in_air, config),
            FeatureId::RatioOfWritingDurations => {
                temporal::ratio_of_writing_durations(sample, config)
            }
        }
    }
}

/// Compute a feature over a sample; see [`FeatureExecutor::compute`].
pub fn compute<T: Float>(
    sample: &Sample<T>,
    config: &FeatureConfig<T>,
    feature: FeatureId,
    request: &FeatureRequest,
) -> Result<Feature<T>, FeatureError> {
    FeatureExecutor::new(sample, config).compute(feature, request)
}
