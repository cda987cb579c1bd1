//! Input validation for samples, configuration and feature requests.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any feature is
//! computed: the sample timestamp invariant, column lengths, configuration
//! scales, builder duplicates and the compatibility of a request with the
//! requested feature.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not compute features.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::FeatureRequest;
use crate::engine::registry::FeatureId;
use crate::evaluation::statistics::Statistic;
use crate::primitives::errors::FeatureError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for samples, configuration and requests.
///
/// All methods return `Result<(), FeatureError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate that timestamps are finite and non-decreasing.
    pub fn validate_timestamps<T, I>(timestamps: I) -> Result<(), FeatureError>
    where
        T: Float,
        I: IntoIterator<Item = T>,
    {
        let mut previous: Option<T> = None;
        for (i, t) in timestamps.into_iter().enumerate() {
            if !t.is_finite() {
                return Err(FeatureError::InvalidNumericValue(format!(
                    "timestamp[{}]={}",
                    i,
                    t.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if previous.is_some_and(|p| t < p) {
                return Err(FeatureError::NonMonotonicTimestamps { index: i });
            }
            previous = Some(t);
        }
        Ok(())
    }

    /// Validate that a column has the length of the `x` column.
    pub fn validate_column_len(
        column: &'static str,
        expected: usize,
        got: usize,
    ) -> Result<(), FeatureError> {
        if expected != got {
            return Err(FeatureError::MismatchedColumns {
                column,
                expected,
                got,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate a unit scale or pressure range.
    pub fn validate_scale<T: Float>(value: T, parameter: &'static str) -> Result<(), FeatureError> {
        if !value.is_finite() || value <= T::zero() {
            return Err(FeatureError::InvalidScale {
                parameter,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FeatureError> {
        if let Some(parameter) = duplicate_param {
            return Err(FeatureError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Request Validation
    // ========================================================================

    /// Validate that a request only sets parameters the feature accepts and
    /// only asks for supported statistics on array features.
    pub fn validate_request(feature: FeatureId, request: &FeatureRequest) -> Result<(), FeatureError> {
        let accepted = feature.parameters();

        if request.axis.is_some() && !accepted.axis {
            return Err(FeatureError::InvalidParameter {
                parameter: "axis",
                reason: format!("feature '{}' does not accept an axis", feature),
            });
        }

        if request.in_air.is_some() && !accepted.in_air {
            return Err(FeatureError::InvalidParameter {
                parameter: "in_air",
                reason: format!("feature '{}' does not accept an in-air flag", feature),
            });
        }

        if feature.is_scalar() && !request.statistics.is_empty() {
            return Err(FeatureError::InvalidRequest {
                feature: feature.name(),
                reason: "statistics cannot be computed on a scalar feature",
            });
        }

        Self::validate_statistics(&request.statistics)
    }

    /// Validate that every percentile lies in `[0, 100]`.
    pub fn validate_statistics(statistics: &[Statistic]) -> Result<(), FeatureError> {
        if let Some(stat) = statistics
            .iter()
            .find(|stat| matches!(stat, Statistic::Percentile(p) if *p > 100))
        {
            return Err(FeatureError::UnsupportedStatistic(stat.to_string()));
        }
        Ok(())
    }
}
