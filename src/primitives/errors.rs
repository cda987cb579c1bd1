//! Error types for handwriting feature computation.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate: sample construction, configuration building,
//! statistic parsing and feature dispatch.
//!
//! ## Design notes
//!
//! * **Structural only**: Errors describe malformed requests or inputs.
//!   Sparse data (too few points, zero durations) is never an error; it is
//!   reported through the `Feature::Undefined` / `None` sentinels instead.
//! * **no_std**: `Display` is hand-written; `std::error::Error` is only
//!   implemented with the `std` feature.
//!
//! ## Invariants
//!
//! * Every variant carries enough context to name the offending entry.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

/// Errors raised by handwriting feature computation.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// A derivation argument outside its declared domain, or an argument the
    /// requested feature does not accept.
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// A statistic name outside the supported set.
    UnsupportedStatistic(String),

    /// A request that is well-formed but undefined for the feature, such as
    /// statistics requested on a scalar feature.
    InvalidRequest {
        /// Feature the request was made against.
        feature: &'static str,
        /// Human-readable explanation.
        reason: &'static str,
    },

    /// A feature name outside the registry.
    UnknownFeature(String),

    /// Timestamps decrease at the given point index.
    NonMonotonicTimestamps {
        /// Index of the first point whose timestamp is smaller than its predecessor's.
        index: usize,
    },

    /// A non-finite value where a finite one is required.
    InvalidNumericValue(String),

    /// Column arrays of different lengths passed to `Sample::from_columns`.
    MismatchedColumns {
        /// Column whose length differs from `x`.
        column: &'static str,
        /// Length of the `x` column.
        expected: usize,
        /// Length of the offending column.
        got: usize,
    },

    /// A unit scale or pressure range that is not finite and positive.
    InvalidScale {
        /// Name of the configuration parameter.
        parameter: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A configuration parameter was set more than once on the builder.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::InvalidParameter { parameter, reason } => {
                write!(f, "Invalid parameter '{}': {}", parameter, reason)
            }
            FeatureError::UnsupportedStatistic(name) => {
                write!(f, "Unsupported statistic: '{}'", name)
            }
            FeatureError::InvalidRequest { feature, reason } => {
                write!(f, "Invalid request for feature '{}': {}", feature, reason)
            }
            FeatureError::UnknownFeature(name) => write!(f, "Unknown feature: '{}'", name),
            FeatureError::NonMonotonicTimestamps { index } => write!(
                f,
                "Timestamps must be non-decreasing: point {} precedes its predecessor",
                index
            ),
            FeatureError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            FeatureError::MismatchedColumns {
                column,
                expected,
                got,
            } => write!(
                f,
                "Length mismatch: column '{}' has {} points, x has {}",
                column, got, expected
            ),
            FeatureError::InvalidScale { parameter, value } => write!(
                f,
                "Invalid {}: {} (must be > 0 and finite)",
                parameter, value
            ),
            FeatureError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FeatureError {}
