//! Closed registry of handwriting features.
//!
//! ## Purpose
//!
//! This module enumerates every feature the engine can compute, together
//! with the parameters each one accepts and whether it is scalar. The
//! dispatcher matches exhaustively on `FeatureId`, so adding a variant
//! without a derivation does not compile.
//!
//! ## Key concepts
//!
//! * **Parameter set**: Which of `axis` and `in_air` a feature accepts.
//! * **Scalar features**: Produce one value per sample and cannot be reduced.

use core::fmt;
use core::str::FromStr;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// Internal dependencies
use crate::primitives::errors::FeatureError;

/// Parameters a feature accepts besides `statistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterSet {
    /// Accepts an axis projection.
    pub axis: bool,

    /// Accepts an in-air flag.
    pub in_air: bool,
}

/// Identifier of a computable feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    /// Kinematic: first time derivative of position.
    Velocity,
    /// Kinematic: second time derivative of position.
    Acceleration,
    /// Kinematic: third time derivative of position.
    Jerk,
    /// Dynamic: pen azimuth.
    Azimuth,
    /// Dynamic: pen tilt.
    Tilt,
    /// Dynamic: pen pressure.
    Pressure,
    /// Spatial: path length per stroke.
    StrokeLength,
    /// Spatial: bounding-box height per stroke.
    StrokeHeight,
    /// Spatial: bounding-box width per stroke.
    StrokeWidth,
    /// Temporal: elapsed time per stroke.
    StrokeDuration,
    /// Temporal: on-surface / in-air stroke duration per stroke pair.
    RatioOfStrokeDurations,
    /// Temporal: elapsed time of a whole subsequence.
    WritingDuration,
    /// Temporal: on-surface / in-air writing duration.
    RatioOfWritingDurations,
}

impl FeatureId {
    /// Every feature, grouped kinematic, dynamic, spatial, temporal.
    pub const ALL: [FeatureId; 13] = [
        FeatureId::Velocity,
        FeatureId::Acceleration,
        FeatureId::Jerk,
        FeatureId::Azimuth,
        FeatureId::Tilt,
        FeatureId::Pressure,
        FeatureId::StrokeLength,
        FeatureId::StrokeHeight,
        FeatureId::StrokeWidth,
        FeatureId::StrokeDuration,
        FeatureId::RatioOfStrokeDurations,
        FeatureId::WritingDuration,
        FeatureId::RatioOfWritingDurations,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            FeatureId::Velocity => "velocity",
            FeatureId::Acceleration => "acceleration",
            FeatureId::Jerk => "jerk",
            FeatureId::Azimuth => "azimuth",
            FeatureId::Tilt => "tilt",
            FeatureId::Pressure => "pressure",
            FeatureId::StrokeLength => "stroke_length",
            FeatureId::StrokeHeight => "stroke_height",
            FeatureId::StrokeWidth => "stroke_width",
            FeatureId::StrokeDuration => "stroke_duration",
            FeatureId::RatioOfStrokeDurations => "ratio_of_stroke_durations",
            FeatureId::WritingDuration => "writing_duration",
            FeatureId::RatioOfWritingDurations => "ratio_of_writing_durations",
        }
    }

    /// Parameters accepted by the feature.
    pub fn parameters(self) -> ParameterSet {
        match self {
            FeatureId::Velocity | FeatureId::Acceleration | FeatureId::Jerk => ParameterSet {
                axis: true,
                in_air: true,
            },
            FeatureId::Azimuth
            | FeatureId::Tilt
            | FeatureId::StrokeLength
            | FeatureId::StrokeHeight
            | FeatureId::StrokeWidth
            | FeatureId::StrokeDuration
            | FeatureId::WritingDuration => ParameterSet {
                axis: false,
                in_air: true,
            },
            FeatureId::Pressure
            | FeatureId::RatioOfStrokeDurations
            | FeatureId::RatioOfWritingDurations => ParameterSet::default(),
        }
    }

    /// Returns `true` if the feature yields a single value per sample.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            FeatureId::WritingDuration | FeatureId::RatioOfWritingDurations
        )
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for FeatureId {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| FeatureError::UnknownFeature(s.to_string()))
    }
}
