//! Enumerations controlling how a sample is partitioned and projected.
//!
//! ## Purpose
//!
//! This module defines the small configuration enums shared by the
//! segmenter, the derivation functions and the dispatcher:
//! the pen state that partitions a sample, the axis projection used by
//! kinematic features, and the unit in which pen angles are reported.
//!
//! ## Design notes
//!
//! * **Encapsulated**: Each choice is a closed enum with a documented default.
//! * **Trait Implementation**: All types implement `Debug`, `Clone`, `Copy`, `PartialEq`, and `Eq`.
//! * **Parsable**: `Axis` parses from the names `"x"`, `"y"` and `"xy"`.
//!
//! ## Invariants
//!
//! * `Axis::Xy` is the default projection; `AngleUnit::Degrees` the default unit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::FeatureError;

/// Whether the pen touches the writing surface at a sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PenState {
    /// Stylus is touching the surface.
    OnSurface,

    /// Stylus is lifted but still tracked by the device.
    InAir,
}

impl PenState {
    /// Pen state selected by an `in_air` flag.
    #[inline]
    pub fn from_in_air(in_air: bool) -> Self {
        if in_air {
            PenState::InAir
        } else {
            PenState::OnSurface
        }
    }

    /// Returns `true` for `PenState::InAir`.
    #[inline]
    pub fn is_in_air(self) -> bool {
        self == PenState::InAir
    }
}

/// Coordinate projection for kinematic features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Horizontal coordinate only (signed).
    X,

    /// Vertical coordinate only (signed).
    Y,

    /// Euclidean displacement between consecutive points (non-negative).
    #[default]
    Xy,
}

impl Axis {
    /// Canonical name of the projection.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Xy => "xy",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "xy" => Ok(Axis::Xy),
            other => Err(FeatureError::InvalidParameter {
                parameter: "axis",
                reason: format!("'{}' is not one of \"x\", \"y\", \"xy\"", other),
            }),
        }
    }
}

/// Unit in which azimuth and tilt are reported.
///
/// Devices record pen angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AngleUnit {
    /// Recorded values, unchanged.
    #[default]
    Degrees,

    /// Recorded values converted to radians.
    Radians,
}
