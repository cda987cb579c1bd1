//! Spatial features: per-stroke length, height and width.
//!
//! ## Purpose
//!
//! This module measures the spatial extent of every stroke of the
//! on-surface or in-air subsequence.
//!
//! ## Key concepts
//!
//! * **Length**: Cumulative Euclidean path length along the stroke.
//! * **Height / Width**: Vertical / horizontal extent of the stroke's bounding box.
//!
//! ## Invariants
//!
//! * One value per stroke, in temporal order.
//! * A single-point stroke measures zero in every dimension.
//! * No strokes yields `Derived::Undefined`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::Derived;
use crate::algorithms::segmentation::{Stroke, select};
use crate::math::distance::{extent, path_length};
use crate::primitives::config::FeatureConfig;
use crate::primitives::sample::Sample;

/// Path length of every stroke.
pub fn stroke_length<T: Float>(
    sample: &Sample<T>,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    per_stroke(sample, in_air, |stroke| {
        let ds = config.distance_scale();
        let points = stroke.points(sample);
        let x: Vec<T> = points.iter().map(|p| p.x * ds).collect();
        let y: Vec<T> = points.iter().map(|p| p.y * ds).collect();
        path_length(&x, &y)
    })
}

/// Bounding-box height of every stroke.
pub fn stroke_height<T: Float>(
    sample: &Sample<T>,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    per_stroke(sample, in_air, |stroke| {
        let y: Vec<T> = stroke.points(sample).iter().map(|p| p.y).collect();
        extent(&y) * config.distance_scale()
    })
}

/// Bounding-box width of every stroke.
pub fn stroke_width<T: Float>(
    sample: &Sample<T>,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    per_stroke(sample, in_air, |stroke| {
        let x: Vec<T> = stroke.points(sample).iter().map(|p| p.x).collect();
        extent(&x) * config.distance_scale()
    })
}

/// Apply `measure` to every stroke of the selected subsequence.
pub(crate) fn per_stroke<T, F>(sample: &Sample<T>, in_air: bool, measure: F) -> Derived<T>
where
    T: Float,
    F: Fn(&Stroke) -> T,
{
    let strokes = select(sample, in_air).strokes();
    if strokes.is_empty() {
        return Derived::Undefined;
    }
    Derived::defined(strokes.iter().map(measure).collect())
}
