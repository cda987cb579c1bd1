//! Temporal features: stroke and writing durations and their ratios.
//!
//! ## Purpose
//!
//! This module measures how long strokes and whole subsequences last, and
//! relates on-surface time to in-air time.
//!
//! ## Design notes
//!
//! * **Pairing**: `ratio_of_stroke_durations` pairs the i-th on-surface
//!   stroke with the i-th in-air stroke. Every on-surface stroke gets a
//!   slot; surplus in-air strokes are ignored.
//! * **Sentinels**: A zero or missing denominator yields `None` (per pair) or
//!   `Derived::Undefined` (scalar), never an infinity. A missing numerator
//!   (no on-surface points at all) is also undefined rather than zero.
//!
//! ## Invariants
//!
//! * Durations are non-negative because timestamps are non-decreasing.
//! * `writing_duration` of an empty or single-point selection is zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::algorithms::Derived;
use crate::algorithms::segmentation::{Stroke, select};
use crate::algorithms::spatial::per_stroke;
use crate::primitives::config::FeatureConfig;
use crate::primitives::sample::Sample;

/// Elapsed time of every stroke.
pub fn stroke_duration<T: Float>(
    sample: &Sample<T>,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    per_stroke(sample, in_air, |stroke| duration_of(sample, stroke, config))
}

/// On-surface stroke durations divided by the matching in-air stroke durations.
///
/// One slot per on-surface stroke. A missing or zero-duration in-air partner
/// gives `None` for that slot.
pub fn ratio_of_stroke_durations<T: Float>(
    sample: &Sample<T>,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    let on_surface = select(sample, false).strokes();
    if on_surface.is_empty() {
        trace!("no on-surface strokes for duration ratio");
        return Derived::Undefined;
    }
    let in_air = select(sample, true).strokes();

    let ratios: Vec<Option<T>> = on_surface
        .iter()
        .enumerate()
        .map(|(i, on)| {
            let denominator = duration_of(sample, in_air.get(i)?, config);
            (denominator != T::zero()).then(|| duration_of(sample, on, config) / denominator)
        })
        .collect();

    Derived::Array(ratios)
}

/// Elapsed time from the first to the last point of the selected subsequence.
pub fn writing_duration<T: Float>(
    sample: &Sample<T>,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    Derived::Scalar(selection_duration(sample, in_air, config).unwrap_or_else(T::zero))
}

/// On-surface writing duration divided by in-air writing duration.
///
/// Undefined when either pen state is absent or the in-air duration is zero.
pub fn ratio_of_writing_durations<T: Float>(
    sample: &Sample<T>,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    let (Some(on_surface), Some(in_air)) = (
        selection_duration(sample, false, config),
        selection_duration(sample, true, config),
    ) else {
        trace!("missing pen state, writing duration ratio undefined");
        return Derived::Undefined;
    };

    if in_air == T::zero() {
        trace!("zero in-air duration, writing duration ratio undefined");
        return Derived::Undefined;
    }
    Derived::Scalar(on_surface / in_air)
}

/// Duration of the selection, or `None` if it has no points.
fn selection_duration<T: Float>(
    sample: &Sample<T>,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Option<T> {
    select(sample, in_air)
        .endpoints()
        .map(|(first, last)| (last.timestamp - first.timestamp) * config.time_scale())
}

fn duration_of<T: Float>(sample: &Sample<T>, stroke: &Stroke, config: &FeatureConfig<T>) -> T {
    let points = stroke.points(sample);
    let first = points[0].timestamp;
    let last = points[points.len() - 1].timestamp;
    (last - first) * config.time_scale()
}
