//! Planar distance and extent computations.
//!
//! ## Purpose
//!
//! This module provides the geometric building blocks for kinematic and
//! spatial features: Euclidean displacement between consecutive points,
//! cumulative path length and one-dimensional extent.
//!
//! ## Invariants
//!
//! * Distances, path lengths and extents are non-negative for finite input.
//! * Path length of fewer than two points is zero.
//!
//! ## Non-goals
//!
//! * This module does not apply unit scaling (handled by the derivations).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Euclidean distance of a planar displacement: √(dx² + dy²).
#[inline]
pub fn euclidean<T: Float>(dx: T, dy: T) -> T {
    dx.hypot(dy)
}

/// Distances between consecutive points of a polyline.
///
/// Returns `n - 1` values for `n` points, or nothing for fewer than two.
pub fn displacements<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    debug_assert_eq!(x.len(), y.len(), "Coordinates must have same length");
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| euclidean(xs[1] - xs[0], ys[1] - ys[0]))
        .collect()
}

/// Cumulative Euclidean length of a polyline.
pub fn path_length<T: Float>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len(), "Coordinates must have same length");
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| euclidean(xs[1] - xs[0], ys[1] - ys[0]))
        .fold(T::zero(), |acc, d| acc + d)
}

/// Range `max - min` of the values; zero when empty.
pub fn extent<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let (min, max) = values
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    max - min
}
