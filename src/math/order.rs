//! Order statistics: median and percentiles.
//!
//! ## Purpose
//!
//! This module provides selection-based median and percentile computation
//! for the statistics reducer.
//!
//! ## Design notes
//!
//! * **Algorithm**: Uses Quickselect for O(n) order statistics.
//! * **In-place**: Functions reorder the provided buffer instead of allocating.
//! * **Interpolation**: Percentiles interpolate linearly between the two
//!   closest ranks, `rank = p / 100 * (n - 1)`.
//!
//! ## Invariants
//!
//! * `percentile_inplace(v, 50)` equals `median_inplace(v)`.
//! * `percentile_inplace(v, 0)` is the minimum, `percentile_inplace(v, 100)` the maximum.
//! * A NaN anywhere in the buffer makes every order statistic NaN.
//!
//! ## Non-goals
//!
//! * This module does not filter undefined values (handled by the reducer).

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Median
// ============================================================================

/// Compute the median in-place using Quickselect.
///
/// Returns `None` for an empty buffer. The buffer is reordered.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> Option<T> {
    let n = vals.len();
    if n == 0 {
        return None;
    }
    if vals.iter().any(|v| v.is_nan()) {
        return Some(T::nan());
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Even length: average with the largest value of the lower half
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        Some((lower + upper) / (T::one() + T::one()))
    } else {
        Some(upper)
    }
}

// ============================================================================
// Percentile
// ============================================================================

/// Compute the `p`-th percentile (`0 <= p <= 100`) in-place.
///
/// Returns `None` for an empty buffer. The buffer is reordered.
pub fn percentile_inplace<T: Float>(vals: &mut [T], p: T) -> Option<T> {
    let n = vals.len();
    if n == 0 {
        return None;
    }
    if vals.iter().any(|v| v.is_nan()) {
        return Some(T::nan());
    }

    let hundred = T::from(100.0)?;
    let last = T::from(n - 1)?;
    let rank = (p.max(T::zero()).min(hundred) / hundred) * last;

    let lo = rank.floor().to_usize()?.min(n - 1);
    let frac = rank - rank.floor();

    vals.select_nth_unstable_by(lo, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let lower = vals[lo];

    if frac == T::zero() || lo + 1 >= n {
        return Some(lower);
    }

    // The next order statistic is the smallest value above the pivot
    let upper = vals[lo + 1..].iter().copied().fold(T::infinity(), T::min);
    Some(lower + (upper - lower) * frac)
}
