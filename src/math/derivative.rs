//! Discrete time derivatives.
//!
//! ## Purpose
//!
//! This module provides the forward finite difference used to chain
//! velocity, acceleration and jerk.
//!
//! ## Design notes
//!
//! * **Forward difference**: `d[i] = (v[i + 1] - v[i]) / (t[i + 1] - t[i])`,
//!   so `n` values produce `n - 1` derivatives.
//! * **Chaining**: The returned timestamps are `t[1..]`, aligned with the
//!   end of each differenced interval, ready for the next derivative.
//!
//! ## Invariants
//!
//! * A zero time step yields `None` for that slot.
//! * An undefined input slot makes every derivative slot that reads it undefined.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Forward difference of `values` with respect to `times`.
///
/// Returns the derivative and the timestamps it is aligned with. Both are
/// empty when fewer than two values are given.
pub fn forward_difference<T: Float>(values: &[Option<T>], times: &[T]) -> (Vec<Option<T>>, Vec<T>) {
    debug_assert_eq!(values.len(), times.len(), "Values and times must have same length");
    if values.len() < 2 {
        return (Vec::new(), Vec::new());
    }

    let derivative = values
        .windows(2)
        .zip(times.windows(2))
        .map(|(v, t)| {
            let dt = t[1] - t[0];
            match (v[0], v[1]) {
                (Some(a), Some(b)) if dt != T::zero() => Some((b - a) / dt),
                _ => None,
            }
        })
        .collect();

    (derivative, times[1..].to_vec())
}
