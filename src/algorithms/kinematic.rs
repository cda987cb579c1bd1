//! Kinematic features: velocity, acceleration and jerk.
//!
//! ## Purpose
//!
//! This module differentiates pen position with respect to time over the
//! on-surface or in-air subsequence of a sample.
//!
//! ## Design notes
//!
//! * **Projection**: `Axis::X` / `Axis::Y` differentiate one coordinate
//!   (signed); `Axis::Xy` divides the Euclidean displacement between
//!   consecutive points by the time step (non-negative speed).
//! * **Chaining**: Acceleration differentiates velocity, jerk differentiates
//!   acceleration, each against the timestamps aligned by the previous step.
//! * **Units**: Positions are multiplied by `distance_scale`, timestamps by
//!   `time_scale` before differencing.
//!
//! ## Invariants
//!
//! * A selection of `n` points yields `n - order` values.
//! * Fewer than `order + 1` points yields `Derived::Undefined`.
//! * Zero time steps yield `None` slots instead of infinities.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::algorithms::Derived;
use crate::algorithms::segmentation::select;
use crate::math::derivative::forward_difference;
use crate::math::distance::displacements;
use crate::primitives::config::FeatureConfig;
use crate::primitives::partition::Axis;
use crate::primitives::sample::Sample;

/// Order of the time derivative of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeOrder {
    /// First derivative.
    Velocity = 1,

    /// Second derivative.
    Acceleration = 2,

    /// Third derivative.
    Jerk = 3,
}

impl DerivativeOrder {
    /// Minimum number of selected points needed for one value.
    #[inline]
    pub fn min_points(self) -> usize {
        self as usize + 1
    }
}

/// Velocity along `axis` of the selected subsequence.
pub fn velocity<T: Float>(
    sample: &Sample<T>,
    axis: Axis,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    differentiate(sample, axis, in_air, config, DerivativeOrder::Velocity)
}

/// Acceleration along `axis` of the selected subsequence.
pub fn acceleration<T: Float>(
    sample: &Sample<T>,
    axis: Axis,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    differentiate(sample, axis, in_air, config, DerivativeOrder::Acceleration)
}

/// Jerk along `axis` of the selected subsequence.
pub fn jerk<T: Float>(
    sample: &Sample<T>,
    axis: Axis,
    in_air: bool,
    config: &FeatureConfig<T>,
) -> Derived<T> {
    differentiate(sample, axis, in_air, config, DerivativeOrder::Jerk)
}

/// Differentiate position `order` times with respect to time.
pub fn differentiate<T: Float>(
    sample: &Sample<T>,
    axis: Axis,
    in_air: bool,
    config: &FeatureConfig<T>,
    order: DerivativeOrder,
) -> Derived<T> {
    let selection = select(sample, in_air);
    if selection.len() < order.min_points() {
        trace!(
            points = selection.len(),
            required = order.min_points(),
            in_air,
            "too few points to differentiate"
        );
        return Derived::Undefined;
    }

    let ds = config.distance_scale();
    let ts = config.time_scale();
    let times = selection.column(|p| p.timestamp * ts);

    // Step 1: Velocity along the requested projection
    let (mut values, mut aligned) = match axis {
        Axis::X => {
            let x: Vec<Option<T>> = selection.points().map(|p| Some(p.x * ds)).collect();
            forward_difference(&x, &times)
        }
        Axis::Y => {
            let y: Vec<Option<T>> = selection.points().map(|p| Some(p.y * ds)).collect();
            forward_difference(&y, &times)
        }
        Axis::Xy => {
            let x = selection.column(|p| p.x * ds);
            let y = selection.column(|p| p.y * ds);
            let speed = displacements(&x, &y)
                .into_iter()
                .zip(times.windows(2))
                .map(|(d, t)| {
                    let dt = t[1] - t[0];
                    (dt != T::zero()).then(|| d / dt)
                })
                .collect();
            (speed, times[1..].to_vec())
        }
    };

    // Step 2: Higher derivatives
    for _ in 1..order as usize {
        let (next, next_times) = forward_difference(&values, &aligned);
        values = next;
        aligned = next_times;
    }

    Derived::Array(values)
}
