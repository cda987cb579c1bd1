//! Pen-state selection and stroke segmentation.
//!
//! ## Purpose
//!
//! This module splits a sample into its on-surface and in-air subsequences
//! and partitions a subsequence into strokes.
//!
//! ## Design notes
//!
//! * **Index-based**: A `Selection` stores original point indices, so the
//!   partition can be reassembled and stroke boundaries detected without
//!   copying points.
//! * **Adjacency rule**: Two selected points belong to the same stroke iff
//!   their original indices are consecutive. Because a selection holds a
//!   single pen state, every pen lift or touch-down produces an index gap.
//!
//! ## Key concepts
//!
//! * **Selection**: All points of one pen state, in recording order.
//! * **Stroke**: Maximal contiguous run of points sharing a pen state.
//!
//! ## Invariants
//!
//! * On-surface and in-air selections are disjoint and together cover the sample.
//! * An empty selection has no strokes; a single point forms one degenerate stroke.
//! * Segmentation is deterministic and linear in sample length.
//!
//! ## Non-goals
//!
//! * This module does not split strokes on timing gaps or velocity minima.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::ops::RangeInclusive;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::partition::PenState;
use crate::primitives::sample::{Point, Sample};

// ============================================================================
// Stroke
// ============================================================================

/// Contiguous run of sample points sharing a pen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Index of the first point in the sample.
    pub start: usize,

    /// Index of the last point in the sample (inclusive).
    pub end: usize,

    /// Pen state shared by every point of the stroke.
    pub pen_state: PenState,
}

impl Stroke {
    /// Number of points in the stroke (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Strokes are never empty; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Original sample indices covered by the stroke.
    #[inline]
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Points of the stroke, borrowed from the sample it was derived from.
    #[inline]
    pub fn points<'a, T>(&self, sample: &'a Sample<T>) -> &'a [Point<T>]
    where
        T: Float,
    {
        &sample.points()[self.indices()]
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Points of a sample that share one pen state, in recording order.
#[derive(Debug, Clone)]
pub struct Selection<'a, T> {
    sample: &'a Sample<T>,
    pen_state: PenState,
    indices: Vec<usize>,
}

impl<'a, T: Float> Selection<'a, T> {
    /// Pen state of the selected points.
    #[inline]
    pub fn pen_state(&self) -> PenState {
        self.pen_state
    }

    /// Original indices of the selected points.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of selected points.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no point has the selected pen state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the selected points.
    pub fn points(&self) -> impl Iterator<Item = &'a Point<T>> + '_ {
        let points = self.sample.points();
        self.indices.iter().map(move |&i| &points[i])
    }

    /// Collect one field of every selected point.
    pub fn column<F>(&self, field: F) -> Vec<T>
    where
        F: Fn(&Point<T>) -> T,
    {
        self.points().map(field).collect()
    }

    /// First and last selected points, if any.
    pub fn endpoints(&self) -> Option<(&'a Point<T>, &'a Point<T>)> {
        let points = self.sample.points();
        let first = *self.indices.first()?;
        let last = *self.indices.last()?;
        Some((&points[first], &points[last]))
    }

    /// Partition the selection into strokes.
    ///
    /// A new stroke starts wherever consecutive selected indices are not
    /// adjacent in the original sample.
    pub fn strokes(&self) -> Vec<Stroke> {
        let mut strokes = Vec::new();
        let mut iter = self.indices.iter().copied();

        let Some(first) = iter.next() else {
            return strokes;
        };

        let mut current = Stroke {
            start: first,
            end: first,
            pen_state: self.pen_state,
        };

        for i in iter {
            if i == current.end + 1 {
                current.end = i;
            } else {
                strokes.push(current);
                current = Stroke {
                    start: i,
                    end: i,
                    pen_state: self.pen_state,
                };
            }
        }
        strokes.push(current);

        strokes
    }
}

// ============================================================================
// Segmentation Functions
// ============================================================================

/// Select the in-air (`in_air = true`) or on-surface points of a sample.
pub fn select<T: Float>(sample: &Sample<T>, in_air: bool) -> Selection<'_, T> {
    let pen_state = PenState::from_in_air(in_air);
    let indices = sample
        .iter()
        .enumerate()
        .filter(|(_, p)| p.pen_state == pen_state)
        .map(|(i, _)| i)
        .collect();

    Selection {
        sample,
        pen_state,
        indices,
    }
}

/// Partition a whole sample into strokes of either pen state, in temporal order.
pub fn strokes<T: Float>(sample: &Sample<T>) -> Vec<Stroke> {
    let mut strokes: Vec<Stroke> = Vec::new();

    for (i, point) in sample.iter().enumerate() {
        match strokes.last_mut() {
            Some(stroke) if stroke.pen_state == point.pen_state => stroke.end = i,
            _ => strokes.push(Stroke {
                start: i,
                end: i,
                pen_state: point.pen_state,
            }),
        }
    }

    strokes
}
