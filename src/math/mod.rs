//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the derivations
//! and the statistics reducer:
//! - Forward finite differences
//! - Planar distances, path length and extent
//! - Order statistics (median, percentiles)
//!
//! These are reusable mathematical building blocks with no feature-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Discrete time derivatives.
pub mod derivative;

/// Planar distances and extents.
pub mod distance;

/// Median and percentile computation.
pub mod order;
