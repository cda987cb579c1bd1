//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer reduces raw feature arrays into summary statistics
//! (mean, median, std, percentiles, ...).
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Statistics reducer.
pub mod statistics;
