//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! - The error type shared by the whole crate
//! - Pen-state, axis and angle-unit enumerations
//! - The unit configuration of a feature-extraction session
//! - The `Point` and `Sample` trajectory types
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Session configuration.
pub mod config;

/// Error type.
pub mod errors;

/// Pen-state, axis and angle-unit enumerations.
pub mod partition;

/// Trajectory points and samples.
pub mod sample;
