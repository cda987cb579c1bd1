//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates feature computation:
//! - Validation of samples, configuration and requests
//! - The closed registry of computable features
//! - The compute dispatcher and its result type
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Compute dispatcher.
pub mod executor;

/// Feature results.
pub mod output;

/// Feature registry.
pub mod registry;

/// Input validation.
pub mod validator;
