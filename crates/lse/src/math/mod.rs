//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the log-sum-exp kernels. They assume validated
//! arguments and never fail; argument checks live in the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stable log-sum-exp over sequences and pairs.
pub mod logsumexp;
