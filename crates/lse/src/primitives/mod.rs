//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the in-place sort that the rest of
//! the crate builds on. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sorting utilities.
pub mod sorting;

/// Shared error types.
pub mod errors;
