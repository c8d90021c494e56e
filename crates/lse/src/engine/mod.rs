//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer checks caller-supplied arguments before they reach the
//! kernels, turning would-be out-of-bounds accesses into [`LseError`]s.
//!
//! [`LseError`]: crate::LseError
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Argument validation.
pub mod validator;
