//! Error types for log-sum-exp operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that public operations can
//! report. The numeric kernels themselves have no failure paths; errors only
//! arise from arguments that would otherwise index outside the caller's
//! storage.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending bounds and the slice length.
//! * **No-std**: The type is `Copy` and needs no allocation.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Empty input**: log-sum-exp over zero elements is rejected rather than
//!    reading past the start of the slice.
//! 2. **Range bounds**: sort ranges are inclusive and must lie inside the slice.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * NaN or infinite inputs are not errors; they follow IEEE-754 semantics.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for log-sum-exp and sorting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LseError {
    /// Input sequence is empty; log-sum-exp requires at least 1 element.
    EmptyInput,

    /// Inclusive sort range `[left, right]` extends past the end of the slice.
    RangeOutOfBounds {
        /// First index of the range.
        left: usize,
        /// Last index of the range (inclusive).
        right: usize,
        /// Length of the slice being sorted.
        len: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty (need at least 1 element)"),
            Self::RangeOutOfBounds { left, right, len } => {
                write!(
                    f,
                    "Range out of bounds: [{left}, {right}] does not fit a slice of length {len}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LseError {}
