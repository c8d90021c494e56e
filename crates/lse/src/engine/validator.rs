//! Argument validation for log-sum-exp and sorting operations.
//!
//! ## Purpose
//!
//! This module checks the arguments of public operations before the
//! kernels index into caller storage.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Cheap**: Only lengths and indices are checked; values are never scanned.
//!
//! ## Invariants
//!
//! * A sequence accepted by `validate_sequence` has a last element.
//! * A range accepted by `validate_range` is either inverted or lies inside the slice.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reject NaN or infinite values; `-inf` is a valid
//!   log-space zero and the kernels define results for the others.
//! * This module does not check sortedness.

// Internal dependencies
use crate::primitives::errors::LseError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sequence and range arguments.
///
/// All methods return `Result<(), LseError>`.
pub struct Validator;

impl Validator {
    /// Validate a sequence passed to a log-sum-exp operation.
    pub fn validate_sequence<T>(values: &[T]) -> Result<(), LseError> {
        if values.is_empty() {
            return Err(LseError::EmptyInput);
        }
        Ok(())
    }

    /// Validate an inclusive sort range `[left, right]` over a slice of length `len`.
    ///
    /// Inverted ranges (`left > right`) are accepted as empty.
    pub fn validate_range(left: usize, right: usize, len: usize) -> Result<(), LseError> {
        if left <= right && right >= len {
            return Err(LseError::RangeOutOfBounds { left, right, len });
        }
        Ok(())
    }
}
