//! High-level API for log-sum-exp.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Each one validates its
//! arguments, then delegates to the kernels in the math and primitives layers.
//!
//! ## Design notes
//!
//! * **Checked**: Empty sequences and out-of-range indices become [`LseError`]s
//!   instead of out-of-bounds accesses.
//! * **In place**: [`logsumexp`] sorts the caller's slice as a side effect.
//!   Copy the slice first if the original order matters.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Sequence form**: [`logsumexp`] sorts, then shifts by the maximum.
//! * **Pair form**: [`logsumexp_pair`] handles the two-term case without sorting,
//!   which suits tree-shaped reductions.
//! * **Pre-sorted form**: [`logsumexp_sorted`] skips the sort when the caller
//!   already holds sorted data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::logsumexp as kernel;
use crate::primitives::sorting;

// Publicly re-exported types
pub use crate::primitives::errors::LseError;
pub use crate::primitives::sorting::INSERTION_SORT_MAX_SPAN;

// ============================================================================
// Log-Sum-Exp
// ============================================================================

/// Compute `ln(sum(exp(x_i)))` over `values`, sorting them in place.
///
/// Returns `-inf` if every element is `-inf`. A NaN element yields NaN unless
/// all other elements are `-inf`: NaN compares false both ways, so the sort
/// may leave a `-inf` in the maximum slot and the result is then `-inf`.
/// The outcome in that case depends on input order.
///
/// # Errors
///
/// Returns [`LseError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use lse::prelude::*;
///
/// let mut values = vec![1000.0_f64, 1000.0];
/// let result = logsumexp(&mut values)?;
/// assert!((result - (1000.0 + 2.0_f64.ln())).abs() < 1e-12);
/// # Result::<(), LseError>::Ok(())
/// ```
pub fn logsumexp<T: Float>(values: &mut [T]) -> Result<T, LseError> {
    if let Err(err) = Validator::validate_sequence(values) {
        log::debug!("logsumexp rejected: {err}");
        return Err(err);
    }
    log::trace!("logsumexp over {} values", values.len());

    Ok(kernel::logsumexp(values))
}

/// Compute log-sum-exp over a slice already sorted in non-decreasing order.
///
/// Nothing is mutated. Sortedness is the caller's responsibility and is only
/// checked in debug builds.
///
/// # Errors
///
/// Returns [`LseError::EmptyInput`] if `values` is empty.
pub fn logsumexp_sorted<T: Float>(values: &[T]) -> Result<T, LseError> {
    if let Err(err) = Validator::validate_sequence(values) {
        log::debug!("logsumexp_sorted rejected: {err}");
        return Err(err);
    }
    debug_assert!(
        sorting::is_non_decreasing(values),
        "logsumexp_sorted requires non-decreasing input"
    );

    Ok(kernel::logsumexp_sorted(values))
}

/// Compute `ln(exp(a) + exp(b))` without sorting.
///
/// # Examples
///
/// ```
/// use lse::prelude::*;
///
/// assert_eq!(logsumexp_pair(f64::NEG_INFINITY, 5.0), 5.0);
/// assert_eq!(logsumexp_pair(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn logsumexp_pair<T: Float>(a: T, b: T) -> T {
    kernel::logsumexp_pair(a, b)
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort `values` in non-decreasing order, in place.
#[inline]
pub fn sort<T: Float>(values: &mut [T]) {
    sorting::sort(values);
}

/// Sort the inclusive index range `[left, right]` of `values`, in place.
///
/// An inverted range (`left > right`) is a no-op.
///
/// # Errors
///
/// Returns [`LseError::RangeOutOfBounds`] if `left <= right` and
/// `right >= values.len()`.
pub fn sort_range<T: Float>(values: &mut [T], left: usize, right: usize) -> Result<(), LseError> {
    if let Err(err) = Validator::validate_range(left, right, values.len()) {
        log::debug!("sort_range rejected: {err}");
        return Err(err);
    }

    sorting::sort_range(values, left, right);
    Ok(())
}
