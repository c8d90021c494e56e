//! In-place hybrid sort used to prepare sequences for log-sum-exp.
//!
//! ## Purpose
//!
//! This module sorts a slice of floats into non-decreasing order without
//! allocating. The log-sum-exp kernel uses it to move the maximum to the
//! last position and to accumulate the remaining terms smallest-first.
//!
//! ## Design notes
//!
//! * **Hybrid**: Ranges spanning more than [`INSERTION_SORT_MAX_SPAN`]
//!   positions are partitioned quicksort-style around their last element;
//!   shorter ranges use insertion sort.
//! * **In place**: No heap allocation. The caller's order is destroyed.
//! * **Bounded stack**: Only the smaller partition is handled recursively;
//!   the larger one is processed by the loop, so depth is O(log n).
//!
//! ## Key concepts
//!
//! ### Partition scheme
//! 1. The last element of the range is the pivot.
//! 2. A left cursor advances while elements are strictly less than the pivot.
//! 3. A right cursor retreats while elements are strictly greater than the
//!    pivot, never passing the left cursor.
//! 4. Out-of-place pairs are swapped until the cursors meet, then the pivot
//!    is swapped into the left cursor's slot, which is its final position.
//!
//! ## Invariants
//!
//! * After sorting, the range is non-decreasing for comparable values.
//! * The output is a permutation of the input.
//! * Elements outside the requested range are never read or written.
//!
//! ## Non-goals
//!
//! * Stability: equal keys may be reordered (deterministically).
//! * A total order for NaN: NaNs end up at unspecified positions.
//! * Worst-case O(n log n) time; adversarial inputs are O(n^2).

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Largest `right - left` span sorted by insertion sort instead of quicksort.
pub const INSERTION_SORT_MAX_SPAN: usize = 25;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort the whole slice in non-decreasing order.
#[inline]
pub fn sort<T: Float>(values: &mut [T]) {
    hybrid_sort(values);
}

/// Sort the inclusive index range `[left, right]` of `values` in place.
///
/// An inverted range (`left > right`) is a no-op.
///
/// # Panics
///
/// Panics if `left <= right` and `right >= values.len()`. Use
/// [`crate::sort_range`] for a checked variant.
#[inline]
pub fn sort_range<T: Float>(values: &mut [T], left: usize, right: usize) {
    if left > right {
        return;
    }
    hybrid_sort(&mut values[left..=right]);
}

/// Check that no element is strictly less than its predecessor.
///
/// NaNs compare false both ways, so they never break the order.
pub fn is_non_decreasing<T: Float>(values: &[T]) -> bool {
    values
        .windows(2)
        .all(|w| w[1].partial_cmp(&w[0]) != Some(Ordering::Less))
}

// ============================================================================
// Internal Routines
// ============================================================================

/// Quicksort with an insertion-sort cutoff over the whole of `values`.
fn hybrid_sort<T: Float>(mut values: &mut [T]) {
    loop {
        if values.len() <= INSERTION_SORT_MAX_SPAN + 1 {
            insertion_sort(values);
            return;
        }

        let split = partition(values);
        let (lower, upper) = core::mem::take(&mut values).split_at_mut(split);
        // upper[0] is the pivot, already in its final position
        let upper = &mut upper[1..];

        if lower.len() <= upper.len() {
            hybrid_sort(lower);
            values = upper;
        } else {
            hybrid_sort(upper);
            values = lower;
        }
    }
}

/// Partition around the last element and return the pivot's final index.
///
/// Requires `values.len() >= 2`.
fn partition<T: Float>(values: &mut [T]) -> usize {
    let last = values.len() - 1;
    let pivot = values[last];

    let mut l = 0;
    let mut r = last;
    loop {
        // The pivot itself stops this scan at `last` at the latest.
        while values[l] < pivot {
            l += 1;
        }

        r -= 1;
        while r > l && values[r] > pivot {
            r -= 1;
        }

        if l >= r {
            break;
        }
        values.swap(l, r);
        l += 1;
    }

    values.swap(l, last);
    l
}

/// Straight insertion sort; shifts each element left past strictly greater ones.
fn insertion_sort<T: Float>(values: &mut [T]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && key < values[j - 1] {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}
