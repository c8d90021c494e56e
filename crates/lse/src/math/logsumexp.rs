//! Numerically stable log-sum-exp.
//!
//! ## Purpose
//!
//! This module computes `ln(sum(exp(x_i)))` over a sequence, and
//! `ln(exp(a) + exp(b))` over a pair, without overflowing for large inputs
//! or losing everything to underflow for very negative ones.
//!
//! ## Design notes
//!
//! * **Shifted exponentials**: The maximum `m` is subtracted before
//!   exponentiating, so every term lies in `[0, 1]`.
//! * **Sorted accumulation**: The sequence form sorts first. The maximum lands
//!   in the last slot and the other terms are summed smallest-first.
//! * **Implicit unit term**: The maximum contributes `exp(m - m) = 1`, added
//!   as `+ 1` instead of being summed, so a single element returns itself
//!   exactly.
//!
//! ## Key concepts
//!
//! ```text
//! lse(x) = m + ln(1 + sum_{i != argmax} exp(x_i - m)),    m = max(x)
//! ```
//!
//! ## Invariants
//!
//! * If every term is `-inf`, the result is exactly `-inf` (never NaN).
//! * `max(x) <= lse(x) <= max(x) + ln(n)` for finite inputs.
//! * A NaN input yields NaN, unless every other element is `-inf` and the
//!   sort leaves a `-inf` in the last slot. The result is then `-inf`.
//!
//! ## Non-goals
//!
//! * This module does not validate input lengths (see the engine layer).
//! * This module does not preserve the caller's element order.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::sort;

// ============================================================================
// Sequence Form
// ============================================================================

/// Sort `values` ascending in place and return their log-sum-exp.
///
/// An empty slice returns `-inf`, the identity of log-sum-exp; the public
/// API rejects empty input before it gets here.
#[inline]
pub fn logsumexp<T: Float>(values: &mut [T]) -> T {
    sort(values);
    logsumexp_sorted(values)
}

/// Log-sum-exp of a slice that is already sorted in non-decreasing order.
///
/// The last element is taken as the maximum, so unsorted input gives an
/// incorrect result and may overflow. A `-inf` in that slot returns `-inf`
/// without reading the rest, so NaNs ahead of it are not propagated.
pub fn logsumexp_sorted<T: Float>(values: &[T]) -> T {
    let Some((&max, rest)) = values.split_last() else {
        return T::neg_infinity();
    };

    if max == T::neg_infinity() {
        log::trace!("logsumexp: all {} terms are -inf", values.len());
        return T::neg_infinity();
    }

    let sum = rest
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - max).exp());

    max + (sum + T::one()).ln()
}

// ============================================================================
// Pair Form
// ============================================================================

/// Log-sum-exp of two values, `ln(exp(a) + exp(b))`, without sorting.
///
/// The larger argument anchors the shift. On ties the `a` branch is taken.
#[inline]
pub fn logsumexp_pair<T: Float>(a: T, b: T) -> T {
    let neg_inf = T::neg_infinity();
    if a == neg_inf && b == neg_inf {
        log::trace!("logsumexp_pair: both terms are -inf");
        return neg_inf;
    }

    if b > a {
        b + (T::one() + (a - b).exp()).ln()
    } else {
        a + (T::one() + (b - a).exp()).ln()
    }
}
