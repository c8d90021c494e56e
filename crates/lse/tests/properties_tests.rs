//! Property-based tests for sorting and log-sum-exp.
//!
//! These tests check mathematical invariants over generated inputs:
//! - The sort yields a non-decreasing permutation of its input
//! - Sorting is idempotent and ranged sorts stay inside their range
//! - Log-sum-exp is exact for one element and bounded by `[max, max + ln n]`
//! - Log-sum-exp commutes with shifts: `lse(x + c) = lse(x) + c`
//! - The pair and sequence forms agree
//!
//! ## Test Organization
//!
//! 1. **Sorting** - Ordering, permutation, idempotence and range locality
//! 2. **Log-Sum-Exp** - Identity, bounds, shift equivariance, pre-sorted form
//! 3. **Pair Form** - Agreement with the sequence form and finiteness

use proptest::prelude::*;

use lse::{logsumexp, logsumexp_pair, logsumexp_sorted, sort, sort_range};

/// Strategy for finite f64 vectors spanning both sort paths.
fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1e3_f64..1e3, min_len..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    // --- Sort output is ordered and a permutation of the input ---
    #[test]
    fn sort_orders_and_permutes(data in finite_vec(0, 300)) {
        let mut sorted = data.clone();
        sort(&mut sorted);

        let mut expected = data.clone();
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(sorted, expected);
    }

    // --- Sorting twice changes nothing ---
    #[test]
    fn sort_is_idempotent(data in finite_vec(0, 300)) {
        let mut once = data.clone();
        sort(&mut once);
        let mut twice = once.clone();
        sort(&mut twice);
        prop_assert_eq!(once, twice);
    }

    // --- Ranged sort only touches [left, right] ---
    #[test]
    fn sort_range_is_local(
        data in finite_vec(1, 200),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (left, right) = {
            let (i, j) = (a.index(data.len()), b.index(data.len()));
            (i.min(j), i.max(j))
        };
        let mut values = data.clone();
        sort_range(&mut values, left, right).unwrap();

        prop_assert_eq!(&values[..left], &data[..left]);
        prop_assert_eq!(&values[right + 1..], &data[right + 1..]);

        let mut expected = data[left..=right].to_vec();
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(&values[left..=right], expected.as_slice());
    }

    // --- Single element is returned exactly ---
    #[test]
    fn logsumexp_single_is_identity(x in -1e300_f64..1e300) {
        let mut values = [x];
        prop_assert_eq!(logsumexp(&mut values).unwrap(), x);
    }

    // --- max <= lse <= max + ln(n) ---
    #[test]
    fn logsumexp_bounded_by_max(data in finite_vec(1, 300)) {
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let n = data.len() as f64;

        let mut values = data.clone();
        let result = logsumexp(&mut values).unwrap();

        let tol = 1e-12 * max.abs().max(1.0);
        prop_assert!(result >= max - tol, "lse={} below max={}", result, max);
        prop_assert!(result <= max + n.ln() + tol, "lse={} above max + ln n", result);
    }

    // --- lse(x + c) = lse(x) + c ---
    #[test]
    fn logsumexp_shift_equivariant(data in finite_vec(1, 100), c in -1e3_f64..1e3) {
        let mut values = data.clone();
        let base = logsumexp(&mut values).unwrap();

        let mut shifted: Vec<f64> = data.iter().map(|&x| x + c).collect();
        let result = logsumexp(&mut shifted).unwrap();

        prop_assert!(
            (result - (base + c)).abs() < 1e-9,
            "lse(x + c)={} != lse(x) + c={}",
            result, base + c
        );
    }

    // --- Sorting form and pre-sorted form agree exactly ---
    #[test]
    fn logsumexp_sorted_agrees(data in finite_vec(1, 200)) {
        let mut values = data.clone();
        let result = logsumexp(&mut values).unwrap();
        prop_assert_eq!(logsumexp_sorted(&values).unwrap(), result);
    }

    // --- Pair form agrees with the sequence form ---
    #[test]
    fn pair_agrees_with_sequence(a in -1e3_f64..1e3, b in -1e3_f64..1e3) {
        let mut values = [a, b];
        let expected = logsumexp(&mut values).unwrap();
        let result = logsumexp_pair(a, b);

        prop_assert!(
            (result - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "pair={} sequence={}",
            result, expected
        );
    }

    // --- Pair form never overflows for finite input ---
    #[test]
    fn pair_is_finite(a in -1e300_f64..1e300, b in -1e300_f64..1e300) {
        prop_assert!(logsumexp_pair(a, b).is_finite());
    }
}
