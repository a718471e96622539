//! Property-based tests for the number-theory helpers.

use advent_toolkit::math::{
    gcd, intervals_overlap, is_prime, lcm, merge_intervals, prime_factors,
};
use proptest::prelude::*;

/// Naive primality check, used as the reference.
fn divisor_count_says_prime(n: i64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

fn intervals() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec(
        (0i64..40, 0i64..10).prop_map(|(start, len)| (start, start + len)),
        0..8,
    )
}

fn covered(intervals: &[(i64, i64)], x: i64) -> bool {
    intervals.iter().any(|&(start, end)| start <= x && x <= end)
}

proptest! {
    #[test]
    fn gcd_divides_both_operands(a in 1i64..10_000, b in 1i64..10_000) {
        let g = gcd(a, b);
        prop_assert!(g > 0);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
    }

    #[test]
    fn gcd_is_symmetric(a in 0i64..10_000, b in 0i64..10_000) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }

    #[test]
    fn lcm_is_a_common_multiple(a in 1i64..1_000, b in 1i64..1_000) {
        let m = lcm(a, b);
        prop_assert_eq!(m % a, 0);
        prop_assert_eq!(m % b, 0);
        // Minimality: lcm * gcd == |a * b|.
        prop_assert_eq!(m * gcd(a, b), a * b);
    }

    #[test]
    fn primality_matches_the_naive_reference(n in -10i64..500) {
        prop_assert_eq!(is_prime(n), divisor_count_says_prime(n));
    }

    #[test]
    fn factors_multiply_back_to_the_input(n in 1i64..10_000) {
        let factors = prime_factors(n).unwrap();
        let product: i64 = factors
            .iter()
            .map(|(&prime, &exponent)| prime.pow(exponent))
            .product();
        prop_assert_eq!(product, n);
        for &prime in factors.keys() {
            prop_assert!(is_prime(prime));
        }
    }

    #[test]
    fn overlap_agrees_with_pointwise_coverage(
        a in (0i64..30, 0i64..6).prop_map(|(s, l)| (s, s + l)),
        b in (0i64..30, 0i64..6).prop_map(|(s, l)| (s, s + l)),
    ) {
        let shares_a_point = (a.0..=a.1).any(|x| x >= b.0 && x <= b.1);
        prop_assert_eq!(intervals_overlap(a, b), shares_a_point);
    }

    #[test]
    fn merged_intervals_are_sorted_and_separated(input in intervals()) {
        let merged = merge_intervals(input.clone());
        for pair in merged.windows(2) {
            // Start-ordered, and a real gap (two or more integers apart):
            // anything closer would have been folded by the adjacency rule.
            prop_assert!(pair[0].1 + 1 < pair[1].0);
        }
        for &(start, end) in &merged {
            prop_assert!(start <= end);
        }
    }

    #[test]
    fn merging_preserves_covered_integers(input in intervals()) {
        // Intervals only fold when they overlap or touch (gap of zero
        // integers), so the covered set is exactly preserved.
        let merged = merge_intervals(input.clone());
        for x in -1..56 {
            prop_assert_eq!(covered(&merged, x), covered(&input, x));
        }
    }
}
