//! Integer utilities: gcd/lcm, primality, factorization, Manhattan
//! distance and inclusive-interval bookkeeping.

use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

/// Precondition violations in the number-theory helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// `lcm_all` was handed an empty sequence
    #[error("lcm of an empty sequence is undefined")]
    EmptySequence,
    /// `prime_factors` was handed a value below 1
    #[error("prime factorization requires a value >= 1, got {0}")]
    NonPositive(i64),
}

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// `gcd(a, 0) == a`. Rust's `%` truncates toward zero, so a negative
/// operand can surface as a negative result; [`lcm`] is the only caller
/// that needs a magnitude and normalizes with `abs` itself.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of two values.
///
/// Undefined when both operands are zero (the division panics); callers
/// must not pass that pair.
pub fn lcm(a: i64, b: i64) -> i64 {
    (a * b).abs() / gcd(a, b)
}

/// Left fold of [`lcm`] over a sequence.
pub fn lcm_all<I>(values: I) -> Result<i64, MathError>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().reduce(lcm).ok_or(MathError::EmptySequence)
}

/// Primality by odd trial division up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut candidate = 3;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}

/// Prime factorization as a prime-to-exponent map.
///
/// Divides out the smallest candidate (2, then the odd numbers) until the
/// remainder is 1, so every recorded divisor is prime. `prime_factors(1)`
/// is an empty map.
pub fn prime_factors(n: i64) -> Result<HashMap<i64, u32>, MathError> {
    if n < 1 {
        return Err(MathError::NonPositive(n));
    }
    let mut remaining = n;
    let mut factors = HashMap::new();
    let mut divisor = 2;
    while remaining > 1 {
        if remaining % divisor == 0 {
            *factors.entry(divisor).or_insert(0) += 1;
            remaining /= divisor;
        } else {
            divisor = if divisor == 2 { 3 } else { divisor + 2 };
        }
    }
    Ok(factors)
}

/// Sum of absolute coordinate differences between two points.
pub fn manhattan_distance(a: (i64, i64), b: (i64, i64)) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Whether two inclusive intervals share at least one integer.
pub fn intervals_overlap(a: (i64, i64), b: (i64, i64)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Merge inclusive intervals into a minimal, start-ordered set.
///
/// Intervals are folded together when they overlap or sit exactly one
/// apart, so `(7, 8)` and `(9, 10)` become `(7, 10)`. The adjacency rule
/// is intentional: the output describes covered integers, and a gap of
/// zero integers is no gap.
pub fn merge_intervals<I>(intervals: I) -> Vec<(i64, i64)>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let mut merged: Vec<(i64, i64)> = Vec::new();
    for (start, end) in intervals.into_iter().sorted_by_key(|&(start, _)| start) {
        match merged.last_mut() {
            Some(current) if start <= current.1 + 1 => current.1 = current.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_known_pairs() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn lcm_of_known_pairs() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 5), 0);
        assert_eq!(lcm(-4, 6), 12);
    }

    #[test]
    fn lcm_all_folds_left() {
        assert_eq!(lcm_all([2, 3, 4]), Ok(12));
        assert_eq!(lcm_all([7]), Ok(7));
        assert_eq!(lcm_all([]), Err(MathError::EmptySequence));
    }

    #[test]
    fn primality_of_known_values() {
        assert!(is_prime(2));
        assert!(is_prime(97));
        assert!(!is_prime(100));
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
    }

    #[test]
    fn factoring_360() {
        let factors = prime_factors(360).unwrap();
        assert_eq!(factors, HashMap::from([(2, 3), (3, 2), (5, 1)]));
    }

    #[test]
    fn factoring_one_is_empty() {
        assert!(prime_factors(1).unwrap().is_empty());
    }

    #[test]
    fn factoring_rejects_non_positive_values() {
        assert_eq!(prime_factors(0), Err(MathError::NonPositive(0)));
        assert_eq!(prime_factors(-12), Err(MathError::NonPositive(-12)));
    }

    #[test]
    fn manhattan_distance_of_known_points() {
        assert_eq!(manhattan_distance((0, 0), (3, 4)), 7);
        assert_eq!(manhattan_distance((-2, 5), (1, 1)), 7);
        assert_eq!(manhattan_distance((1, 1), (1, 1)), 0);
    }

    #[test]
    fn overlap_is_inclusive_on_both_ends() {
        assert!(intervals_overlap((1, 3), (3, 5)));
        assert!(intervals_overlap((3, 5), (1, 3)));
        assert!(!intervals_overlap((1, 3), (5, 7)));
    }

    #[test]
    fn merging_folds_overlap_and_adjacency() {
        let merged = merge_intervals([(1, 3), (2, 5), (7, 8), (9, 10)]);
        assert_eq!(merged, vec![(1, 5), (7, 10)]);
    }

    #[test]
    fn merging_keeps_gapped_intervals_apart() {
        let merged = merge_intervals([(1, 2), (4, 5)]);
        assert_eq!(merged, vec![(1, 2), (4, 5)]);
    }

    #[test]
    fn merging_sorts_its_input() {
        let merged = merge_intervals([(9, 10), (1, 3), (7, 8), (2, 5)]);
        assert_eq!(merged, vec![(1, 5), (7, 10)]);
    }

    #[test]
    fn merging_nothing_is_nothing() {
        assert!(merge_intervals([]).is_empty());
    }
}
