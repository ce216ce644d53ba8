//! Fibonacci computations over fixed-width signed integers.
//!
//! Three ways of producing values, kept side by side so their cost can be
//! compared:
//!
//! - [`fibonacci_sequence`] builds the first `n` terms from the recurrence
//! - [`fibonacci_recursive`] computes one term by naive double recursion
//! - [`fibonacci_iterative`] computes one term with a constant-space sweep
//!
//! [`FibonacciIter`] is a lazy, unbounded variant of the sequence builder.
//!
//! All arithmetic is `i64` and wraps on overflow in every build profile.
//! Terms past index 92 no longer fit and come back wrapped; callers that care
//! must bound `n` themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest 0-indexed position whose Fibonacci value fits in an `i64`.
pub const MAX_EXACT_POSITION: i64 = 92;

/// Past this position the recursive calculator takes noticeably long.
pub const SLOW_RECURSION_POSITION: i64 = 35;

/// Strategy used to produce a list of terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Build the list from the recurrence in one pass
    Sequence,
    /// Call [`fibonacci_recursive`] once per position
    Recursive,
    /// Call [`fibonacci_iterative`] once per position
    Iterative,
    /// Take terms from [`FibonacciIter`]
    Generator,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Sequence => "sequence",
            Method::Recursive => "recursive",
            Method::Iterative => "iterative",
            Method::Generator => "generator",
        };
        f.write_str(name)
    }
}

/// Build the first `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
///
/// Returns an empty vector when `n <= 0`.
///
/// # Examples
///
/// ```
/// use fibseq::core::fibonacci::fibonacci_sequence;
///
/// assert_eq!(fibonacci_sequence(0), Vec::<i64>::new());
/// assert_eq!(fibonacci_sequence(1), vec![0]);
/// assert_eq!(fibonacci_sequence(6), vec![0, 1, 1, 2, 3, 5]);
/// ```
pub fn fibonacci_sequence(n: i64) -> Vec<i64> {
    if n <= 0 {
        return Vec::new();
    }

    let len = usize::try_from(n).unwrap_or(usize::MAX);
    let mut sequence: Vec<i64> = Vec::with_capacity(len.min(1024));
    sequence.push(0);
    if n >= 2 {
        sequence.push(1);
    }

    for i in 2..len {
        let next = sequence[i - 1].wrapping_add(sequence[i - 2]);
        sequence.push(next);
    }

    sequence
}

/// Fibonacci value at 0-indexed position `n`, by direct double recursion.
///
/// Exponential in `n`. Any `n <= 1`, negatives included, is returned as is.
///
/// ```
/// use fibseq::core::fibonacci::fibonacci_recursive;
///
/// assert_eq!(fibonacci_recursive(10), 55);
/// assert_eq!(fibonacci_recursive(-4), -4);
/// ```
pub fn fibonacci_recursive(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fibonacci_recursive(n - 1).wrapping_add(fibonacci_recursive(n - 2))
}

/// Fibonacci value at 0-indexed position `n`, by a forward sweep.
///
/// Linear time, constant space. Same boundary behaviour as
/// [`fibonacci_recursive`]: any `n <= 1` is returned unchanged.
///
/// ```
/// use fibseq::core::fibonacci::fibonacci_iterative;
///
/// assert_eq!(fibonacci_iterative(10), 55);
/// assert_eq!(fibonacci_iterative(1), 1);
/// ```
pub fn fibonacci_iterative(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }

    let (mut a, mut b) = (0i64, 1i64);
    let mut result = 0;
    for _ in 2..=n {
        result = a.wrapping_add(b);
        a = b;
        b = result;
    }

    result
}

/// Unbounded lazy Fibonacci sequence.
#[derive(Debug, Clone)]
pub struct FibonacciIter {
    current: i64,
    next: i64,
}

impl FibonacciIter {
    pub fn new() -> Self {
        Self { current: 0, next: 1 }
    }
}

impl Default for FibonacciIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let value = self.current;
        self.current = self.next;
        self.next = value.wrapping_add(self.next);
        Some(value)
    }
}

/// Lazy iterator over `0, 1, 1, 2, 3, ...`.
pub fn fibonacci_iter() -> FibonacciIter {
    FibonacciIter::new()
}

/// First `n` terms produced by `method`. Empty when `n <= 0`.
pub fn terms(method: Method, n: i64) -> Vec<i64> {
    if n <= 0 {
        return Vec::new();
    }

    match method {
        Method::Sequence => fibonacci_sequence(n),
        Method::Recursive => (0..n).map(fibonacci_recursive).collect(),
        Method::Iterative => (0..n).map(fibonacci_iterative).collect(),
        Method::Generator => {
            let count = usize::try_from(n).unwrap_or(usize::MAX);
            fibonacci_iter().take(count).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_20: [i64; 20] = [
        0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
    ];

    #[test]
    fn test_sequence_non_positive_is_empty() {
        assert!(fibonacci_sequence(0).is_empty());
        assert!(fibonacci_sequence(-1).is_empty());
        assert!(fibonacci_sequence(i64::MIN).is_empty());
    }

    #[test]
    fn test_sequence_element_type_is_i64() {
        let sequence: Vec<i64> = fibonacci_sequence(3);
        assert_eq!(sequence.iter().sum::<i64>(), 2);
    }

    #[test]
    fn test_sequence_short_prefixes() {
        assert_eq!(fibonacci_sequence(1), vec![0]);
        assert_eq!(fibonacci_sequence(2), vec![0, 1]);
        assert_eq!(fibonacci_sequence(3), vec![0, 1, 1]);
    }

    #[test]
    fn test_sequence_first_ten_and_twenty() {
        assert_eq!(
            fibonacci_sequence(10),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
        assert_eq!(fibonacci_sequence(20), FIRST_20.to_vec());
    }

    #[test]
    fn test_nth_term_at_ten() {
        assert_eq!(fibonacci_recursive(10), 55);
        assert_eq!(fibonacci_iterative(10), 55);
    }

    #[test]
    fn test_nth_term_base_cases() {
        assert_eq!(fibonacci_recursive(0), 0);
        assert_eq!(fibonacci_recursive(1), 1);
        assert_eq!(fibonacci_iterative(0), 0);
        assert_eq!(fibonacci_iterative(1), 1);
        assert_eq!(fibonacci_iterative(2), 1);
    }

    #[test]
    fn test_negative_position_passes_through() {
        for n in [-1, -2, -17, i64::MIN] {
            assert_eq!(fibonacci_recursive(n), n);
            assert_eq!(fibonacci_iterative(n), n);
        }
    }

    #[test]
    fn test_largest_exact_term() {
        assert_eq!(
            fibonacci_iterative(MAX_EXACT_POSITION),
            7_540_113_804_746_346_429
        );
        let sequence = fibonacci_sequence(MAX_EXACT_POSITION + 1);
        assert_eq!(sequence.last().copied(), Some(7_540_113_804_746_346_429));
    }

    #[test]
    fn test_overflow_wraps_instead_of_panicking() {
        let f91 = fibonacci_iterative(91);
        let f92 = fibonacci_iterative(92);
        assert_eq!(fibonacci_iterative(93), f91.wrapping_add(f92));
        assert!(fibonacci_iterative(93) < 0);

        let sequence = fibonacci_sequence(94);
        assert_eq!(sequence[93], f91.wrapping_add(f92));
    }

    #[test]
    fn test_iterator_yields_sequence() {
        let taken: Vec<i64> = fibonacci_iter().take(20).collect();
        assert_eq!(taken, FIRST_20.to_vec());
    }

    #[test]
    fn test_iterator_survives_overflow() {
        // Still yields past the i64 range, wrapped.
        assert_eq!(fibonacci_iter().take(200).count(), 200);
    }

    #[test]
    fn test_terms_agree_across_methods() {
        for method in [
            Method::Sequence,
            Method::Recursive,
            Method::Iterative,
            Method::Generator,
        ] {
            assert_eq!(terms(method, 20), FIRST_20.to_vec(), "method {}", method);
            assert!(terms(method, 0).is_empty());
            assert!(terms(method, -3).is_empty());
        }
    }

    #[test]
    fn test_method_display_matches_serde_name() {
        assert_eq!(Method::Recursive.to_string(), "recursive");
        assert_eq!(
            serde_json::to_string(&Method::Generator).unwrap(),
            "\"generator\""
        );
    }
}
