//! # Sequence Transforms
//!
//! Examples for sequence transformation basics: elementwise scaling and
//! odd filtering over integer sequences.
//!
//! ## Patterns Covered
//!
//! 1. **Scale By Constant**
//!    - Iterator map + collect
//!    - Counted index loop
//!    - Per-element loop
//!    - In-place rewrite with iter_mut
//!
//! 2. **Odd Filter**
//!    - Direct oddness predicate
//!    - Explicit remainder predicate
//!    - In-place filtering with retain
//!
//! ## Running the Demos
//!
//! ```bash
//! cargo run --bin p1_scale_by_constant
//! cargo run --bin p2_odd_filter
//! ```

/// Factor applied by the scaling demos.
pub const SCALE_FACTOR: i64 = 5;

/// Multiply every element by `factor`, expressed as a single iterator chain.
///
/// Output has the same length and order as the input. Overflow follows
/// normal integer arithmetic (panics in debug builds, wraps in release).
pub fn scale_with_map(values: &[i64], factor: i64) -> Vec<i64> {
    values.iter().map(|value| value * factor).collect()
}

/// Same transform as [`scale_with_map`], written as a counted index loop
/// pushing into an initially empty vector.
pub fn scale_with_index_loop(values: &[i64], factor: i64) -> Vec<i64> {
    let mut scaled = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        scaled.push(values[i] * factor);
    }
    scaled
}

/// Same transform as [`scale_with_map`], iterating over elements directly.
pub fn scale_with_for_loop(values: &[i64], factor: i64) -> Vec<i64> {
    let mut scaled = Vec::with_capacity(values.len());
    for value in values {
        scaled.push(value * factor);
    }
    scaled
}

/// Multiply every element by `factor` in place, without allocating.
pub fn scale_in_place(values: &mut [i64], factor: i64) {
    for value in values.iter_mut() {
        *value *= factor;
    }
}

/// Keep only the odd elements, preserving their relative order.
///
/// Rust's `%` keeps the sign of the dividend (`-1 % 2 == -1`), so oddness
/// is a comparison against zero, not against one.
pub fn filter_odd(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|n| n % 2 != 0).collect()
}

/// Remainder of `n` divided by 2; always 0 or 1, for negative `n` too.
fn parity(n: i64) -> i64 {
    n.rem_euclid(2)
}

/// Odd filter through an explicit remainder comparison.
///
/// [`parity`] only ever returns 0 or 1, so testing equality against 1 is
/// the explicit form of using the remainder itself as the predicate.
pub fn filter_odd_by_remainder(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|&n| parity(n) == 1).collect()
}

/// Drop the even elements in place with `Vec::retain`.
pub fn filter_odd_in_place(values: &mut Vec<i64>) {
    values.retain(|n| n % 2 != 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: [i64; 9] = [28, 447, 14, 47, 45, 74, 474, 2, 1];

    mod scale_tests {
        use super::*;

        #[test]
        fn test_map_realization() {
            assert_eq!(
                scale_with_map(&FIXTURE, SCALE_FACTOR),
                vec![140, 2235, 70, 235, 225, 370, 2370, 10, 5]
            );
        }

        #[test]
        fn test_realizations_agree() {
            let mapped = scale_with_map(&FIXTURE, SCALE_FACTOR);
            assert_eq!(mapped, scale_with_index_loop(&FIXTURE, SCALE_FACTOR));
            assert_eq!(mapped, scale_with_for_loop(&FIXTURE, SCALE_FACTOR));
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(scale_with_map(&[], SCALE_FACTOR), Vec::<i64>::new());
            assert_eq!(scale_with_index_loop(&[], SCALE_FACTOR), Vec::<i64>::new());
            assert_eq!(scale_with_for_loop(&[], SCALE_FACTOR), Vec::<i64>::new());
        }

        #[test]
        fn test_negative_values() {
            assert_eq!(scale_with_map(&[-2, 0, 3], 5), vec![-10, 0, 15]);
        }

        #[test]
        fn test_in_place_matches_allocating() {
            let mut buffer = FIXTURE.to_vec();
            scale_in_place(&mut buffer, SCALE_FACTOR);
            assert_eq!(buffer, scale_with_map(&FIXTURE, SCALE_FACTOR));
        }
    }

    mod filter_tests {
        use super::*;

        #[test]
        fn test_fixture_odds() {
            assert_eq!(filter_odd(&FIXTURE), vec![447, 47, 45, 1]);
        }

        #[test]
        fn test_consecutive_run() {
            let run: Vec<i64> = (1..=11).collect();
            assert_eq!(filter_odd(&run), vec![1, 3, 5, 7, 9, 11]);
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(filter_odd(&[]), Vec::<i64>::new());
            assert_eq!(filter_odd_by_remainder(&[]), Vec::<i64>::new());
        }

        #[test]
        fn test_zero_and_negatives() {
            let values = [-3, -2, -1, 0, 1, 2];
            assert_eq!(filter_odd(&values), vec![-3, -1, 1]);
            assert_eq!(filter_odd_by_remainder(&values), vec![-3, -1, 1]);
        }

        #[test]
        fn test_realizations_agree() {
            assert_eq!(filter_odd(&FIXTURE), filter_odd_by_remainder(&FIXTURE));
        }

        #[test]
        fn test_filter_is_idempotent() {
            let once = filter_odd(&FIXTURE);
            assert_eq!(filter_odd(&once), once);
        }

        #[test]
        fn test_in_place_matches_allocating() {
            let mut buffer = FIXTURE.to_vec();
            filter_odd_in_place(&mut buffer);
            assert_eq!(buffer, filter_odd(&FIXTURE));
        }
    }
}
