//! Property-based tests for withdrawal breakdown.
//!
//! - Sum invariant: the lines always add up to the requested amount
//! - Shape: lines strictly descending, every count at least 1
//! - Optimality: greedy never uses more bills than an exhaustive search
//! - Rule order: the first violated rule is the one reported

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::breakdown::{compute_breakdown, decompose};
use super::denomination::Denomination;
use super::error::WithdrawalError;

/// Strategy to generate valid withdrawal amounts (10 to 10,000,000).
fn valid_amount() -> impl Strategy<Value = Decimal> {
    (1u64..1_000_000u64).prop_map(|tens| Decimal::from(tens * 10))
}

/// Strategy to generate non-positive amounts with up to 2 decimal places.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy to generate positive amounts below the smallest bill.
fn below_minimum_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts of at least 10 that are not multiples of 10.
fn not_composable_amount() -> impl Strategy<Value = Decimal> {
    (1000i64..100_000_000i64)
        .prop_filter("must not be a multiple of 10", |cents| cents % 1000 != 0)
        .prop_map(|cents| Decimal::new(cents, 2))
}

/// Minimum number of bills for `tens` * 10, by exhaustive dynamic programming.
fn minimum_bill_count(tens: usize) -> u32 {
    let faces: Vec<usize> = Denomination::DESCENDING
        .iter()
        .map(|d| d.face_value() as usize / 10)
        .collect();
    let mut best = vec![u32::MAX; tens + 1];
    best[0] = 0;
    for total in 1..=tens {
        for face in &faces {
            if *face <= total && best[total - face] != u32::MAX {
                best[total] = best[total].min(best[total - face] + 1);
            }
        }
    }
    best[tens]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every accepted amount is paid out exactly.
    #[test]
    fn prop_lines_sum_to_amount(amount in valid_amount()) {
        let result = compute_breakdown(Some(amount)).unwrap();
        prop_assert_eq!(result.total(), amount);
    }

    /// Lines are strictly descending and never carry a zero count.
    #[test]
    fn prop_lines_descending_and_non_empty(amount in valid_amount()) {
        let result = decompose(amount);
        prop_assert!(!result.lines().is_empty());
        prop_assert!(result.lines().iter().all(|line| line.count >= 1));
        prop_assert!(
            result
                .lines()
                .windows(2)
                .all(|pair| pair[0].denomination > pair[1].denomination)
        );
    }

    /// Same input, same output.
    #[test]
    fn prop_breakdown_is_deterministic(amount in valid_amount()) {
        prop_assert_eq!(compute_breakdown(Some(amount)), compute_breakdown(Some(amount)));
    }

    /// Trailing zeros in the scale do not change the result.
    #[test]
    fn prop_scale_does_not_matter(amount in valid_amount()) {
        let mut scaled = amount;
        scaled.rescale(2);
        prop_assert_eq!(decompose(scaled), decompose(amount));
    }

    /// Greedy uses no more bills than the optimum.
    #[test]
    fn prop_greedy_is_optimal(tens in 1usize..=100) {
        let amount = Decimal::from(tens as u64 * 10);
        let greedy = decompose(amount).bill_count();
        prop_assert_eq!(greedy, u128::from(minimum_bill_count(tens)));
    }

    /// Zero and negative amounts fail rule 2.
    #[test]
    fn prop_non_positive_rejected(amount in non_positive_amount()) {
        prop_assert_eq!(
            compute_breakdown(Some(amount)),
            Err(WithdrawalError::AmountNotPositive)
        );
    }

    /// Positive amounts under 10 fail rule 3.
    #[test]
    fn prop_below_minimum_rejected(amount in below_minimum_amount()) {
        prop_assert_eq!(
            compute_breakdown(Some(amount)),
            Err(WithdrawalError::BelowMinimum { minimum: 10 })
        );
    }

    /// Amounts of at least 10 that are not multiples of 10 fail rule 4.
    #[test]
    fn prop_not_composable_rejected(amount in not_composable_amount()) {
        prop_assert_eq!(
            compute_breakdown(Some(amount)),
            Err(WithdrawalError::NotComposable)
        );
    }
}
