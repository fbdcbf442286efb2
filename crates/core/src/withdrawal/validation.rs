//! Business rule validation for withdrawal amounts.

use rust_decimal::Decimal;

use super::denomination::Denomination;
use super::error::WithdrawalError;

/// Validates a requested withdrawal amount.
///
/// Rules are checked in order and the first violation wins:
/// 1. the amount is present
/// 2. the amount is strictly positive
/// 3. the amount is at least the smallest bill
/// 4. the amount is a multiple of the smallest bill
///
/// # Errors
///
/// Returns the `WithdrawalError` for the first violated rule.
pub fn validate_amount(amount: Option<Decimal>) -> Result<Decimal, WithdrawalError> {
    let amount = amount.ok_or(WithdrawalError::AmountRequired)?;
    let smallest = Denomination::smallest();

    if amount <= Decimal::ZERO {
        return Err(WithdrawalError::AmountNotPositive);
    }

    if amount < smallest.value() {
        return Err(WithdrawalError::BelowMinimum {
            minimum: smallest.face_value(),
        });
    }

    if !(amount % smallest.value()).is_zero() {
        return Err(WithdrawalError::NotComposable);
    }

    Ok(amount)
}
