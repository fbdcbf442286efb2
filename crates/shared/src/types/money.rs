//! Withdrawal amount parsing.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are parsed straight into `rust_decimal::Decimal`, so "150",
//! "150.0" and "150.00" all compare equal and no binary rounding ever
//! happens between the request and the bill count.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

/// Parses a raw withdrawal amount as received from the transport layer.
///
/// Only plain decimal notation is accepted (`"150"`, `"150.00"`, `"-1"`):
/// an optional sign, digits and a single decimal point. Digit separators
/// such as `1_000` are rejected, and so is any value that would have to be
/// rounded to fit a `Decimal`.
/// Sign and range checks belong to the withdrawal rules, not to parsing.
///
/// # Errors
///
/// Returns `AppError::Validation` if `raw` is not an exactly representable
/// decimal number.
pub fn parse_amount(raw: &str) -> AppResult<Decimal> {
    let invalid =
        || AppError::Validation(format!("amount is not a valid decimal number: {raw}"));
    let trimmed = raw.trim();

    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    Decimal::from_str_exact(trimmed).map_err(|_| invalid())
}
