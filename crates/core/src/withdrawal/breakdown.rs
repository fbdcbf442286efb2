//! Greedy decomposition of a withdrawal into bills.

use rust_decimal::Decimal;

use super::denomination::Denomination;
use super::error::WithdrawalError;
use super::validation::validate_amount;

/// Bills of a single denomination handed out for a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownLine {
    /// Denomination of the bills.
    pub denomination: Denomination,
    /// Number of bills, always at least 1.
    pub count: u128,
}

impl BreakdownLine {
    /// Returns the amount covered by this line.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.denomination.value() * Decimal::from(self.count)
    }

    /// Renders the delivery instruction shown to the customer.
    ///
    /// The "bill(s)" wording is fixed regardless of the count.
    #[must_use]
    pub fn describe(&self, currency_symbol: &str) -> String {
        format!(
            "Deliver {} bill(s) of {currency_symbol}{},00.",
            self.count,
            self.denomination.face_value()
        )
    }
}

/// Full decomposition of a withdrawal, highest denomination first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakdownResult {
    lines: Vec<BreakdownLine>,
}

impl BreakdownResult {
    /// Returns the lines, highest denomination first.
    #[must_use]
    pub fn lines(&self) -> &[BreakdownLine] {
        &self.lines
    }

    /// Returns the sum of every line's subtotal.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(BreakdownLine::subtotal).sum()
    }

    /// Returns the number of bills handed out.
    #[must_use]
    pub fn bill_count(&self) -> u128 {
        self.lines.iter().map(|line| line.count).sum()
    }

    /// Renders one delivery instruction per line.
    #[must_use]
    pub fn describe(&self, currency_symbol: &str) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.describe(currency_symbol))
            .collect()
    }
}

impl IntoIterator for BreakdownResult {
    type Item = BreakdownLine;
    type IntoIter = std::vec::IntoIter<BreakdownLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Splits an already validated amount into bills, largest first.
///
/// Each denomination takes as many bills as fit in what is left; a
/// denomination that does not fit at all produces no line. For the fixed
/// {100, 50, 20, 10} set this yields the minimum number of bills.
///
/// Callers must pass an amount accepted by [`validate_amount`]; anything
/// that is not a multiple of the smallest bill leaves a remainder that is
/// silently dropped.
#[must_use]
pub fn decompose(amount: Decimal) -> BreakdownResult {
    let mut remaining = amount;
    let mut lines = Vec::with_capacity(Denomination::DESCENDING.len());

    for denomination in Denomination::DESCENDING {
        let value = denomination.value();
        if remaining < value {
            continue;
        }

        // Exact: `taken` is a multiple of `value`, so the quotient is integral.
        let taken = remaining - remaining % value;
        let count = (taken / value).trunc().mantissa().unsigned_abs();

        lines.push(BreakdownLine {
            denomination,
            count,
        });
        remaining -= taken;
    }

    debug_assert!(remaining < Denomination::smallest().value());

    BreakdownResult { lines }
}

/// Validates a withdrawal request and computes its bill breakdown.
///
/// # Errors
///
/// Returns the `WithdrawalError` of the first violated validation rule.
pub fn compute_breakdown(amount: Option<Decimal>) -> Result<BreakdownResult, WithdrawalError> {
    validate_amount(amount).map(decompose)
}
