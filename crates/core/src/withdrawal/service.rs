//! Withdrawal service used by the transport layer.
//!
//! This service contains pure business logic with no I/O. It only carries
//! the currency symbol used to render delivery lines, so one instance can be
//! shared freely between concurrent requests.

use rust_decimal::Decimal;

use super::breakdown::{BreakdownLine, BreakdownResult, compute_breakdown};
use super::error::WithdrawalError;

/// Withdrawal service for validating and describing cash withdrawals.
#[derive(Debug, Clone)]
pub struct WithdrawalService {
    currency_symbol: String,
}

impl WithdrawalService {
    /// Creates a service that renders amounts with `currency_symbol`.
    #[must_use]
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Returns the configured currency symbol.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Validates `amount` and splits it into bills.
    ///
    /// # Errors
    ///
    /// Returns the `WithdrawalError` of the first violated validation rule.
    pub fn breakdown(&self, amount: Option<Decimal>) -> Result<BreakdownResult, WithdrawalError> {
        compute_breakdown(amount)
    }

    /// Processes a withdrawal: validate, decompose, then describe each line.
    ///
    /// # Errors
    ///
    /// Returns the `WithdrawalError` of the first violated validation rule.
    pub fn withdraw(&self, amount: Option<Decimal>) -> Result<Vec<String>, WithdrawalError> {
        self.breakdown(amount)
            .map(|result| result.describe(&self.currency_symbol))
    }

    /// Renders a single delivery line with the configured symbol.
    #[must_use]
    pub fn describe_line(&self, line: &BreakdownLine) -> String {
        line.describe(&self.currency_symbol)
    }
}
