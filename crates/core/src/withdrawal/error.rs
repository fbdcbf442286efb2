//! Withdrawal error types.

use cashpoint_shared::AppError;
use thiserror::Error;

/// Reasons a withdrawal request is rejected.
///
/// Variants are listed in the order the rules are checked; only the first
/// violated rule is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WithdrawalError {
    /// No amount was supplied.
    #[error("amount required")]
    AmountRequired,

    /// Amount is zero or negative.
    #[error("amount must be positive")]
    AmountNotPositive,

    /// Amount is smaller than the smallest bill.
    #[error("amount below minimum withdrawal ({minimum})")]
    BelowMinimum {
        /// Face value of the smallest bill.
        minimum: u32,
    },

    /// Amount cannot be paid out exactly with the available bills.
    #[error("amount not composable from available denominations")]
    NotComposable,
}

impl WithdrawalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AmountRequired => "AMOUNT_REQUIRED",
            Self::AmountNotPositive => "AMOUNT_NOT_POSITIVE",
            Self::BelowMinimum { .. } => "AMOUNT_BELOW_MINIMUM",
            Self::NotComposable => "AMOUNT_NOT_COMPOSABLE",
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// Every rejection is caused by the request itself, so the same request
    /// always fails the same way.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

impl From<WithdrawalError> for AppError {
    fn from(err: WithdrawalError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
