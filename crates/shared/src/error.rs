//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Malformed input that never reached the business rules.
    #[error("{0}")]
    Validation(String),

    /// Business rule violation.
    #[error("{0}")]
    BusinessRule(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
        }
    }

    /// Returns the human-readable message without any prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::BusinessRule(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::BusinessRule(String::new()).status_code(), 422);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::BusinessRule(String::new()).error_code(),
            "BUSINESS_RULE_VIOLATION"
        );
    }

    #[test]
    fn test_error_display_is_raw_message() {
        assert_eq!(AppError::Validation("msg".into()).to_string(), "msg");
        assert_eq!(
            AppError::BusinessRule("amount required".into()).to_string(),
            "amount required"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AppError::BusinessRule("amount must be positive".into());
        assert_eq!(err.message(), "amount must be positive");
    }
}
