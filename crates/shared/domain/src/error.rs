//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use chrono::NaiveDate;
use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Username is empty or contains anything other than ASCII letters
    #[error("Invalid username format: {0:?}")]
    InvalidUsername(String),

    /// Date string is not a real calendar date in `YYYY-MM-DD` form
    #[error("Invalid date format: {0:?}")]
    InvalidFormat(String),

    /// Date is valid but not strictly before today
    #[error("Date {0} must be before today")]
    DateNotInPast(NaiveDate),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create an invalid username error
    pub fn invalid_username(input: impl Into<String>) -> Self {
        DomainError::InvalidUsername(input.into())
    }

    /// Create an invalid date format error
    pub fn invalid_format(input: impl Into<String>) -> Self {
        DomainError::InvalidFormat(input.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
