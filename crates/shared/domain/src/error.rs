//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for value object construction and business rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was absent, empty or whitespace only
    #[error("{0}")]
    EmptyValue(String),

    /// A value did not match its structural format
    #[error("{0}")]
    Format(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create an empty value error
    pub fn empty_value(msg: impl Into<String>) -> Self {
        DomainError::EmptyValue(msg.into())
    }

    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        DomainError::Format(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
