//! Errors raised when input is validated.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Raised only where a caller explicitly validates input: manual barcode
/// entry, building a prefix table, seeding a catalog. Resolution and
/// classification are total and never produce one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input such as a blank barcode or a zero prefix length.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A stored identifier did not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two records claim the same key.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
