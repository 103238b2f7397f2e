//! Error types for selq

use thiserror::Error;

/// Result type alias for selq operations
pub type SelqResult<T> = Result<T, SelqError>;

/// Argument errors raised by the builders.
///
/// Every error is returned from the call that violates the precondition,
/// before any builder state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelqError {
    /// A required argument was empty or zero
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// A value that has no SQL literal form
    #[error("Invalid value type: {0}")]
    InvalidValueType(String),
}

impl SelqError {
    /// Create a missing argument error
    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingArgument(message.into())
    }

    /// Create an invalid value error
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValueType(message.into())
    }

    /// Check if this is a missing argument error
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument(_))
    }

    /// Check if this is an invalid value error
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValueType(_))
    }
}
