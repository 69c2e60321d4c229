//! Error types for the price ladder engine.
//!
//! Clean error handling using `thiserror` for ergonomic error definitions.
//! The core aggregation and range functions are total; errors only arise at
//! the order-submission and feed boundaries.

use thiserror::Error;

/// Result type alias for price ladder operations.
pub type Result<T> = std::result::Result<T, LadderError>;

/// Main error type for price ladder operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// Invalid order size (must be greater than zero)
    #[error("Invalid order size: {0}")]
    InvalidSize(u32),

    /// Feed failed to produce an order book
    #[error("Feed error: {0}")]
    Feed(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Generic(String),
}

impl LadderError {
    /// Create a generic error from any string-like type.
    pub fn generic(msg: impl Into<String>) -> Self {
        LadderError::Generic(msg.into())
    }

    /// Create a feed error from any string-like type.
    pub fn feed(msg: impl Into<String>) -> Self {
        LadderError::Feed(msg.into())
    }
}

impl From<String> for LadderError {
    fn from(err: String) -> Self {
        LadderError::Generic(err)
    }
}

impl From<&str> for LadderError {
    fn from(err: &str) -> Self {
        LadderError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LadderError::InvalidSize(0);
        assert_eq!(err.to_string(), "Invalid order size: 0");
    }

    #[test]
    fn test_result_type() {
        let result: Result<i32> = Err(LadderError::feed("connection refused"));
        assert!(result.is_err());
    }
}
