//! # Record Store Errors
//!
//! Error types for the record store adapter.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Connection could not be established
    #[error("connection failed: {0}")]
    Connection(String),

    /// No document matched the identifier
    #[error("no document matched the given identifier")]
    NotFound,

    /// Any other database failure
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_display_is_raw_detail() {
        let err = StoreError::backend("write concern failed");
        assert_eq!(err.to_string(), "write concern failed");
    }
}
