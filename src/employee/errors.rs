//! # Codec Errors

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Employee codec errors
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// Request body is not a well-formed employee object
    #[error("{0}")]
    Decode(String),

    /// Path identifier is not a valid ObjectId
    #[error("{0}")]
    Format(String),

    /// Stored document does not have the employee shape
    #[error("malformed employee document: {0}")]
    Document(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
