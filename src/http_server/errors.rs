//! # HTTP Errors
//!
//! Failures a handler reports to the client. Each handler picks the variant
//! for every failing call itself; the body is always the raw error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Handler-level errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body could not be decoded
    #[error("{0}")]
    InvalidBody(String),

    /// Path identifier is malformed
    #[error("{0}")]
    InvalidId(String),

    /// Update targeted an identifier with no document
    #[error("{0}")]
    NoMatch(String),

    /// Delete removed nothing
    #[error("{0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Database failure
    #[error("{0}")]
    Store(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NoMatch(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_body(err: impl ToString) -> Self {
        Self::InvalidBody(err.to_string())
    }

    pub fn invalid_id(err: impl ToString) -> Self {
        Self::InvalidId(err.to_string())
    }

    pub fn no_match(err: impl ToString) -> Self {
        Self::NoMatch(err.to_string())
    }

    pub fn store(err: impl ToString) -> Self {
        let message = err.to_string();
        tracing::error!(error = %message, "store operation failed");
        Self::Store(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::invalid_body("eof").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::invalid_id("xyz").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::no_match("none").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound("gone".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::store("down").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_is_plain_text() {
        let response = ApiError::invalid_id("invalid employee id").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
    }
}
