//! # CLI Errors
//!
//! Everything that can stop `hrms` before or while serving. All of these are
//! fatal: `main` prints `<code>: <message>` and exits with status 1.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, not JSON, or failing validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Record store could not be reached at boot
    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),

    /// Runtime, listener or stdout failure
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Effective configuration could not be rendered
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable code printed ahead of the message
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "HRMS_CLI_CONFIG_ERROR",
            CliError::Store(_) => "HRMS_CLI_BOOT_FAILED",
            CliError::Io(_) | CliError::Json(_) => "HRMS_CLI_IO_ERROR",
        }
    }
}
