//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A field value violated an employee invariant
    #[error("{0}")]
    Validation(String),

    /// Roster file error
    #[error("Roster error: {0}")]
    Config(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a roster/config error with message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
