//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal or output stream failure
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// System clipboard could not be used
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// External viewer could not be launched
    #[error("Failed to open '{target}': {reason}")]
    Open { target: String, reason: String },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
