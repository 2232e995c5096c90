//! Application error handling.
//!
//! Covers the I/O around validation (reading input documents). Rejected
//! forms are not errors; they are reported as validation outcomes.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "BAD_REQUEST",
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Io(e) => format!("Could not read input: {}", e),
            AppError::Json(e) => format!("Malformed JSON: {}", e),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
