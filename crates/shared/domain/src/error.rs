//! Signup validation failures.
//!
//! Each variant renders as the exact message shown to the user, so callers
//! can display `err.to_string()` directly.

use thiserror::Error;

use crate::constants::{MSG_INVALID_EMAIL, MSG_MISSING_FIELDS};

/// The first rule a [`SignupData`](crate::SignupData) value broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    /// At least one field is an empty string
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingFields,

    /// Email does not look like an address
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,

    /// Password is shorter than `min` characters
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

impl SignupError {
    /// Stable rule identifier, used in log events.
    pub fn rule(&self) -> &'static str {
        match self {
            SignupError::MissingFields => "missing_fields",
            SignupError::InvalidEmail => "invalid_email",
            SignupError::PasswordTooShort { .. } => "password_too_short",
        }
    }
}

/// Result type alias for signup validation
pub type SignupResult<T> = Result<T, SignupError>;
