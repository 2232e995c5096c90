//! Email address syntax check.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::EMAIL_PATTERN;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex pattern"));

/// Decides whether a string looks like an email address.
#[cfg_attr(test, mockall::automock)]
pub trait EmailCheck {
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Regex-backed email check.
///
/// Purely syntactic and deliberately permissive: it does not check
/// deliverability and accepts things like consecutive dots in the domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailCheck for EmailValidator {
    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}

/// Validate email format. Empty input is simply invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
