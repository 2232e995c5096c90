//! Signup validation rules.
//!
//! These constants define the business rules applied to a signup form.

// =============================================================================
// Email
// =============================================================================

/// Email pattern: local part, `@`, domain, then a 2-64 letter top-level label.
/// Anchored at both ends so the whole input must match.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

// =============================================================================
// Password
// =============================================================================

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Messages
// =============================================================================

/// Shown when any form field is left empty
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";

/// Shown when the email does not match [`EMAIL_PATTERN`]
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
