//! Signup form validation.
//!
//! Rules run in a fixed order and stop at the first failure, so a form
//! with several problems reports only the highest-priority one:
//!
//! 1. every field is filled in
//! 2. the email looks like an address
//! 3. the password is long enough

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::email::{EmailCheck, EmailValidator};
use crate::error::{SignupError, SignupResult};
use crate::signup::SignupData;

/// Stateless validator for [`SignupData`].
///
/// Generic over the email check so the rule order can be exercised with a
/// substitute; [`SignupValidator::new`] uses the regex-backed
/// [`EmailValidator`].
#[derive(Debug, Clone, Default)]
pub struct SignupValidator<E = EmailValidator> {
    email: E,
}

impl SignupValidator<EmailValidator> {
    pub fn new() -> Self {
        Self {
            email: EmailValidator::new(),
        }
    }
}

impl<E: EmailCheck> SignupValidator<E> {
    /// Create a validator around a custom email check.
    pub fn with_email_check(email: E) -> Self {
        Self { email }
    }

    /// Run all rules and return the first one broken.
    pub fn validate(&self, data: &SignupData) -> SignupResult<()> {
        let result = self.check(data);
        if let Err(err) = &result {
            tracing::debug!(rule = err.rule(), "Signup data rejected");
        }
        result
    }

    /// Validate signup data, returning the message to show the user.
    ///
    /// # Returns
    /// * `None` - all checks passed
    /// * `Some(message)` - the first failed check's message
    pub fn validate_signup_data(&self, data: &SignupData) -> Option<String> {
        self.validate(data).err().map(|err| err.to_string())
    }

    fn check(&self, data: &SignupData) -> SignupResult<()> {
        if data.has_empty_field() {
            return Err(SignupError::MissingFields);
        }

        if !self.email.is_valid_email(&data.email) {
            return Err(SignupError::InvalidEmail);
        }

        if data.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignupError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(())
    }
}

/// Validate signup data with the default rules.
pub fn validate_signup_data(data: &SignupData) -> Option<String> {
    SignupValidator::new().validate_signup_data(data)
}
