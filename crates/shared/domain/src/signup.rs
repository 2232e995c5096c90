//! Signup form data.

use serde::{Deserialize, Serialize};

/// Raw values entered on the registration form.
///
/// Nothing is checked at construction; pass the value to
/// [`SignupValidator`](crate::SignupValidator) to find out whether it is
/// acceptable.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    /// User's full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Plain text password
    pub password: String,
    /// Phone number, free form
    pub phone_number: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for SignupData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupData")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

impl SignupData {
    /// Build form data from the four field values.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Check if any field was left empty
    pub fn has_empty_field(&self) -> bool {
        [
            &self.full_name,
            &self.email,
            &self.password,
            &self.phone_number,
        ]
        .iter()
        .any(|field| field.is_empty())
    }
}
