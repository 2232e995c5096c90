//! Command implementations.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use signup_common::AppResult;
use signup_domain::{EmailCheck, EmailValidator, SignupData, SignupError, SignupValidator};

use crate::args::{EmailArgs, SignupArgs};

/// Outcome of a check, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,
    pub message: Option<String>,
}

impl Report {
    fn from_message(message: Option<String>) -> Self {
        Self {
            valid: message.is_none(),
            message,
        }
    }

    /// Process exit code: 0 when valid, 1 when rejected
    pub fn exit_code(&self) -> i32 {
        if self.valid {
            0
        } else {
            1
        }
    }
}

/// Execute the email command
pub fn email(args: EmailArgs) -> Report {
    let valid = EmailValidator::new().is_valid_email(&args.address);
    tracing::debug!(valid, "Email checked");

    Report::from_message((!valid).then(|| SignupError::InvalidEmail.to_string()))
}

/// Execute the signup command
pub fn signup(args: SignupArgs) -> AppResult<Report> {
    tracing::debug!(from_json = args.json.is_some(), "Validating signup data");
    let data = match &args.json {
        Some(path) => load_form(path)?,
        None => SignupData::new(args.full_name, args.email, args.password, args.phone_number),
    };

    let validator = SignupValidator::new();
    Ok(Report::from_message(validator.validate_signup_data(&data)))
}

/// Read a JSON form from a file, or stdin when the path is `-`.
fn load_form(path: &Path) -> AppResult<SignupData> {
    let contents = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(path)?
    };
    parse_form(&contents)
}

fn parse_form(contents: &str) -> AppResult<SignupData> {
    Ok(serde_json::from_str(contents)?)
}
