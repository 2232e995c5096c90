//! Signup validation integration tests.
//!
//! Exercises the public API the way a registration form would use it.

use signup_domain::{is_valid_email, validate_signup_data, SignupData, SignupError, SignupValidator};

const MISSING: &str = "Please fill in all fields";
const BAD_EMAIL: &str = "Please enter a valid email address";
const SHORT_PASSWORD: &str = "Password must be at least 6 characters";

fn valid_form() -> SignupData {
    SignupData::new("Jane Doe", "jane@example.com", "secret1", "555-1234")
}

// =============================================================================
// Form scenarios
// =============================================================================

#[test]
fn test_empty_name_reports_missing_fields() {
    let data = SignupData::new("", "a@b.com", "secret1", "555-1234");
    assert_eq!(validate_signup_data(&data).as_deref(), Some(MISSING));
}

#[test]
fn test_malformed_email_reported() {
    let data = SignupData::new("Jane Doe", "not-an-email", "secret1", "555-1234");
    assert_eq!(validate_signup_data(&data).as_deref(), Some(BAD_EMAIL));
}

#[test]
fn test_short_password_reported() {
    let data = SignupData::new("Jane Doe", "jane@example.com", "abc", "555-1234");
    assert_eq!(validate_signup_data(&data).as_deref(), Some(SHORT_PASSWORD));
}

#[test]
fn test_valid_form_passes() {
    assert_eq!(validate_signup_data(&valid_form()), None);
}

#[test]
fn test_double_at_sign_rejected() {
    let data = SignupData::new("Jane Doe", "jane@@example.com", "secret1", "555-1234");
    assert_eq!(validate_signup_data(&data).as_deref(), Some(BAD_EMAIL));
}

// =============================================================================
// Field emptiness
// =============================================================================

#[test]
fn test_every_empty_field_reports_missing_fields() {
    let blank_name = SignupData {
        full_name: String::new(),
        ..valid_form()
    };
    let blank_email = SignupData {
        email: String::new(),
        ..valid_form()
    };
    let blank_password = SignupData {
        password: String::new(),
        ..valid_form()
    };
    let blank_phone = SignupData {
        phone_number: String::new(),
        ..valid_form()
    };

    for data in [blank_name, blank_email, blank_password, blank_phone] {
        assert_eq!(validate_signup_data(&data).as_deref(), Some(MISSING), "{:?}", data);
    }
}

#[test]
fn test_phone_number_format_not_checked() {
    let data = SignupData {
        phone_number: "call me maybe".to_string(),
        ..valid_form()
    };
    assert_eq!(validate_signup_data(&data), None);
}

// =============================================================================
// Rule ordering
// =============================================================================

#[test]
fn test_email_message_wins_over_password_message() {
    let data = SignupData::new("Jane Doe", "jane", "abc", "555-1234");
    assert_eq!(validate_signup_data(&data).as_deref(), Some(BAD_EMAIL));
}

#[test]
fn test_missing_fields_wins_over_everything() {
    let data = SignupData::new("Jane Doe", "jane", "abc", "");
    assert_eq!(validate_signup_data(&data).as_deref(), Some(MISSING));
}

#[test]
fn test_password_lengths_around_minimum() {
    let validator = SignupValidator::new();

    for len in 1..6 {
        let data = SignupData {
            password: "x".repeat(len),
            ..valid_form()
        };
        assert_eq!(
            validator.validate(&data),
            Err(SignupError::PasswordTooShort { min: 6 }),
            "length {}",
            len
        );
    }

    for len in 6..10 {
        let data = SignupData {
            password: "x".repeat(len),
            ..valid_form()
        };
        assert_eq!(validator.validate(&data), Ok(()), "length {}", len);
    }
}

#[test]
fn test_validation_is_repeatable() {
    let validator = SignupValidator::new();
    let data = SignupData::new("Jane Doe", "jane@example", "secret1", "555-1234");

    let first = validator.validate_signup_data(&data);
    let second = validator.validate_signup_data(&data);
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some(BAD_EMAIL));
}

#[test]
fn test_validator_shared_across_threads() {
    let validator = std::sync::Arc::new(SignupValidator::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let data = SignupData::new("Jane Doe", format!("jane{}@example.com", i), "secret1", "555-1234");
                validator.validate_signup_data(&data)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), None);
    }
}

// =============================================================================
// Email pattern
// =============================================================================

#[test]
fn test_email_missing_parts() {
    assert!(!is_valid_email("jane.example.com"));
    assert!(!is_valid_email("jane@"));
    assert!(!is_valid_email("jane@.com"));
    assert!(!is_valid_email("jane@example."));
    assert!(!is_valid_email("jane@example.x"));
}

#[test]
fn test_email_accepts_pattern_matches() {
    for email in [
        "a@b.co",
        "first.last@sub.example.com",
        "x_y%z+tag@host-name.museum",
        "0123@456.org",
    ] {
        assert!(is_valid_email(email), "{}", email);
    }
}
