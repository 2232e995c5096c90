//! Signup domain - form data and the rules it must satisfy.
//!
//! This crate contains pure validation logic with no I/O.
//!
//! ```
//! use signup_domain::{validate_signup_data, SignupData};
//!
//! let data = SignupData::new("Jane Doe", "jane@example.com", "abc", "555-1234");
//! assert_eq!(
//!     validate_signup_data(&data).as_deref(),
//!     Some("Password must be at least 6 characters")
//! );
//! ```

pub mod constants;
pub mod email;
pub mod error;
pub mod signup;
pub mod validator;

pub use constants::*;
pub use email::{is_valid_email, EmailCheck, EmailValidator};
pub use error::{SignupError, SignupResult};
pub use signup::SignupData;
pub use validator::{validate_signup_data, SignupValidator};
