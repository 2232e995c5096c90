//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Check signup form input the way the registration screen does
#[derive(Parser, Debug)]
#[command(name = "signup-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "SIGNUP_OUTPUT_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a single email address
    Email(EmailArgs),

    /// Validate a complete signup form
    Signup(SignupArgs),
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The message, or `OK`
    Text,
    /// `{"valid": bool, "message": string|null}`
    Json,
}

/// Arguments for the email command
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Address to check
    pub address: String,
}

/// Arguments for the signup command
///
/// Omitted fields count as empty.
#[derive(Parser, Debug)]
pub struct SignupArgs {
    /// Full name
    #[arg(long, default_value = "", conflicts_with = "json")]
    pub full_name: String,

    /// Email address
    #[arg(long, default_value = "", conflicts_with = "json")]
    pub email: String,

    /// Password
    #[arg(long, default_value = "", conflicts_with = "json")]
    pub password: String,

    /// Phone number
    #[arg(long, default_value = "", conflicts_with = "json")]
    pub phone_number: String,

    /// Read the form as JSON from a file, or `-` for stdin
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}
