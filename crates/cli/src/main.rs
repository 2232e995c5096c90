//! signup-check - command-line entry point for signup validation.

mod args;
mod commands;
mod output;

use clap::Parser;

use signup_common::{init_tracing, AppResult, Config};

use crate::args::{Cli, Commands};

/// Exit code for failures other than a rejected form
const EXIT_APP_ERROR: i32 = 2;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration, then tracing (verbose mode sets debug level)
    let config = Config::from_env();
    init_tracing(cli.verbose, &config.log_level);
    tracing::debug!(service = %config.service_name, "Configuration loaded");

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(EXIT_APP_ERROR);
        }
    }
}

fn run(cli: Cli) -> AppResult<i32> {
    let report = match cli.command {
        Commands::Email(args) => commands::email(args),
        Commands::Signup(args) => commands::signup(args)?,
    };

    println!("{}", output::render(&report, cli.format)?);
    Ok(report.exit_code())
}
