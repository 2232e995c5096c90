//! Configuration loaded from environment variables.

use std::env;

/// Default log level when neither `--verbose` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default service name used in log output
pub const DEFAULT_SERVICE_NAME: &str = "signup-check";

/// Shared configuration for binaries in this workspace.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service name for logging
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            service_name: lookup("SERVICE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.service_name),
            log_level: lookup("LOG_LEVEL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
        }
    }
}
