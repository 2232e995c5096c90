//! Common utilities shared across binaries.
//!
//! This crate provides:
//! - Unified application error handling
//! - Configuration loaded from the environment
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
