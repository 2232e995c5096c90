//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter directive: verbose wins, then `RUST_LOG`, then the
/// configured level.
pub fn filter_directive(verbose: bool, rust_log: Option<String>, configured: &str) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Initialize tracing subscriber. Output goes to stderr so stdout stays
/// parseable.
pub fn init_tracing(verbose: bool, configured: &str) {
    let filter = filter_directive(verbose, std::env::var("RUST_LOG").ok(), configured);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();
}
