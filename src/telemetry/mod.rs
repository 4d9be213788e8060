//! Logging setup for cropdoc
//!
//! All log output goes to stderr. Stdout carries only the diagnosis line.

use tracing_subscriber::EnvFilter;

use crate::cli::config::LoggingConfig;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "CROPDOC_LOG";

/// Pick the filter directive: environment first, then config
pub fn resolve_filter(env_value: Option<String>, logging: &LoggingConfig) -> EnvFilter {
    env_value
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| {
            EnvFilter::try_new(&logging.filter).unwrap_or_else(|_| EnvFilter::new("warn"))
        })
}

/// Install the global stderr subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(logging: &LoggingConfig) -> bool {
    let filter = resolve_filter(std::env::var(LOG_ENV).ok(), logging);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(logging.ansi)
        .with_target(false)
        .try_init()
        .is_ok()
}
