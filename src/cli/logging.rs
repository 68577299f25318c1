//! Diagnostic logging setup.

use std::io;

use greenlight::ApprovalError;
use greenlight::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a stderr `fmt` subscriber filtered by `level`.
///
/// An unparsable filter falls back to `warn` so that a typo in the log level
/// never prevents the run. Stdout stays reserved for progress output.
///
/// # Errors
///
/// Returns [`ApprovalError::Configuration`] when a global subscriber is
/// already installed.
pub fn init(level: &str) -> Result<(), ApprovalError> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|error| ApprovalError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}
