//! Tracing subscriber installation.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once at
//! startup to route them to stderr.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Builds the event filter: `RUST_LOG` when set and valid, otherwise
/// `fallback`.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] when the fallback is needed and is
/// not a valid filter directive.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, LoggingError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), fallback)
}

fn filter_from(env_directives: Option<&str>, fallback: &str) -> Result<EnvFilter, LoggingError> {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(|| EnvFilter::try_new(fallback).map_err(LoggingError::from), Ok)
}

/// Installs a formatted stderr subscriber as the global default.
///
/// # Errors
///
/// Returns [`LoggingError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(fallback: &str) -> Result<(), LoggingError> {
    let filter = build_filter(fallback)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
