use std::{env::var, io::stderr};

use thiserror::Error;
use tracing::warn;
use tracing_subscriber::fmt::fmt;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("Can't parse log level (found: {0:?})")]
    LogLevelError(Option<String>),
}

/// Installs the global log subscriber. Logs go to stderr, stdout only carries tables.
///
/// An unknown `LOG_LEVEL` never stops the run, it is reported once logging is up.
pub fn bootstrap() {
    let (level, rejected) = resolve_level(var("LOG_LEVEL").ok());

    fmt()
        .with_env_filter(level)
        .with_writer(stderr)
        .init();

    if let Some(err) = rejected {
        warn!("{err}, using default level");
    }
}

/// Validates `LOG_LEVEL`, `None` selects the build dependent default
pub fn log_level(level: Option<String>) -> Result<String, BootstrapError> {
    match level {
        Some(level) => match level.to_lowercase().as_str() {
            lower @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(lower.to_string()),
            _ => Err(BootstrapError::LogLevelError(Some(level))),
        },
        None => Ok(default_level()),
    }
}

/// Level to run with, plus the rejected setting when it had to fall back
pub fn resolve_level(level: Option<String>) -> (String, Option<BootstrapError>) {
    match log_level(level) {
        Ok(level) => (level, None),
        Err(err) => (default_level(), Some(err)),
    }
}

pub fn default_level() -> String {
    #[cfg(debug_assertions)]
    let level = "debug";
    #[cfg(not(debug_assertions))]
    let level = "warn";

    String::from(level)
}
