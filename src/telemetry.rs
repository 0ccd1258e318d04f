//! Process-wide tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_FILTER: &str = "info";

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive could not be parsed.
    #[error("invalid log filter `{directive}`: {source}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser failure.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a formatted subscriber filtered by `level`, `RUST_LOG`, or
/// [`DEFAULT_FILTER`], in that order of preference.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `level` is not a valid
/// filter directive, or [`TelemetryError::AlreadyInstalled`] when called
/// twice in one process.
pub fn init(level: Option<&str>) -> Result<(), TelemetryError> {
    let filter = match level {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
                directive: directive.to_owned(),
                source,
            })?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}
