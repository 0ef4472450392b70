//! Logging setup.
//!
//! `RUST_LOG` takes precedence over the configured level. Output goes to
//! stderr so it never interleaves with the interactive transcript.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::error::{PayrollError, PayrollResult};

/// Builds the log filter from the environment or the configured level.
pub fn env_filter(config: &TelemetryConfig) -> PayrollResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|err| PayrollError::Telemetry {
            message: format!("invalid log level/filter '{}': {}", config.log_level, err),
        }),
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `Telemetry` if the filter is invalid or a subscriber is already
/// installed.
pub fn init(config: &TelemetryConfig) -> PayrollResult<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| PayrollError::Telemetry {
            message: err.to_string(),
        })
}
