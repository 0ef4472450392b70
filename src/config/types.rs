//! Configuration types for the payroll tracker.
//!
//! These structures are deserialized from a YAML configuration file. Every
//! field has a default, so an empty file and a missing `--config` flag
//! behave the same.

use serde::Deserialize;

/// Default log filter when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration for the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Logging controls.
    pub telemetry: TelemetryConfig,
}

/// Logging controls.
///
/// Logs are written to stderr so the interactive transcript on stdout is
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// An `EnvFilter` directive such as `"info"` or `"payroll_tracker=debug"`.
    pub log_level: String,
    /// Whether to colour log output.
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            ansi: false,
        }
    }
}
