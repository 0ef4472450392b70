//! Configuration loading for the payroll tracker.
//!
//! Configuration is optional and only controls logging.
//!
//! # Example
//!
//! ```no_run
//! use payroll_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Log level: {}", config.telemetry.log_level);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_LOG_LEVEL, TelemetryConfig, TrackerConfig};
