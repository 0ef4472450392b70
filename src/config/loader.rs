//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tracker
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::TrackerConfig;

/// Loads tracker configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_tracker::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./payroll.yaml")?;
/// println!("Log level: {}", config.telemetry.log_level);
/// # Ok::<(), payroll_tracker::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<TrackerConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Loads configuration from `path` if given, otherwise returns defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PayrollResult<TrackerConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(TrackerConfig::default()),
        }
    }

    /// Parses YAML configuration text.
    ///
    /// An empty document yields the default configuration.
    fn parse(content: &str) -> Result<TrackerConfig, String> {
        if content.trim().is_empty() {
            return Ok(TrackerConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOG_LEVEL;
    use std::path::PathBuf;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "payroll-tracker-{}-{}.yaml",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_configuration() {
        let path = temp_config("full", "telemetry:\n  log_level: debug\n  ansi: true\n");
        let config = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.telemetry.log_level, "debug");
        assert!(config.telemetry.ansi);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let path = temp_config("partial", "telemetry:\n  ansi: true\n");
        let config = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.telemetry.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.telemetry.ansi);
    }

    #[test]
    fn test_empty_file_is_default() {
        let path = temp_config("empty", "");
        let config = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");

        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_returns_parse_error() {
        let path = temp_config("unknown", "telemetry:\n  verbosity: 3\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(PayrollError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let path = temp_config("invalid", "telemetry: [unclosed\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(PayrollError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }
}
