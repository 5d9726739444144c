//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Timestamp rendering modes accepted by `[inspector] timestamps`
const TIMESTAMP_MODES: &[&str] = &["raw", "utc"];

/// Log levels accepted by `[logging] level`
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub inspector: InspectorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Event log inspector configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InspectorConfig {
    #[serde(default = "default_strict_codes")]
    pub strict_codes: bool,

    #[serde(default = "default_source")]
    pub default_source: String,

    #[serde(default = "default_timestamps")]
    pub timestamps: String,

    #[serde(default)]
    pub stop_on_error: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_strict_codes() -> bool { true }
fn default_source() -> String { "joystick0".to_string() }
fn default_timestamps() -> String { "raw".to_string() }

fn default_log_level() -> String { "info".to_string() }

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            strict_codes: default_strict_codes(),
            default_source: default_source(),
            timestamps: default_timestamps(),
            stop_on_error: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl InspectorConfig {
    /// True when timestamps should be rendered as UTC dates
    pub fn utc_timestamps(&self) -> bool {
        self.timestamps == "utc"
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use joystick_event::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        // Records without a source fall back to this one
        if self.inspector.default_source.trim().is_empty() {
            return Err(crate::error::JoystickEventError::Config(
                toml::de::Error::custom("default_source cannot be empty")
            ));
        }

        if !TIMESTAMP_MODES.contains(&self.inspector.timestamps.as_str()) {
            return Err(crate::error::JoystickEventError::Config(
                toml::de::Error::custom("timestamps must be one of: raw, utc")
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(crate::error::JoystickEventError::Config(
                toml::de::Error::custom(format!(
                    "log level must be one of: {}",
                    LOG_LEVELS.join(", ")
                ))
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.inspector.strict_codes);
        assert!(!config.inspector.utc_timestamps());
    }

    #[test]
    fn test_empty_file_equals_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let toml_content = r#"
[inspector]
strict_codes = false
default_source = "arcade-stick"
timestamps = "utc"
stop_on_error = true

[logging]
level = "debug"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert!(!config.inspector.strict_codes);
        assert_eq!(config.inspector.default_source, "arcade-stick");
        assert!(config.inspector.utc_timestamps());
        assert!(config.inspector.stop_on_error);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/joystick-event.toml");
        assert!(matches!(result, Err(crate::error::JoystickEventError::Io(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = Config::from_toml("[inspector\nstrict_codes = true");
        assert!(matches!(result, Err(crate::error::JoystickEventError::Config(_))));
    }

    #[test]
    fn test_empty_default_source() {
        let mut config = Config::default();
        config.inspector.default_source = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_timestamps_mode() {
        let mut config = Config::default();
        config.inspector.timestamps = "local".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_log_levels() {
        for level in LOG_LEVELS {
            let mut config = Config::default();
            config.logging.level = level.to_string();
            assert!(config.validate().is_ok(), "Log level {} should be valid", level);
        }
    }

    #[test]
    fn test_default_functions() {
        assert_eq!(default_strict_codes(), true);
        assert_eq!(default_source(), "joystick0");
        assert_eq!(default_timestamps(), "raw");
        assert_eq!(default_log_level(), "info");
    }
}
