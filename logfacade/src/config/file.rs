//! Configuration file handling for ~/.logfacade/config.ini.
//!
//! Parsing of the `[logger]` section lives in [`super::parser`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::LoggerConfig;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl LoggerConfig {
    /// Load configuration from the default path (~/.logfacade/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }
}

/// Get the path to the config directory (~/.logfacade).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".logfacade")
}

/// Get the path to the config file (~/.logfacade/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = LoggerConfig::load_from(&config_path).unwrap();

        assert_eq!(config.name(), DEFAULT_NAME);
        assert_eq!(config.level(), DEFAULT_LEVEL);
        assert!(config.stream().is_none());
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with(".logfacade/config.ini"));
        assert!(path.starts_with(config_directory()));
    }

    #[test]
    fn test_unreadable_file_is_read_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, "[logger\nlevel = info\n").unwrap();

        let result = LoggerConfig::load_from(&config_path);
        assert!(matches!(result, Err(ConfigFileError::ReadError(_))));
    }
}
