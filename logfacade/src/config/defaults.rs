//! Default values for logger configuration.

use super::settings::LoggerConfig;
use crate::log::Fields;

/// Default logger name.
pub const DEFAULT_NAME: &str = "app";

/// Default minimum level.
pub const DEFAULT_LEVEL: &str = "info";

/// Default message field name.
pub const DEFAULT_MESSAGE_KEY: &str = "msg";

/// Logging is on unless configured otherwise.
pub const DEFAULT_ENABLED: bool = true;

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: DEFAULT_LEVEL.to_string(),
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            enabled: DEFAULT_ENABLED,
            stream: None,
            options: Fields::new(),
        }
    }
}
