//! Logger configuration.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::log::Fields;
use crate::sink::Sink;

/// Configuration for a [`crate::log::Logger`] or [`crate::log::FakeLogger`].
///
/// Immutable once handed to a logger; children share it.
///
/// # Example
///
/// ```
/// use logfacade::config::LoggerConfig;
///
/// // Using defaults
/// let config = LoggerConfig::default();
/// assert_eq!(config.name(), "app");
/// assert_eq!(config.level(), "info");
/// assert_eq!(config.message_key(), "msg");
/// assert!(config.enabled());
///
/// // Custom configuration
/// let config = LoggerConfig::new()
///     .with_name("adonis-logger")
///     .with_level("trace")
///     .with_option("timestamp", false);
/// ```
#[derive(Clone)]
pub struct LoggerConfig {
    /// Attached to every record as `name`
    pub(super) name: String,
    /// Minimum level name, validated by the engine
    pub(super) level: String,
    /// Field holding the message
    pub(super) message_key: String,
    /// When false every call is a no-op
    pub(super) enabled: bool,
    /// Destination; stdout when unset
    pub(super) stream: Option<Arc<dyn Sink>>,
    /// Engine options passed through verbatim
    pub(super) options: Fields,
}

impl LoggerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logger name. An empty name omits the `name` field.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the minimum level name.
    ///
    /// Not validated here; the engine rejects unknown names when the logger
    /// is constructed.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the field name under which messages are written.
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    /// Enable or disable logging.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the destination sink.
    pub fn with_stream(self, stream: impl Sink + 'static) -> Self {
        self.with_shared_stream(Arc::new(stream))
    }

    /// Set a destination sink that is shared with other owners.
    pub fn with_shared_stream(mut self, stream: Arc<dyn Sink>) -> Self {
        self.stream = Some(stream);
        self
    }

    /// Add an engine option such as `timestamp` or `base`.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get the logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the configured minimum level name.
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Get the message field name.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Whether logging is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Get the destination sink, if one was set.
    pub fn stream(&self) -> Option<&Arc<dyn Sink>> {
        self.stream.as_ref()
    }

    /// Get the pass-through engine options.
    pub fn options(&self) -> &Fields {
        &self.options
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("message_key", &self.message_key)
            .field("enabled", &self.enabled)
            .field("stream", &self.stream.as_ref().map(|_| "<sink>"))
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.name(), DEFAULT_NAME);
        assert_eq!(config.level(), DEFAULT_LEVEL);
        assert_eq!(config.message_key(), DEFAULT_MESSAGE_KEY);
        assert_eq!(config.enabled(), DEFAULT_ENABLED);
        assert!(config.stream().is_none());
        assert!(config.options().is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let config = LoggerConfig::new()
            .with_name("adonis-logger")
            .with_level("trace")
            .with_message_key("message")
            .with_enabled(false);

        assert_eq!(config.name(), "adonis-logger");
        assert_eq!(config.level(), "trace");
        assert_eq!(config.message_key(), "message");
        assert!(!config.enabled());
    }

    #[test]
    fn test_level_is_not_validated() {
        let config = LoggerConfig::new().with_level("verbose");
        assert_eq!(config.level(), "verbose");
    }

    #[test]
    fn test_with_stream() {
        let config = LoggerConfig::new().with_stream(MemorySink::new("msg"));
        assert!(config.stream().is_some());
    }

    #[test]
    fn test_options_pass_through() {
        let config = LoggerConfig::new()
            .with_option("timestamp", false)
            .with_option("custom", "kept");

        assert_eq!(config.options()["timestamp"], Value::Bool(false));
        assert_eq!(config.options()["custom"], Value::from("kept"));
    }

    #[test]
    fn test_clone_shares_stream() {
        let config = LoggerConfig::new().with_stream(MemorySink::new("msg"));
        let cloned = config.clone();
        assert!(Arc::ptr_eq(
            config.stream().unwrap(),
            cloned.stream().unwrap()
        ));
    }

    #[test]
    fn test_debug_impl() {
        let config = LoggerConfig::new().with_stream(MemorySink::new("msg"));
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("LoggerConfig"));
        assert!(debug_str.contains("message_key"));
        assert!(debug_str.contains("<sink>"));
    }
}
