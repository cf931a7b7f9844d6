//! In-memory logger for test suites.

use std::sync::Arc;

use serde_json::Value;

use super::{Fields, Level, LogRecord, Logger, LoggerContract};
use crate::config::LoggerConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::sink::MemorySink;

/// A logger that captures records instead of writing them.
///
/// Drop-in replacement for [`Logger`] in tests that assert on log output.
/// Children append to the same record list as their parent, while each
/// filters by its own level. The configured stream is ignored.
///
/// # Example
///
/// ```
/// use logfacade::config::LoggerConfig;
/// use logfacade::log::{FakeLogger, LoggerContract};
/// use logfacade::log_info;
///
/// let logger = FakeLogger::new(LoggerConfig::new()).unwrap();
/// let child = logger.child(Default::default()).unwrap();
/// log_info!(child, "hello info").unwrap();
///
/// assert_eq!(logger.logs().len(), 1);
/// logger.clear();
/// assert!(logger.logs().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FakeLogger {
    logger: Logger,
    sink: MemorySink,
}

impl FakeLogger {
    /// Create a fake logger from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LoggerError::InvalidLevel`] if the configured level is
    /// unknown.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let sink = MemorySink::new(config.message_key());
        let engine = Engine::with_sink(&config, Arc::new(sink.clone()))?;

        Ok(Self {
            logger: Logger::with_engine(config, engine),
            sink,
        })
    }

    /// Records emitted by this logger and every logger sharing its list.
    pub fn logs(&self) -> Vec<LogRecord> {
        self.sink.records()
    }

    /// Empty the shared record list in place.
    pub fn clear(&self) {
        self.sink.clear();
    }

    /// The wrapped logger.
    pub fn as_logger(&self) -> &Logger {
        &self.logger
    }

    /// Whether two handles refer to the same logger instance.
    pub fn ptr_eq(a: &FakeLogger, b: &FakeLogger) -> bool {
        Logger::ptr_eq(&a.logger, &b.logger)
    }
}

impl LoggerContract for FakeLogger {
    fn level(&self) -> Level {
        self.logger.level()
    }

    fn is_level_enabled(&self, level: &str) -> bool {
        self.logger.is_level_enabled(level)
    }

    fn log(
        &self,
        level: Level,
        fields: Option<&Fields>,
        message: Option<&str>,
        values: &[Value],
    ) -> Result<()> {
        self.logger.log(level, fields, message, values)
    }

    fn child(&self, bindings: Fields) -> Result<Self> {
        Ok(Self {
            logger: self.logger.child(bindings)?,
            sink: self.sink.clone(),
        })
    }

    fn bindings(&self) -> Fields {
        self.logger.bindings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fake(level: &str) -> FakeLogger {
        FakeLogger::new(
            LoggerConfig::new()
                .with_name("adonis-logger")
                .with_level(level),
        )
        .unwrap()
    }

    #[test]
    fn test_fake_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FakeLogger>();
    }

    #[test]
    fn test_captures_record() {
        let logger = fake("info");
        logger.info(None, Some("hello info"), &[]).unwrap();

        let logs = logger.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, 30);
        assert_eq!(logs[0].msg.as_deref(), Some("hello info"));
        assert_eq!(logs[0].name.as_deref(), Some("adonis-logger"));
    }

    #[test]
    fn test_as_logger_shares_records() {
        let logger = fake("info");
        logger.as_logger().error(None, Some("via logger"), &[]).unwrap();

        assert_eq!(logger.logs()[0].msg.as_deref(), Some("via logger"));
        assert_eq!(logger.as_logger().config().name(), "adonis-logger");
    }

    #[test]
    fn test_ignores_configured_stream() {
        let stream = MemorySink::new("msg");
        let logger = FakeLogger::new(LoggerConfig::new().with_stream(stream.clone())).unwrap();
        logger.info(None, Some("captured"), &[]).unwrap();

        assert!(stream.is_empty());
        assert_eq!(logger.logs().len(), 1);
    }

    #[test]
    fn test_child_filters_with_own_level() {
        let logger = fake("info");
        let overrides = json!({ "level": "trace" }).as_object().cloned().unwrap();
        let child = logger.child(overrides).unwrap();

        child.trace(None, Some("from child"), &[]).unwrap();
        logger.trace(None, Some("from parent"), &[]).unwrap();

        let logs = logger.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].msg.as_deref(), Some("from child"));
    }

    #[test]
    fn test_clear_observed_by_child() {
        let logger = fake("info");
        let child = logger.child(Fields::new()).unwrap();
        child.info(None, Some("one"), &[]).unwrap();

        logger.clear();
        assert!(child.logs().is_empty());

        child.info(None, Some("two"), &[]).unwrap();
        assert_eq!(logger.logs()[0].msg.as_deref(), Some("two"));
    }

    #[test]
    fn test_disabled_fake() {
        let logger = FakeLogger::new(LoggerConfig::new().with_enabled(false)).unwrap();
        for level in Level::ALL {
            logger.log(level, None, Some("dropped"), &[]).unwrap();
            assert!(!logger.is_level_enabled(level.as_str()));
        }

        assert!(logger.logs().is_empty());
        assert!(logger.bindings().is_empty());
        assert!(FakeLogger::ptr_eq(&logger, &logger.child(Fields::new()).unwrap()));
    }
}
