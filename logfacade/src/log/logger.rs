//! Production logger facade.

use std::sync::Arc;

use serde_json::Value;

use super::{Fields, Level, LoggerContract};
use crate::config::LoggerConfig;
use crate::engine::{self, Engine};
use crate::error::Result;

/// Logger that forwards to the structured logging [`Engine`].
///
/// Cloning is cheap and yields a handle to the same logger instance.
///
/// # Example
///
/// ```
/// use logfacade::config::LoggerConfig;
/// use logfacade::log::{Logger, LoggerContract};
/// use logfacade::sink::StreamSink;
/// use logfacade::log_info;
///
/// let logger = Logger::new(
///     LoggerConfig::new()
///         .with_name("adonis-logger")
///         .with_stream(StreamSink::stderr()),
/// )
/// .unwrap();
///
/// log_info!(logger, "listening on port %d", 3333).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    config: Arc<LoggerConfig>,
    engine: Arc<Engine>,
}

impl Logger {
    /// Log format version written as `v` on every record.
    pub const LOG_VERSION: u32 = engine::LOG_VERSION;

    /// Create a logger, building its engine from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LoggerError::InvalidLevel`] if the configured level is
    /// unknown.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let engine = Engine::from_config(&config)?;
        Ok(Self::with_engine(config, engine))
    }

    /// Wrap an engine the caller already built from `config`.
    pub fn with_engine(config: LoggerConfig, engine: Engine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }

    /// Configuration this logger was created with, shared by its children.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The underlying engine instance.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Version of the underlying engine.
    pub fn engine_version(&self) -> &'static str {
        engine::engine_version()
    }

    /// Whether two handles refer to the same logger instance.
    pub fn ptr_eq(a: &Logger, b: &Logger) -> bool {
        Arc::ptr_eq(&a.engine, &b.engine)
    }

    fn enabled(&self) -> bool {
        self.config.enabled()
    }
}

impl LoggerContract for Logger {
    fn level(&self) -> Level {
        self.engine.level()
    }

    fn is_level_enabled(&self, level: &str) -> bool {
        self.enabled() && self.engine.is_level_enabled(level)
    }

    fn log(
        &self,
        level: Level,
        fields: Option<&Fields>,
        message: Option<&str>,
        values: &[Value],
    ) -> Result<()> {
        if !self.enabled() {
            return Ok(());
        }

        if !values.is_empty() {
            self.engine.emit(level, fields, message, values)
        } else if let Some(message) = message.filter(|m| !m.is_empty()) {
            self.engine.emit(level, fields, Some(message), &[])
        } else {
            self.engine.emit(level, fields, None, &[])
        }
    }

    /// Derive a child logger.
    ///
    /// A disabled logger has nothing to configure: it returns a handle to
    /// itself and ignores `bindings`, including any `level` override.
    fn child(&self, bindings: Fields) -> Result<Self> {
        if !self.enabled() {
            if !bindings.is_empty() {
                tracing::debug!(
                    logger = self.config.name(),
                    "ignoring child bindings on disabled logger"
                );
            }
            return Ok(self.clone());
        }

        Ok(Self {
            config: Arc::clone(&self.config),
            engine: Arc::new(self.engine.child(bindings)?),
        })
    }

    fn bindings(&self) -> Fields {
        if !self.enabled() {
            return Fields::new();
        }
        self.engine.bindings().clone()
    }
}
