//! Tracing library adapter implementation.

use serde_json::Value;

use super::Sink;
use crate::error::Result;
use crate::log::{Fields, Level};

/// Sink that re-emits records through the `tracing` crate.
///
/// Each record becomes one event at the matching `tracing` level, carrying
/// the serialized record in a `record` field. `fatal` maps to `ERROR`, and
/// records without a recognised level are emitted at `INFO`.
///
/// # Example
///
/// ```ignore
/// use logfacade::config::LoggerConfig;
/// use logfacade::log::Logger;
/// use logfacade::sink::TracingSink;
///
/// // Assumes a tracing subscriber is already installed
/// let logger = Logger::new(LoggerConfig::new().with_stream(TracingSink::new()))?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn write(&self, record: &Fields) -> Result<()> {
        let level = record
            .get("level")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .and_then(Level::from_number)
            .unwrap_or(Level::Info);
        let line = serde_json::to_string(record)?;

        match level {
            Level::Trace => tracing::trace!(record = %line, "log record"),
            Level::Debug => tracing::debug!(record = %line, "log record"),
            Level::Info => tracing::info!(record = %line, "log record"),
            Level::Warn => tracing::warn!(record = %line, "log record"),
            Level::Error | Level::Fatal => tracing::error!(record = %line, "log record"),
        }
        Ok(())
    }
}
