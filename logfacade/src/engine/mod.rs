//! Structured logging engine.
//!
//! The engine owns level filtering, record assembly and hand-off to a
//! [`Sink`]. The facades in [`crate::log`] only translate call shapes and
//! honour the `enabled` flag; everything else happens here.
//!
//! Records are assembled with a fixed field order:
//!
//! ```text
//! level, time, <base fields>, name, <bindings>, <merged fields>, <message key>, v
//! ```
//!
//! `level` and `v` are reserved: base fields, bindings and merged fields
//! with those keys are skipped. The rendered message is written after the
//! merged fields, so it replaces a merged field under the message key.

mod options;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::LoggerConfig;
use crate::error::{LoggerError, Result};
use crate::log::format::interpolate;
use crate::log::{Fields, Level};
use crate::sink::{Sink, StreamSink};

pub use options::EngineOptions;

/// Log format version written as `v` on every record.
pub const LOG_VERSION: u32 = 1;

/// Record keys owned by the engine.
const RESERVED_KEYS: [&str; 2] = ["level", "v"];

/// Engine instance behind a logger. Children are derived with [`Engine::child`].
#[derive(Clone)]
pub struct Engine {
    name: String,
    level: Level,
    message_key: String,
    enabled: bool,
    options: EngineOptions,
    bindings: Fields,
    sink: Arc<dyn Sink>,
}

impl Engine {
    /// Build an engine from configuration.
    ///
    /// Uses the configured stream, or stdout when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidLevel`] if the configured level is not
    /// one of the six level names.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let sink = match config.stream() {
            Some(stream) => Arc::clone(stream),
            None => Arc::new(StreamSink::stdout()),
        };
        Self::with_sink(config, sink)
    }

    /// Build an engine writing to `sink`, ignoring the configured stream.
    pub fn with_sink(config: &LoggerConfig, sink: Arc<dyn Sink>) -> Result<Self> {
        let level: Level = config.level().parse()?;

        Ok(Self {
            name: config.name().to_string(),
            level,
            message_key: config.message_key().to_string(),
            enabled: config.enabled(),
            options: EngineOptions::from_fields(config.options()),
            bindings: Fields::new(),
            sink,
        })
    }

    /// Active minimum level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether the engine emits anything at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Field name holding the message.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Persistent fields written to every record.
    pub fn bindings(&self) -> &Fields {
        &self.bindings
    }

    /// Whether a record at the named level would be emitted.
    pub fn is_level_enabled(&self, level: &str) -> bool {
        self.enabled
            && level
                .parse::<Level>()
                .map(|l| l >= self.level)
                .unwrap_or(false)
    }

    /// Derive a child engine.
    ///
    /// A `level` key overrides the level; all other keys are appended to the
    /// bindings. The sink is shared with the parent.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidLevel`] if `level` is not a known level
    /// name.
    pub fn child(&self, overrides: Fields) -> Result<Self> {
        let mut child = self.clone();

        for (key, value) in overrides {
            if key == "level" {
                child.level = match value {
                    Value::String(name) => name.parse()?,
                    other => return Err(LoggerError::InvalidLevel(other.to_string())),
                };
            } else {
                child.bindings.insert(key, value);
            }
        }

        Ok(child)
    }

    /// Emit one record if the engine is enabled and `level` passes the filter.
    ///
    /// `values` interpolate into `message`; they are ignored when there is no
    /// message. A call with neither message nor fields still emits a record.
    pub fn emit(
        &self,
        level: Level,
        fields: Option<&Fields>,
        message: Option<&str>,
        values: &[Value],
    ) -> Result<()> {
        if !self.enabled || level < self.level {
            return Ok(());
        }

        let record = self.build_record(level, fields, message, values);
        self.sink.write(&record)
    }

    fn build_record(
        &self,
        level: Level,
        fields: Option<&Fields>,
        message: Option<&str>,
        values: &[Value],
    ) -> Fields {
        let mut record = Fields::new();
        record.insert("level".to_string(), Value::from(level.as_number()));

        if self.options.timestamp {
            record.insert(
                "time".to_string(),
                Value::from(chrono::Utc::now().timestamp_millis()),
            );
        }
        extend_unreserved(&mut record, &self.options.base);
        if !self.name.is_empty() {
            record.insert("name".to_string(), Value::from(self.name.as_str()));
        }
        extend_unreserved(&mut record, &self.bindings);
        if let Some(fields) = fields {
            extend_unreserved(&mut record, fields);
        }
        if let Some(message) = message {
            record.insert(
                self.message_key.clone(),
                Value::from(interpolate(message, values)),
            );
        }
        record.insert("v".to_string(), Value::from(LOG_VERSION));

        record
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("message_key", &self.message_key)
            .field("enabled", &self.enabled)
            .field("options", &self.options)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

fn extend_unreserved(record: &mut Fields, fields: &Fields) {
    for (key, value) in fields {
        if !RESERVED_KEYS.contains(&key.as_str()) {
            record.insert(key.clone(), value.clone());
        }
    }
}

/// Version of the engine, reported by loggers.
pub fn engine_version() -> &'static str {
    crate::VERSION
}
