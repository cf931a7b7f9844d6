//! INI parsing logic for converting `Ini` → `LoggerConfig`.
//!
//! This is the single place where INI key names are mapped to config fields.

use ini::Ini;
use serde_json::Value;

use super::file::ConfigFileError;
use super::settings::LoggerConfig;
use crate::sink::{StreamSink, TracingSink};

/// Parse an `Ini` object into a `LoggerConfig`.
///
/// Starts from `LoggerConfig::default()` and overlays any values found in the
/// `[logger]` section. The level name is left for the engine to validate.
pub(super) fn parse_ini(ini: &Ini) -> Result<LoggerConfig, ConfigFileError> {
    let mut config = LoggerConfig::default();

    let Some(section) = ini.section(Some("logger")) else {
        return Ok(config);
    };

    if let Some(v) = section.get("name") {
        config.name = v.trim().to_string();
    }
    if let Some(v) = section.get("level") {
        config.level = v.trim().to_string();
    }
    if let Some(v) = section.get("message_key") {
        let v = v.trim();
        if v.is_empty() {
            return Err(ConfigFileError::InvalidValue {
                section: "logger".to_string(),
                key: "message_key".to_string(),
                value: v.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        config.message_key = v.to_string();
    }
    if let Some(v) = section.get("enabled") {
        config.enabled = parse_bool(v);
    }
    if let Some(v) = section.get("timestamp") {
        config
            .options
            .insert("timestamp".to_string(), Value::Bool(parse_bool(v)));
    }
    if let Some(v) = section.get("stream") {
        let v = v.trim().to_lowercase();
        config = match v.as_str() {
            "stdout" => config.with_stream(StreamSink::stdout()),
            "stderr" => config.with_stream(StreamSink::stderr()),
            "tracing" => config.with_stream(TracingSink::new()),
            _ => {
                return Err(ConfigFileError::InvalidValue {
                    section: "logger".to_string(),
                    key: "stream".to_string(),
                    value: v,
                    reason: "must be one of: stdout, stderr, tracing".to_string(),
                });
            }
        };
    }

    Ok(config)
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}
