//! Structured fields and captured log records.

use serde_json::{Map, Value};

use super::Level;

/// String-keyed structured data: merge objects, bindings and whole records.
pub type Fields = Map<String, Value>;

/// A record captured by [`super::FakeLogger`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Numeric severity
    pub level: u32,
    /// Rendered message, if the call carried one
    pub msg: Option<String>,
    /// Logger name
    pub name: Option<String>,
    /// Remaining fields: bindings, merged fields, `time`, `pid`, `v`
    pub fields: Fields,
}

impl LogRecord {
    /// Split an emitted record into its well-known parts.
    ///
    /// `message_key` is the configured field name holding the message. Only
    /// a numeric `level` and string message and `name` are extracted; any
    /// other value stays in `fields` at its original position.
    pub fn from_fields(mut fields: Fields, message_key: &str) -> Self {
        let level = fields
            .get("level")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok());
        if level.is_some() {
            fields.shift_remove("level");
        }
        let msg = take_string(&mut fields, message_key);
        let name = take_string(&mut fields, "name");

        Self {
            level: level.unwrap_or_default(),
            msg,
            name,
            fields,
        }
    }

    /// The record's level, if it is one of the six known numbers.
    pub fn level(&self) -> Option<Level> {
        Level::from_number(self.level)
    }

    /// Look up any other field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

fn take_string(fields: &mut Fields, key: &str) -> Option<String> {
    if !fields.get(key).is_some_and(Value::is_string) {
        return None;
    }
    match fields.shift_remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
