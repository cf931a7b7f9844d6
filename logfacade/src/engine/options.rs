//! Engine options read from the configuration's pass-through bag.

use serde_json::Value;

use crate::log::Fields;

/// Options the engine recognises. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Write `time` (epoch milliseconds) on each record
    pub timestamp: bool,
    /// Fields written before `name` on each record
    pub base: Fields,
}

impl EngineOptions {
    /// Read options from the configuration bag.
    ///
    /// `timestamp` defaults to true. `base` defaults to `{ "pid": <pid> }`;
    /// `null` removes it, an object replaces it.
    pub fn from_fields(options: &Fields) -> Self {
        let timestamp = options
            .get("timestamp")
            .and_then(Value::as_bool)
            .unwrap_or(true);
        let base = match options.get("base") {
            Some(Value::Null) => Fields::new(),
            Some(Value::Object(base)) => base.clone(),
            _ => default_base(),
        };

        Self { timestamp, base }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::from_fields(&Fields::new())
    }
}

fn default_base() -> Fields {
    let mut base = Fields::new();
    base.insert("pid".to_string(), Value::from(std::process::id()));
    base
}
