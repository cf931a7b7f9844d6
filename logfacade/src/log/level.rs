//! Severity levels and the level name/number mapping.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::LoggerError;

/// Log severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
    /// Unrecoverable errors
    Fatal,
}

impl Level {
    /// All levels in ascending severity.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric severity written to the `level` field of each record.
    pub fn as_number(self) -> u32 {
        match self {
            Self::Trace => 10,
            Self::Debug => 20,
            Self::Info => 30,
            Self::Warn => 40,
            Self::Error => 50,
            Self::Fatal => 60,
        }
    }

    /// Level name as accepted in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Look up a level by its numeric severity.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_number() == number)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Parse a level name. Names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| LoggerError::InvalidLevel(s.to_string()))
    }
}

/// Bidirectional association between level names and numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelMapping {
    /// Number to name
    pub labels: BTreeMap<u32, String>,
    /// Name to number
    pub values: BTreeMap<String, u32>,
}

/// The fixed level mapping shared by every logger.
pub fn levels() -> &'static LevelMapping {
    static LEVELS: OnceLock<LevelMapping> = OnceLock::new();
    LEVELS.get_or_init(|| LevelMapping {
        labels: Level::ALL
            .iter()
            .map(|l| (l.as_number(), l.as_str().to_string()))
            .collect(),
        values: Level::ALL
            .iter()
            .map(|l| (l.as_str().to_string(), l.as_number()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_numbers() {
        let numbers: Vec<u32> = Level::ALL.iter().map(|l| l.as_number()).collect();
        assert_eq!(numbers, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_parse_level_names() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_unknown_level() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref name) if name == "verbose"));

        // Names are case-sensitive
        assert!("INFO".parse::<Level>().is_err());
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Level::from_number(40), Some(Level::Warn));
        assert_eq!(Level::from_number(35), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Fatal.to_string(), "fatal");
    }

    #[test]
    fn test_level_mapping_both_directions() {
        let mapping = levels();
        assert_eq!(mapping.labels.len(), 6);
        assert_eq!(mapping.values.len(), 6);
        assert_eq!(mapping.labels[&10], "trace");
        assert_eq!(mapping.labels[&60], "fatal");
        assert_eq!(mapping.values["info"], 30);
        assert_eq!(mapping.values["error"], 50);
    }

    #[test]
    fn test_level_mapping_serializes_as_labels_and_values() {
        let json = serde_json::to_value(levels()).unwrap();
        assert_eq!(json["labels"]["20"], "debug");
        assert_eq!(json["values"]["warn"], 40);
    }
}
