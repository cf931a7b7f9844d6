//! Error types for logger construction and record emission.

use thiserror::Error;

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised by the logging engine and surfaced unchanged by the facade.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Level name outside the six known levels
    #[error("Invalid level '{0}': must be one of trace, debug, info, warn, error, fatal")]
    InvalidLevel(String),

    /// Writing a record to the stream failed
    #[error("Failed to write log record: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized
    #[error("Failed to serialize log record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LoggerError {
    /// Returns true if this is an invalid level error.
    pub fn is_invalid_level(&self) -> bool {
        matches!(self, Self::InvalidLevel(_))
    }
}
