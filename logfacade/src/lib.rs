//! logfacade - Structured JSON logging with a typed contract
//!
//! This library wraps a small structured-logging engine behind a stable
//! facade. Applications log through [`log::Logger`]; test suites swap in
//! [`log::FakeLogger`] to assert on emitted records without parsing output.
//!
//! # Example
//!
//! ```
//! use logfacade::config::LoggerConfig;
//! use logfacade::log::{FakeLogger, LoggerContract};
//! use logfacade::log_info;
//!
//! let logger = FakeLogger::new(LoggerConfig::new().with_level("info")).unwrap();
//! log_info!(logger, "user %s logged in", "virk").unwrap();
//!
//! let logs = logger.logs();
//! assert_eq!(logs[0].level, 30);
//! assert_eq!(logs[0].msg.as_deref(), Some("user virk logged in"));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod logging;
pub mod sink;

pub use error::{LoggerError, Result};

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Version of the logfacade library.
///
/// Reported by [`log::Logger::engine_version`].
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }

    #[test]
    fn test_root_error_reexports() {
        let result: Result<crate::log::Level> = "loud".parse();
        let err: LoggerError = result.unwrap_err();
        assert!(err.is_invalid_level());
    }
}
