//! Logger contract shared by the production and fake loggers.

use serde_json::Value;

use super::level::{levels, Level, LevelMapping};
use super::record::Fields;
use crate::error::Result;

/// Logging interface for application components.
///
/// [`super::Logger`] and [`super::FakeLogger`] both implement this trait, so
/// code written against it can be handed the fake in tests.
///
/// Every leveled method takes the same call shape: optional structured
/// fields merged into the record, an optional message, and values for
/// printf-style interpolation of the message.
///
/// # Example
///
/// ```
/// use logfacade::config::LoggerConfig;
/// use logfacade::log::{FakeLogger, LoggerContract};
/// use logfacade::{log_info, log_warn};
/// use serde_json::json;
///
/// let logger = FakeLogger::new(LoggerConfig::new()).unwrap();
/// log_info!(logger, "Application started").unwrap();
///
/// let fields = json!({ "disk": "/dev/sda" }).as_object().unwrap().clone();
/// log_warn!(logger, fields = fields, "%d%% used", 91).unwrap();
///
/// assert_eq!(logger.logs()[1].msg.as_deref(), Some("91% used"));
/// ```
pub trait LoggerContract: Send + Sync {
    /// Currently active minimum level.
    fn level(&self) -> Level;

    /// Numeric value of the active minimum level.
    fn level_number(&self) -> u32 {
        self.level().as_number()
    }

    /// The full level name/number mapping.
    fn levels(&self) -> &'static LevelMapping {
        levels()
    }

    /// Whether a record at the named level would be emitted.
    ///
    /// Unknown names, and every name on a disabled logger, report `false`.
    fn is_level_enabled(&self, level: &str) -> bool;

    /// Log at any level.
    ///
    /// This is the core method that implementations must provide. The
    /// per-level methods delegate to it.
    fn log(
        &self,
        level: Level,
        fields: Option<&Fields>,
        message: Option<&str>,
        values: &[Value],
    ) -> Result<()>;

    /// Log at trace level.
    fn trace(&self, fields: Option<&Fields>, message: Option<&str>, values: &[Value]) -> Result<()> {
        self.log(Level::Trace, fields, message, values)
    }

    /// Log at debug level.
    fn debug(&self, fields: Option<&Fields>, message: Option<&str>, values: &[Value]) -> Result<()> {
        self.log(Level::Debug, fields, message, values)
    }

    /// Log at info level.
    fn info(&self, fields: Option<&Fields>, message: Option<&str>, values: &[Value]) -> Result<()> {
        self.log(Level::Info, fields, message, values)
    }

    /// Log at warn level.
    fn warn(&self, fields: Option<&Fields>, message: Option<&str>, values: &[Value]) -> Result<()> {
        self.log(Level::Warn, fields, message, values)
    }

    /// Log at error level.
    fn error(&self, fields: Option<&Fields>, message: Option<&str>, values: &[Value]) -> Result<()> {
        self.log(Level::Error, fields, message, values)
    }

    /// Log at fatal level.
    fn fatal(&self, fields: Option<&Fields>, message: Option<&str>, values: &[Value]) -> Result<()> {
        self.log(Level::Fatal, fields, message, values)
    }

    /// Derive a child logger.
    ///
    /// A `level` key overrides the child's minimum level; every other key
    /// becomes a binding written to each record the child emits.
    fn child(&self, bindings: Fields) -> Result<Self>
    where
        Self: Sized;

    /// Persistent fields attached to every record from this logger.
    fn bindings(&self) -> Fields;
}

/// Log at an explicit [`Level`](crate::log::Level).
///
/// Accepts `message, values...`, `fields = map, message, values...` or
/// `fields = map` alone. Values are converted with `serde_json::json!`.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, fields = $fields:expr) => {
        $logger.log($level, Some(&$fields), None, &[])
    };
    ($logger:expr, $level:expr, fields = $fields:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $logger.log(
            $level,
            Some(&$fields),
            Some($msg),
            &[$($crate::__serde_json::json!($value)),*],
        )
    };
    ($logger:expr, $level:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $logger.log(
            $level,
            None,
            Some($msg),
            &[$($crate::__serde_json::json!($value)),*],
        )
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::Level::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::Level::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::log::Level::Fatal, $($arg)*)
    };
}
