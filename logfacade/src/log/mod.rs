//! Logging facade.
//!
//! This module provides the logging interface application code depends on,
//! decoupled from the engine that assembles and writes records.
//!
//! # Architecture
//!
//! - `LoggerContract` trait: the interface that all components use for logging
//! - `Logger`: production facade forwarding to the engine and its stream
//! - `FakeLogger`: captures records in memory for assertions in tests
//!
//! # Usage
//!
//! Components that need logging should be generic over, or hold an
//! `Arc<dyn LoggerContract>`, and use the provided macros:
//!
//! ```
//! use logfacade::config::LoggerConfig;
//! use logfacade::log::{FakeLogger, LoggerContract};
//! use logfacade::{log_debug, log_info};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn LoggerContract>,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self) {
//!         log_info!(self.logger, "Starting work").ok();
//!         log_debug!(self.logger, "Work completed").ok();
//!     }
//! }
//!
//! let logger = FakeLogger::new(LoggerConfig::new()).unwrap();
//! let component = MyComponent { logger: Arc::new(logger.clone()) };
//! component.do_work();
//! assert_eq!(logger.logs().len(), 1);
//! ```

mod fake;
pub mod format;
mod level;
mod logger;
mod record;
mod r#trait;

pub use fake::FakeLogger;
pub use level::{levels, Level, LevelMapping};
pub use logger::Logger;
pub use r#trait::LoggerContract;
pub use record::{Fields, LogRecord};
