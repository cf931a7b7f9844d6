//! Logger configuration.
//!
//! [`LoggerConfig`] carries the typed settings the facade understands (name,
//! level, message key, enabled flag, stream) plus an open bag of engine
//! options passed through untouched.
//!
//! # Example
//!
//! ```
//! use logfacade::config::LoggerConfig;
//! use logfacade::sink::StreamSink;
//!
//! let config = LoggerConfig::new()
//!     .with_name("adonis-logger")
//!     .with_level("debug")
//!     .with_stream(StreamSink::stderr());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;

pub use defaults::{DEFAULT_ENABLED, DEFAULT_LEVEL, DEFAULT_MESSAGE_KEY, DEFAULT_NAME};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::LoggerConfig;
