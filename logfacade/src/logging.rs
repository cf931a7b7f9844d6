//! Tracing subscriber setup for records routed through [`TracingSink`].
//!
//! Applications that point a logger at [`TracingSink`] need a subscriber
//! installed once per process:
//! - Writes JSON events to `logs/logfacade.log` (cleared on start)
//! - Also prints to stdout
//! - Configurable via RUST_LOG environment variable
//!
//! [`TracingSink`]: crate::sink::TracingSink

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global tracing subscriber.
///
/// Creates the log directory if needed, clears the previous log file,
/// and sets up output to both the file and stdout.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    prepare_log_file(Path::new(log_dir), log_file)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    // One JSON object per line, matching the records themselves
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .json();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true)
        .compact();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create `log_dir` and truncate `log_file` inside it.
///
/// Returns the full path of the log file.
pub fn prepare_log_file(log_dir: &Path, log_file: &str) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join(log_file);
    fs::write(&log_path, "")?;
    Ok(log_path)
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "logfacade.log"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "logfacade.log");
    }

    #[test]
    fn test_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");
        assert!(!log_dir.exists());

        let log_path = prepare_log_file(&log_dir, "test.log").unwrap();

        assert!(log_dir.exists(), "Log directory should be created");
        assert_eq!(log_path, log_dir.join("test.log"));
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_clears_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("test.log");
        fs::write(&log_path, "old log data").unwrap();

        prepare_log_file(temp_dir.path(), "test.log").unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "", "File should be cleared");
    }

    #[test]
    fn test_nested_directory_creation() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("deep/nested/logs");

        let log_path = prepare_log_file(&log_dir, "test.log").unwrap();
        assert!(log_path.exists(), "Log file should exist in nested directory");
    }

    #[test]
    fn test_directory_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();

        let result = prepare_log_file(&blocker, "test.log");
        assert!(result.is_err(), "Should return error, not panic");
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard { _file_guard: guard };
    }

    // init_logging installs a process-wide subscriber, which can only happen
    // once per process, so it is not exercised here.
}
