//! Tracing subscriber initialization.
//!
//! While the terminal viewer owns the screen, logs go to a file that can be
//! followed with `tail -f`. In print mode the screen is free, so logs go to
//! stderr and stdout stays clean for the layout output.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log file path has no usable file name
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file; the directory is created if missing.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

/// Keeps the background log writer alive. Drop it on exit to flush.
#[derive(Debug)]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Split a log path into `(directory, file_name)`, creating the directory.
fn prepare_log_file(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?
        .to_string();

    // A bare file name has an empty parent: log next to the working directory.
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    Ok((directory, file_name))
}

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG`, defaults to `info`.
///
/// # Errors
///
/// Returns `LoggingError` if the log directory cannot be created, the path
/// has no file name, or a subscriber is already installed.
pub fn init(target: LogTarget) -> Result<LogGuard, LoggingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, guard, ansi) = match target {
        LogTarget::File(path) => {
            let (directory, file_name) = prepare_log_file(&path)?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, guard, false)
        }
        LogTarget::Stderr => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, true)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    Ok(LogGuard { _worker: guard })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn prepare_creates_missing_directory() {
        let test_dir = std::env::temp_dir().join("feedgrid_test_logs_create");
        let _ = fs::remove_dir_all(&test_dir);

        let (directory, file_name) = prepare_log_file(&test_dir.join("view.log")).unwrap();

        assert!(test_dir.exists(), "Log directory should be created");
        assert_eq!(directory, test_dir);
        assert_eq!(file_name, "view.log");

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn prepare_uses_current_dir_for_bare_file_name() {
        let (directory, file_name) = prepare_log_file(Path::new("feedgrid.log")).unwrap();
        assert_eq!(directory, PathBuf::from("."));
        assert_eq!(file_name, "feedgrid.log");
    }

    #[test]
    fn prepare_rejects_path_without_file_name() {
        let result = prepare_log_file(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("feedgrid_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        // The first call may itself fail if another test installed a subscriber.
        let _first = init(LogTarget::File(log_file.clone()));
        let second = init(LogTarget::Stderr);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
        let _ = fs::remove_dir_all(&test_dir);
    }
}
