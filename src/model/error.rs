//! Error types for feedgrid.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's main logic
//!   - [`InputError`] - Feed file/stdin reading failures
//!   - [`ConfigError`] - Config file failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal failures
//!
//! [`ParseError`]s are **non-fatal** and never reach `AppError`: a malformed
//! record is logged and skipped and the rest of the feed is still laid out. Everything else propagates to
//! `main`. The layout engine itself has no error type.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the feed.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Config file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Layout could not be serialized for output.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Terminal or rendering I/O failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading feed input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The feed file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The feed file disappeared while it was being watched.
    #[error("File deleted during viewing")]
    FileDeleted,

    /// No file path given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Any other I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors for individual feed records.
///
/// `line` is 1-based: the line number for JSON Lines input, the element
/// position for a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The record is not valid JSON.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// Record position.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// A required field is absent.
    #[error("Missing required field '{field}' at line {line}")]
    MissingField {
        /// Record position.
        line: usize,
        /// Field name.
        field: &'static str,
    },

    /// A field is present but unusable.
    #[error("Invalid field '{field}' at line {line}: {reason}")]
    InvalidField {
        /// Record position.
        line: usize,
        /// Field name.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The timestamp is not RFC 3339.
    #[error("Invalid timestamp '{raw}' at line {line}")]
    InvalidTimestamp {
        /// Record position.
        line: usize,
        /// The raw timestamp text.
        raw: String,
    },
}

impl ParseError {
    /// Record position the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. }
            | ParseError::MissingField { line, .. }
            | ParseError::InvalidField { line, .. }
            | ParseError::InvalidTimestamp { line, .. } => *line,
        }
    }
}
