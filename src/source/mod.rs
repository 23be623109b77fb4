//! Feed input sources.
//!
//! - File loading with change polling
//! - Stdin for piped input, read once
//! - Unified [`InputSource`] enum for both

use crate::model::error::InputError;
use crate::parser::ParsedFeed;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for feed data.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Feed file, re-read when it changes.
    File(FileSource),
    /// Piped stdin, read to EOF once.
    Stdin(StdinSource),
}

impl InputSource {
    /// Initial load of the feed.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn load(&mut self) -> Result<ParsedFeed, InputError> {
        match self {
            InputSource::File(f) => f.load(),
            InputSource::Stdin(s) => Ok(s.read_all()?.unwrap_or_default()),
        }
    }

    /// Check for a newer snapshot of the feed.
    ///
    /// # Behavior:
    /// - File: `Some(feed)` if the file changed since the last read
    /// - Stdin: always `None` (already consumed)
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileDeleted` if a watched file vanished.
    pub fn poll(&mut self) -> Result<Option<ParsedFeed>, InputError> {
        match self {
            InputSource::File(f) => f.poll_changed(),
            InputSource::Stdin(_) => Ok(None),
        }
    }

    /// Force a re-read where that is possible.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn reload(&mut self) -> Result<Option<ParsedFeed>, InputError> {
        match self {
            InputSource::File(f) => f.load().map(Some),
            InputSource::Stdin(_) => Ok(None),
        }
    }

    /// Whether the source can still deliver new snapshots.
    pub fn is_live(&self) -> bool {
        matches!(self, InputSource::File(_))
    }

    /// Short label for the status line.
    pub fn label(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "stdin".to_string(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. If a file path is provided: `FileSource`
/// 2. Otherwise: `StdinSource` (fails if stdin is a terminal)
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is given and stdin is not piped.
/// Returns `InputError::FileNotFound` if the file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
