//! File-based feed source with change polling.
//!
//! The whole file is one feed snapshot. The viewer polls for changes on its
//! timer tick and re-reads the file when its length or modification time
//! moves, which is the "new data arrived" trigger for a relayout.

use crate::model::error::InputError;
use crate::parser::{parse_feed, ParsedFeed};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// What the file looked like when it was last read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

/// Feed file source.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    last_seen: Option<FileStamp>,
}

impl FileSource {
    /// Create a source for the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            last_seen: None,
        })
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file, remembering its stamp.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileDeleted` if the file vanished,
    /// `InputError::Io` for other I/O errors.
    pub fn load(&mut self) -> Result<ParsedFeed, InputError> {
        let stamp = self.stamp()?;
        let contents = std::fs::read_to_string(&self.path).map_err(deleted_or_io)?;
        self.last_seen = Some(stamp);
        debug!(path = ?self.path, bytes = contents.len(), "feed file loaded");
        Ok(parse_feed(&contents))
    }

    /// Re-read the file if it changed since the last load.
    ///
    /// Returns `Ok(None)` when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileDeleted` if the file was removed.
    pub fn poll_changed(&mut self) -> Result<Option<ParsedFeed>, InputError> {
        let stamp = self.stamp()?;
        if self.last_seen == Some(stamp) {
            return Ok(None);
        }
        self.load().map(Some)
    }

    fn stamp(&self) -> Result<FileStamp, InputError> {
        let meta = std::fs::metadata(&self.path).map_err(deleted_or_io)?;
        Ok(FileStamp {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

fn deleted_or_io(err: std::io::Error) -> InputError {
    if err.kind() == ErrorKind::NotFound {
        InputError::FileDeleted
    } else {
        InputError::Io(err)
    }
}
