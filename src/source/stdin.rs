//! Stdin-based feed source for piped input.
//!
//! Stdin is read to EOF once, e.g. `curl -s $API/posts/ | feedgrid`.

use crate::model::error::InputError;
use crate::parser::{parse_feed, ParsedFeed};
use std::fmt;
use std::io::{IsTerminal, Read};

/// Stdin source for piped feed input.
pub struct StdinSource {
    reader: Option<Box<dyn Read>>,
}

impl StdinSource {
    /// Create a StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal),
    /// so the viewer does not sit waiting for the user to type a feed.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }

    /// Create StdinSource from any reader. Bypasses the TTY check.
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            reader: Some(Box::new(reader)),
        }
    }

    /// Read everything and parse it.
    ///
    /// The first call consumes the reader; later calls return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read errors, including invalid UTF-8.
    pub fn read_all(&mut self) -> Result<Option<ParsedFeed>, InputError> {
        let Some(mut reader) = self.reader.take() else {
            return Ok(None);
        };
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Ok(Some(parse_feed(&contents)))
    }

    /// True once the reader has been consumed.
    pub fn is_complete(&self) -> bool {
        self.reader.is_none()
    }
}

impl fmt::Debug for StdinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdinSource")
            .field("complete", &self.is_complete())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_all_parses_once() {
        let data = "{\"id\":1,\"author\":\"a\",\"content\":\"hi\"}\n";
        let mut source = StdinSource::from_reader(Cursor::new(data.as_bytes().to_vec()));

        assert!(!source.is_complete());
        let feed = source.read_all().unwrap().expect("first read returns feed");
        assert_eq!(feed.items.len(), 1);
        assert!(source.is_complete());
        assert!(source.read_all().unwrap().is_none());
    }

    #[test]
    fn empty_stdin_is_empty_feed() {
        let mut source = StdinSource::from_reader(Cursor::new(Vec::new()));
        let feed = source.read_all().unwrap().unwrap();
        assert!(feed.items.is_empty());
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let mut source = StdinSource::from_reader(Cursor::new(vec![0xff, 0xfe, 0xfd]));
        assert!(matches!(source.read_all(), Err(InputError::Io(_))));
    }

    #[test]
    fn debug_shows_completion() {
        let source = StdinSource::from_reader(Cursor::new(Vec::new()));
        assert!(format!("{source:?}").contains("complete: false"));
    }
}
