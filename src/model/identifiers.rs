//! Identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.

use std::fmt;

/// Identifier of a post, as assigned by the feed API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    /// Smart constructor: rejects empty or all-whitespace ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidPostId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidPostId::Empty);
        }
        Ok(Self(raw))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Username of a post's author.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author(String);

impl Author {
    /// Smart constructor: trims surrounding whitespace, rejects empty names.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidAuthor> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidAuthor::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

// ===== Error Types =====

/// Rejected post id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPostId {
    /// The id was empty.
    #[error("Post ID cannot be empty")]
    Empty,
}

/// Rejected author name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAuthor {
    /// The username was empty.
    #[error("Author username cannot be empty")]
    Empty,
}
