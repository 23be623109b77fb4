//! Feed parser.
//!
//! Converts the list endpoint's output into validated [`FeedItem`]s. Two
//! shapes are accepted:
//!
//! - JSON Lines: one post object per line, blank lines ignored.
//! - A single JSON array of post objects.
//!
//! A bad record never aborts the parse. It is reported in
//! [`ParsedFeed::errors`] and the remaining records are still returned, in
//! order.

use crate::model::{Author, FeedItem, ParseError, PostId};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw JSON structure for deserializing posts.
#[derive(Debug, Deserialize)]
struct RawPost {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    author: Option<RawAuthor>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, alias = "date")]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

/// Authors arrive either as a bare username or as a nested user object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAuthor {
    Name(String),
    User { username: String },
}

/// Outcome of parsing a whole feed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    /// Valid posts in source order.
    pub items: Vec<FeedItem>,
    /// Records that were skipped.
    pub errors: Vec<ParseError>,
}

impl ParsedFeed {
    /// True if every record parsed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a single JSON post object.
///
/// # Arguments
///
/// * `raw` - The JSON text of one post
/// * `line` - 1-based record position for error reporting
///
/// # Errors
///
/// Returns [`ParseError`] for malformed JSON, missing fields, empty ids or
/// usernames, and bad timestamps.
pub fn parse_post(raw: &str, line: usize) -> Result<FeedItem, ParseError> {
    let post: RawPost = serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
        line,
        message: e.to_string(),
    })?;
    convert(post, line)
}

fn parse_value(value: serde_json::Value, line: usize) -> Result<FeedItem, ParseError> {
    let post: RawPost = serde_json::from_value(value).map_err(|e| ParseError::InvalidJson {
        line,
        message: e.to_string(),
    })?;
    convert(post, line)
}

fn convert(post: RawPost, line: usize) -> Result<FeedItem, ParseError> {
    let raw_id = post
        .id
        .ok_or(ParseError::MissingField { line, field: "id" })?;
    let id_text = match raw_id {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    };
    let id = PostId::new(id_text).map_err(|e| ParseError::InvalidField {
        line,
        field: "id",
        reason: e.to_string(),
    })?;

    let raw_author = post.author.ok_or(ParseError::MissingField {
        line,
        field: "author",
    })?;
    let username = match raw_author {
        RawAuthor::Name(name) => name,
        RawAuthor::User { username } => username,
    };
    let author = Author::new(username).map_err(|e| ParseError::InvalidField {
        line,
        field: "author",
        reason: e.to_string(),
    })?;

    let content = post.content.ok_or(ParseError::MissingField {
        line,
        field: "content",
    })?;

    let created_at = post
        .created_at
        .map(|raw| parse_timestamp(&raw, line))
        .transpose()?;

    Ok(FeedItem::new(id, author, content, created_at))
}

fn parse_timestamp(raw: &str, line: usize) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| ParseError::InvalidTimestamp {
            line,
            raw: raw.to_string(),
        })
}

/// Parse a feed document, auto-detecting JSON array vs JSON Lines.
pub fn parse_feed(text: &str) -> ParsedFeed {
    if text.trim_start().starts_with('[') {
        parse_array(text)
    } else {
        parse_lines(text)
    }
}

/// Parse JSON Lines input. Blank lines are skipped but still counted.
pub fn parse_lines(text: &str) -> ParsedFeed {
    let mut feed = ParsedFeed::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_post(line, index + 1) {
            Ok(item) => feed.items.push(item),
            Err(err) => feed.errors.push(err),
        }
    }

    feed
}

/// Parse a JSON array of posts.
///
/// If the document itself is not a JSON array, a single error at position 1
/// is reported.
pub fn parse_array(text: &str) -> ParsedFeed {
    let mut feed = ParsedFeed::default();

    let values: Vec<serde_json::Value> = match serde_json::from_str(text) {
        Ok(values) => values,
        Err(e) => {
            feed.errors.push(ParseError::InvalidJson {
                line: 1,
                message: e.to_string(),
            });
            return feed;
        }
    };

    for (index, value) in values.into_iter().enumerate() {
        match parse_value(value, index + 1) {
            Ok(item) => feed.items.push(item),
            Err(err) => feed.errors.push(err),
        }
    }

    feed
}
