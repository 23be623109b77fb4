//! A single post in the feed.

use super::identifiers::{Author, PostId};
use crate::layout::LayoutItem;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A user-generated post as returned by the feed's list endpoint.
///
/// Owned by the caller. The layout engine only borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    id: PostId,
    author: Author,
    content: String,
    created_at: Option<DateTime<Utc>>,
}

impl FeedItem {
    /// Create a post.
    pub fn new(
        id: PostId,
        author: Author,
        content: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            author,
            content: content.into(),
            created_at,
        }
    }

    /// Post id.
    pub fn id(&self) -> &PostId {
        &self.id
    }

    /// Who wrote it.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Post body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When it was posted, if the feed said.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl LayoutItem for FeedItem {
    type Key = PostId;

    fn layout_key(&self) -> PostId {
        self.id.clone()
    }

    fn layout_text(&self) -> &str {
        &self.content
    }
}

/// Order applied to a feed before it is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FeedOrder {
    /// Keep the order the source delivered.
    #[default]
    AsGiven,
    /// Most recent first; undated posts follow dated ones in source order.
    NewestFirst,
}

impl FeedOrder {
    /// Reorder `items` in place. Stable.
    pub fn apply(self, items: &mut [FeedItem]) {
        if self == FeedOrder::NewestFirst {
            // Option<DateTime> sorts None first, so reverse the comparison.
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
}
