//! Non-interactive layout output.
//!
//! `feedgrid --width 1200 feed.jsonl` prints the columns for that viewport
//! instead of opening the terminal viewer.

use super::counted;
use crate::layout::{relayout, LayoutPolicy, LayoutState};
use crate::model::{FeedItem, PostId};
use serde::Serialize;

/// Longest content excerpt shown per post in text output.
const EXCERPT_CHARS: usize = 48;

/// Print-mode output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, one block per column.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Debug, Serialize)]
struct LayoutReport<'a> {
    viewport_width: i64,
    column_count: usize,
    columns: Vec<ColumnReport<'a>>,
}

#[derive(Debug, Serialize)]
struct ColumnReport<'a> {
    total_weight: u64,
    score: u64,
    posts: Vec<PostReport<'a>>,
}

#[derive(Debug, Serialize)]
struct PostReport<'a> {
    id: &'a str,
    author: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

/// Compute the layout for `viewport_width` and render it in `format`.
///
/// # Errors
///
/// Returns a serialization error only for JSON output.
pub fn render_layout(
    items: &[FeedItem],
    viewport_width: i64,
    policy: &LayoutPolicy,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let state = relayout(items, viewport_width, policy, None);
    match format {
        OutputFormat::Text => Ok(render_text(items, viewport_width, &state)),
        OutputFormat::Json => render_json(items, viewport_width, &state),
    }
}

fn excerpt(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let mut out: String = first_line.chars().take(EXCERPT_CHARS).collect();
    if first_line.chars().count() > EXCERPT_CHARS || content.lines().nth(1).is_some() {
        out.push_str("...");
    }
    out
}

/// Text rendering of a computed layout.
pub fn render_text(items: &[FeedItem], viewport_width: i64, state: &LayoutState<PostId>) -> String {
    let mut out = format!(
        "{} in {} at {}px\n",
        counted(items.len(), "post"),
        counted(state.column_count(), "column"),
        viewport_width
    );

    for (index, (column, posts)) in state
        .columns()
        .iter()
        .zip(state.columns_of(items))
        .enumerate()
    {
        out.push_str(&format!(
            "\n[column {}] {}, weight {}, score {}\n",
            index + 1,
            counted(column.len(), "post"),
            column.total_weight(),
            column.score()
        ));
        for post in posts {
            out.push_str(&format!(
                "  #{} {}: {}\n",
                post.id(),
                post.author(),
                excerpt(post.content())
            ));
        }
    }

    out
}

/// JSON rendering of a computed layout.
///
/// # Errors
///
/// Propagates `serde_json` serialization errors.
pub fn render_json(
    items: &[FeedItem],
    viewport_width: i64,
    state: &LayoutState<PostId>,
) -> Result<String, serde_json::Error> {
    let columns = state
        .columns()
        .iter()
        .zip(state.columns_of(items))
        .map(|(column, posts)| ColumnReport {
            total_weight: column.total_weight(),
            score: column.score(),
            posts: posts
                .into_iter()
                .map(|post| PostReport {
                    id: post.id().as_str(),
                    author: post.author().as_str(),
                    content: post.content(),
                    created_at: post.created_at().map(|ts| ts.to_rfc3339()),
                })
                .collect(),
        })
        .collect();

    let report = LayoutReport {
        viewport_width,
        column_count: state.column_count(),
        columns,
    };
    serde_json::to_string_pretty(&report)
}
