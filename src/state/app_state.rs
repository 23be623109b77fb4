//! Viewer state and transitions.
//!
//! AppState is the presentation layer that owns the feed and calls the
//! layout engine. Terminal events become method calls here; nothing in this
//! module touches the terminal.

use crate::layout::{FeedLayoutEngine, LayoutOutcome, LayoutPolicy};
use crate::model::{FeedItem, FeedOrder, KeyAction, PostId};
use crate::parser::ParsedFeed;
use tracing::{info, warn};

/// Terminal width used until the first real size is known.
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;

/// Viewer state. No side effects beyond logging.
///
/// # Relayout triggers
///
/// - A new feed snapshot ([`AppState::set_feed`])
/// - A terminal resize ([`AppState::set_terminal_width`])
///
/// Both go through [`FeedLayoutEngine::relayout`], which skips the work when
/// neither the items nor the column count changed.
#[derive(Debug, Clone)]
pub struct AppState {
    items: Vec<FeedItem>,
    engine: FeedLayoutEngine<PostId>,
    order: FeedOrder,
    cell_width_px: u16,
    terminal_width: u16,
    /// Number of cards skipped at the top of every column.
    scroll: usize,
    skipped_records: usize,
    source_label: String,
    notice: Option<String>,
}

impl AppState {
    /// Create an empty viewer state.
    pub fn new(
        policy: LayoutPolicy,
        order: FeedOrder,
        cell_width_px: u16,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            items: Vec::new(),
            engine: FeedLayoutEngine::new(policy),
            order,
            cell_width_px: cell_width_px.max(1),
            terminal_width: FALLBACK_TERMINAL_WIDTH,
            scroll: 0,
            skipped_records: 0,
            source_label: source_label.into(),
            notice: None,
        }
    }

    /// Replace the feed with a new snapshot and relayout.
    pub fn set_feed(&mut self, feed: ParsedFeed) -> LayoutOutcome {
        for err in &feed.errors {
            warn!("Skipping feed record: {}", err);
        }
        self.skipped_records = feed.errors.len();

        let mut items = feed.items;
        self.order.apply(&mut items);
        self.items = items;

        info!(
            posts = self.items.len(),
            skipped = self.skipped_records,
            "feed updated"
        );
        self.relayout()
    }

    /// Record a new terminal width (in cells) and relayout.
    ///
    /// A zero width is replaced by [`FALLBACK_TERMINAL_WIDTH`].
    pub fn set_terminal_width(&mut self, width: u16) -> LayoutOutcome {
        self.terminal_width = if width > 0 {
            width
        } else {
            FALLBACK_TERMINAL_WIDTH
        };
        self.relayout()
    }

    fn relayout(&mut self) -> LayoutOutcome {
        let outcome = self
            .engine
            .relayout(&self.items, self.viewport_width_px());
        if outcome == LayoutOutcome::Recomputed {
            self.clamp_scroll();
        }
        outcome
    }

    /// Viewport width in pixels: terminal cells × cell width.
    pub fn viewport_width_px(&self) -> i64 {
        i64::from(self.terminal_width) * i64::from(self.cell_width_px)
    }

    /// Terminal width in cells.
    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    /// Posts in display order.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    /// Current columns resolved to posts.
    pub fn columns(&self) -> Vec<Vec<&FeedItem>> {
        self.engine.columns_of(&self.items)
    }

    /// Number of columns in the current layout (1 before any layout).
    pub fn column_count(&self) -> usize {
        self.engine
            .state()
            .map_or(1, |state| state.column_count())
    }

    /// How many times the engine rebuilt columns.
    pub fn relayout_count(&self) -> u64 {
        self.engine.recompute_count()
    }

    /// Records skipped in the latest snapshot.
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    /// Where the feed comes from.
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Card offset applied to every column.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// One-line message for the status bar, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Show a message in the status bar.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Longest column length; scrolling stops at its last card.
    fn max_scroll(&self) -> usize {
        self.engine
            .state()
            .and_then(|state| state.columns().iter().map(|c| c.len()).max())
            .unwrap_or(0)
            .saturating_sub(1)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Apply a scrolling action. `page` is the number of cards per page.
    ///
    /// Non-scroll actions are ignored.
    pub fn handle_scroll(&mut self, action: KeyAction, page: usize) {
        let page = page.max(1);
        self.scroll = match action {
            KeyAction::ScrollDown => self.scroll.saturating_add(1),
            KeyAction::ScrollUp => self.scroll.saturating_sub(1),
            KeyAction::PageDown => self.scroll.saturating_add(page),
            KeyAction::PageUp => self.scroll.saturating_sub(page),
            KeyAction::ScrollToTop => 0,
            KeyAction::Reload | KeyAction::Quit => self.scroll,
        };
        self.clamp_scroll();
    }
}
