//! Masonry column rendering.
//!
//! Each column is a vertical stack of bordered cards. Columns split the
//! body evenly; the last row of the screen is the status line.

use super::counted;
use crate::model::FeedItem;
use crate::state::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Height of a card in terminal lines: wrapped content plus two border lines.
///
/// Wrapping is estimated per character at the card's inner width; ratatui's
/// word wrap can need a line more, in which case the card is clipped.
pub fn card_height(content: &str, column_width: u16) -> u16 {
    let inner_width = column_width.saturating_sub(2).max(1) as usize;

    let content_lines: usize = if content.is_empty() {
        1
    } else {
        content
            .lines()
            .map(|line| line.width().div_ceil(inner_width).max(1))
            .sum()
    };

    u16::try_from(content_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Split the frame into the column body and the one-line status bar.
pub fn split_body_and_status(area: Rect) -> (Rect, Rect) {
    let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (body, status)
}

/// Rects for `count` equal columns inside `body`.
pub fn column_areas(body: Rect, count: usize) -> Vec<Rect> {
    let count = count.max(1);
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
    Layout::horizontal(constraints).split(body).to_vec()
}

/// Number of cards that fit on one screen of a column, at least 1.
///
/// Used as the page size for paging; assumes minimal three-line cards.
pub fn cards_per_page(body_height: u16) -> usize {
    usize::from(body_height / 3).max(1)
}

fn render_card(frame: &mut Frame, area: Rect, item: &FeedItem) {
    let title = Line::from(vec![
        Span::styled(
            item.author().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" #{}", item.id())),
    ]);

    let mut block = Block::bordered().title(title);
    if let Some(ts) = item.created_at() {
        block = block.title_bottom(
            Line::from(ts.format("%Y-%m-%d %H:%M").to_string())
                .style(Style::default().fg(Color::DarkGray))
                .right_aligned(),
        );
    }

    let paragraph = Paragraph::new(item.content().to_string())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_column(frame: &mut Frame, area: Rect, items: &[&FeedItem], skip: usize) {
    let mut y = area.y;
    let bottom = area.bottom();

    for item in items.iter().skip(skip) {
        if y >= bottom {
            break;
        }
        let height = card_height(item.content(), area.width).min(bottom - y);
        render_card(frame, Rect::new(area.x, y, area.width, height), item);
        y += height;
    }
}

fn status_line(state: &AppState) -> Line<'static> {
    let mut text = format!(
        " {} | {} | {}px | relayouts {} | {}",
        counted(state.items().len(), "post"),
        counted(state.column_count(), "column"),
        state.viewport_width_px(),
        state.relayout_count(),
        state.source_label(),
    );
    if state.skipped_records() > 0 {
        text.push_str(&format!(" | {} skipped", state.skipped_records()));
    }
    if let Some(notice) = state.notice() {
        text.push_str(&format!(" | {notice}"));
    }
    Line::from(text).style(Style::default().add_modifier(Modifier::REVERSED))
}

/// Draw the whole feed screen.
pub fn render_feed(frame: &mut Frame, state: &AppState) {
    let (body, status) = split_body_and_status(frame.area());
    let columns = state.columns();

    if state.items().is_empty() {
        frame.render_widget(
            Paragraph::new("No posts yet.").style(Style::default().fg(Color::DarkGray)),
            body,
        );
    } else {
        for (area, items) in column_areas(body, columns.len()).into_iter().zip(&columns) {
            render_column(frame, area, items, state.scroll());
        }
    }

    frame.render_widget(Paragraph::new(status_line(state)), status);
}
