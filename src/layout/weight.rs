//! Height proxies for feed items.
//!
//! True rendered height is only known after wrapping and paint. The engine
//! uses a cheap monotonic proxy instead: the length of the item's text.

use serde::Deserialize;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Anything the layout engine can place into a column.
pub trait LayoutItem {
    /// Stable identity used to notice that the collection changed.
    type Key: Clone + Eq + fmt::Debug;

    /// Identity of this item.
    fn layout_key(&self) -> Self::Key;

    /// Text whose size stands in for rendered height.
    fn layout_text(&self) -> &str;
}

/// How an item's weight is derived from its text.
///
/// Every strategy is a pure function of the item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WeightStrategy {
    /// Number of characters (Unicode scalar values).
    #[default]
    Chars,
    /// Terminal display width, so wide glyphs count double.
    DisplayWidth,
}

impl WeightStrategy {
    /// Weight of a piece of text.
    pub fn weigh_text(self, text: &str) -> u64 {
        let raw = match self {
            WeightStrategy::Chars => text.chars().count(),
            WeightStrategy::DisplayWidth => text.width(),
        };
        raw as u64
    }

    /// Weight of an item.
    pub fn weigh<T: LayoutItem + ?Sized>(self, item: &T) -> u64 {
        self.weigh_text(item.layout_text())
    }

    /// Config/CLI spelling of this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            WeightStrategy::Chars => "chars",
            WeightStrategy::DisplayWidth => "display-width",
        }
    }

    /// Parse the config/CLI spelling. Returns `None` for unknown names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "chars" => Some(WeightStrategy::Chars),
            "display-width" => Some(WeightStrategy::DisplayWidth),
            _ => None,
        }
    }
}

impl fmt::Display for WeightStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_counts_scalar_values_not_bytes() {
        assert_eq!(WeightStrategy::Chars.weigh_text("héllo"), 5);
        assert_eq!(WeightStrategy::Chars.weigh_text(""), 0);
    }

    #[test]
    fn display_width_counts_wide_glyphs_double() {
        assert_eq!(WeightStrategy::DisplayWidth.weigh_text("ab"), 2);
        assert_eq!(WeightStrategy::DisplayWidth.weigh_text("日本"), 4);
        assert_eq!(WeightStrategy::Chars.weigh_text("日本"), 2);
    }

    #[test]
    fn weight_is_monotonic_in_appended_text() {
        for strategy in [WeightStrategy::Chars, WeightStrategy::DisplayWidth] {
            let short = strategy.weigh_text("post");
            let long = strategy.weigh_text("post with more words");
            assert!(long >= short, "{strategy} should not shrink when text grows");
        }
    }

    #[test]
    fn parse_round_trips_known_names() {
        for strategy in [WeightStrategy::Chars, WeightStrategy::DisplayWidth] {
            assert_eq!(WeightStrategy::parse(strategy.as_str()), Some(strategy));
        }
        assert_eq!(WeightStrategy::parse("pixels"), None);
    }
}
