//! Domain-level keyboard actions independent of key bindings.

/// Actions the feed viewer understands.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Scroll every column up by one card. Default: k/↑
    ScrollUp,
    /// Scroll every column down by one card. Default: j/↓
    ScrollDown,
    /// Scroll up by a page of cards. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by a page of cards. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump back to the newest posts. Default: g/Home
    ScrollToTop,
    /// Re-read the feed source now. Default: r
    Reload,
    /// Exit the viewer. Default: q
    Quit,
}
