//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Ctrl+C always quits, whatever the table says.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(KeyAction::Quit);
        }
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let table = [
            // Vim-style scrolling
            (KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown),
            (KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp),
            (KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop),
            // Arrow keys
            (KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown),
            (KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp),
            (KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop),
            // Page navigation
            (KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown),
            (KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp),
            (KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown),
            (KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp),
            // Application controls
            (KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Reload),
            (KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit),
            (KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit),
        ];

        let bindings = table
            .into_iter()
            .map(|(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();

        Self { bindings }
    }
}
