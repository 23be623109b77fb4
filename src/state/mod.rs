//! UI state (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;

// Re-export for convenience
pub use app_state::{AppState, FALLBACK_TERMINAL_WIDTH};
