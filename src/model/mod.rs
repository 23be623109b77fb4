//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod feed_item;
pub mod identifiers;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use feed_item::{FeedItem, FeedOrder};
pub use identifiers::{Author, InvalidAuthor, InvalidPostId, PostId};
pub use key_action::KeyAction;
