//! feedgrid
//!
//! Masonry column layout for social post feeds. Posts are distributed over a
//! responsive number of columns so that column heights stay roughly balanced,
//! and the layout is recomputed only when the posts or the column count
//! actually change.
//!
//! The pure core is [`layout`]; [`state`] drives it from viewer events and
//! [`view`] draws it with ratatui.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
