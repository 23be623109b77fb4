//! Masonry layout engine (pure).
//!
//! Assigns feed items to near-equal-height columns without measuring
//! rendered output.

pub mod breakpoints;
pub mod engine;
pub mod weight;

pub use breakpoints::{Breakpoint, Breakpoints, BreakpointsError, MAX_COLUMNS};
pub use engine::{
    place, relayout, Column, FeedLayoutEngine, LayoutOutcome, LayoutPolicy, LayoutState,
};
pub use weight::{LayoutItem, WeightStrategy};
