//! Presentation layer rendering layers with ratatui.
//!
//! This module composites the layer stack over host content, routes pointer
//! hits through it, and provides the demo's screen, cards and key handling.

mod compositor;
pub mod card;
pub mod view;
pub mod ui;
pub mod input;

pub use card::*;
pub use view::*;
pub use ui::*;
pub use input::*;
