//! TLAYERS - Terminal Layers Library
//!
//! A presentation-layer stack manager for ratatui: push and pop overlay
//! layers (sheets, modals) and a single auto-expiring toast above host
//! content, with slide and fade transitions, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
