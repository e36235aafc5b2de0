//! Infrastructure layer providing external service integrations.
//!
//! This module contains config file persistence and the tracing subscriber
//! setup used by the demo binary.

pub mod persistence;
pub mod logging;

pub use persistence::*;
pub use logging::*;
