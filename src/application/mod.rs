//! Application layer managing the layer stack and its deferred work.
//!
//! This module holds the observable layer manager, the scheduler and clocks
//! it runs deferred callbacks against, and the demo application state.

pub mod clock;
pub mod events;
pub mod manager;
pub mod scheduler;
pub mod state;

pub use clock::*;
pub use events::{LayerEvent, SubscriptionId};
pub use manager::*;
pub use scheduler::*;
pub use state::*;
