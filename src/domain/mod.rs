pub mod models;
pub mod transition;
pub mod config;
pub mod errors;

pub use models::*;
pub use transition::*;
pub use config::*;
pub use errors::*;
