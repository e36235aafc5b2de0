//! Tracing setup for the demo binary.
//!
//! The demo owns the terminal, so logs can never go to stdout or stderr.
//! They are written to the file named by `TLAYERS_LOG`, filtered by
//! `RUST_LOG` (default `tlayers=debug`). Without `TLAYERS_LOG` nothing is
//! installed and every event is discarded.

use crate::domain::{LayerError, LayerResult};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_PATH_VAR: &str = "TLAYERS_LOG";
const DEFAULT_FILTER: &str = "tlayers=debug";

pub fn log_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_PATH_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Installs the global subscriber writing to `path`.
///
/// Returns `Ok(false)` when `path` is `None`.
pub fn init_logging(path: Option<&Path>) -> LayerResult<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| LayerError::Logging(err.to_string()))?;
    Ok(true)
}
