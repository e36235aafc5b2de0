use super::errors::{LayerError, LayerResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and styling knobs for a layer manager and its view.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Push/pop transition length, also the delay before push completions run.
    pub layer_transition_ms: u64,
    /// Toast show/clear transition length.
    pub toast_transition_ms: u64,
    /// Redraw cadence while something is animating.
    pub frame_interval_ms: u64,
    /// Dim everything beneath a modal layer.
    pub dim_scrim: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            layer_transition_ms: 300,
            toast_transition_ms: 500,
            frame_interval_ms: 16,
            dim_scrim: true,
        }
    }
}

impl LayerConfig {
    pub fn layer_transition(&self) -> Duration {
        Duration::from_millis(self.layer_transition_ms)
    }

    pub fn toast_transition(&self) -> Duration {
        Duration::from_millis(self.toast_transition_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn validate(&self) -> LayerResult<()> {
        if self.layer_transition_ms == 0 {
            return Err(LayerError::InvalidConfig(
                "layer_transition_ms must be positive".to_string(),
            ));
        }
        if self.toast_transition_ms == 0 {
            return Err(LayerError::InvalidConfig(
                "toast_transition_ms must be positive".to_string(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(LayerError::InvalidConfig(
                "frame_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
