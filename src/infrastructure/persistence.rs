use crate::domain::{LayerConfig, LayerResult};
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct ConfigRepository;

impl ConfigRepository {
    pub fn save_config(config: &LayerConfig, path: &Path) -> LayerResult<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "saved layer config");
        Ok(())
    }

    /// Reads and validates a config file.
    pub fn load_config(path: &Path) -> LayerResult<LayerConfig> {
        let content = fs::read_to_string(path)?;
        let config: LayerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded layer config");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the default config.
    pub fn load_or_default(path: Option<&Path>) -> LayerResult<LayerConfig> {
        match path {
            Some(path) => Self::load_config(path),
            None => Ok(LayerConfig::default()),
        }
    }
}
