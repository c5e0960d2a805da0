pub mod queue_config;
pub mod server_config;

use crate::config::queue_config::QueueConfig;
use crate::config::server_config::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure matching config.yaml format
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub queue: QueueConfig,
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config =
            serde_yaml::from_str(&content).with_context(|| "Failed to parse YAML config file")?;

        Ok(config)
    }
}
