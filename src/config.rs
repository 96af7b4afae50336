use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::DEFAULT_REPOSITORY_URL;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_repository_url")]
    pub repository_url: String,

    /// Used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_repository_url() -> String {
    DEFAULT_REPOSITORY_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            repository_url: default_repository_url(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", config_path.display()))?;

        Ok(config)
    }
}
