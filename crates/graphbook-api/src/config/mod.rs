//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the platform backend
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Default result count for search and QA retrieval
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Default semantic weight for hybrid search
    #[serde(default = "default_semantic_weight")]
    pub semantic_weight: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: std::env::var("GRAPHBOOK_API_URL")
                .unwrap_or_else(|_| crate::DEFAULT_BASE_URL.to_string()),
            timeout_secs: std::env::var("GRAPHBOOK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_timeout),
            top_k: default_top_k(),
            semantic_weight: default_semantic_weight(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_top_k() -> usize {
    10
}

fn default_semantic_weight() -> f32 {
    0.7
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Config directory (GRAPHBOOK_CONFIG_DIR overrides, used by tests)
    pub fn config_dir() -> PathBuf {
        std::env::var("GRAPHBOOK_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(crate::CONFIG_DIR_NAME)
            })
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.yml")
    }
}
