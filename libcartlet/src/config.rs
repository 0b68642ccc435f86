//! Configuration management for Cartlet

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default backend base URL, matching the development storefront server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default number of inventory rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// A present-but-broken file is still an error; only absence is
    /// forgiven.
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment overrides (`CARTLET_API_URL`, `CARTLET_PAGE_SIZE`).
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("CARTLET_API_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
        if let Some(size) = std::env::var("CARTLET_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.page_size = size;
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CARTLET_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("cartlet").join("config.toml"))
}
