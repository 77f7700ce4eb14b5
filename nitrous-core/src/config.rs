//! Nitrous configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. Environment: `NITROUS_API_URL`, `NITROUS_DOWNLOADS_DIR`
//! 2. `config.yaml` in the user config directory (e.g. `~/.config/nitrous/`)
//! 3. Built-in defaults
//!
//! ```yaml
//! api:
//!   baseUrl: https://osint.nitrous-oxi.de
//!   browserHost: osint.nitrous-oxi.de
//!   timeoutSeconds: 30
//! downloadsDir: /home/me/Downloads
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://osint.nitrous-oxi.de";

/// Default host used for "open in browser" links
pub const DEFAULT_BROWSER_HOST: &str = "osint.nitrous-oxi.de";

/// Environment variable overriding `api.baseUrl`
pub const API_URL_ENV: &str = "NITROUS_API_URL";

/// Environment variable overriding `downloadsDir`
pub const DOWNLOADS_DIR_ENV: &str = "NITROUS_DOWNLOADS_DIR";

const MIN_TIMEOUT_SECONDS: u64 = 5;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NitrousConfig {
    #[serde(default)]
    pub api: ApiConfig,

    /// Where saved results go; platform downloads folder when unset
    #[serde(default)]
    pub downloads_dir: Option<PathBuf>,
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_browser_host")]
    pub browser_host: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            browser_host: default_browser_host(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_browser_host() -> String {
    DEFAULT_BROWSER_HOST.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ApiConfig {
    /// Timeout clamped to a 5 second minimum
    pub fn effective_timeout_seconds(&self) -> u64 {
        if self.timeout_seconds < MIN_TIMEOUT_SECONDS {
            tracing::warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.timeout_seconds,
                MIN_TIMEOUT_SECONDS
            );
            MIN_TIMEOUT_SECONDS
        } else {
            self.timeout_seconds
        }
    }
}

impl NitrousConfig {
    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("No config directory available; using defaults");
                Self::default()
            }
        };
        Ok(config.with_env_overrides())
    }

    /// Load from a specific file
    ///
    /// A missing file yields defaults. An unreadable or unparseable file is
    /// logged and also yields defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml_ng::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write this configuration as YAML
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_yaml_ng::to_string(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Apply `NITROUS_API_URL` / `NITROUS_DOWNLOADS_DIR` if set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = non_empty_env(API_URL_ENV) {
            tracing::debug!("Using API URL from {}: {}", API_URL_ENV, url);
            self.api.base_url = url;
        }
        if let Some(dir) = non_empty_env(DOWNLOADS_DIR_ENV) {
            self.downloads_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Configured downloads directory, else the platform default
    ///
    /// Falls back to `$HOME/Downloads` when the platform has no notion of one.
    pub fn resolved_downloads_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.downloads_dir {
            return Ok(dir.clone());
        }

        dirs::download_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
            .context("Could not determine downloads directory")
    }

    /// `config.yaml` inside the user config directory
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("de", "nitrous-oxi", "nitrous")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("nitrous")))
            .map(|dir| dir.join("config.yaml"))
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
