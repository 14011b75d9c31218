//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::storage::local::is_valid_key;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Local key-value persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Browsing behavior
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation("api.base_url must be http or https"));
        }
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(AppError::validation("api.timeout_secs must be > 0 when set"));
        }
        for (name, key) in [
            ("storage.favorites_key", &self.storage.favorites_key),
            ("storage.recent_searches_key", &self.storage.recent_searches_key),
        ] {
            if !is_valid_key(key) {
                return Err(AppError::validation(format!(
                    "{name} '{key}' may only contain letters, digits, '_' and '-'"
                )));
            }
        }
        if self.storage.favorites_key == self.storage.recent_searches_key {
            return Err(AppError::validation(
                "storage.favorites_key and storage.recent_searches_key must differ",
            ));
        }
        if !self.browse.load_more_threshold.is_finite() || self.browse.load_more_threshold < 0.0
        {
            return Err(AppError::validation(
                "browse.load_more_threshold must be a non-negative number",
            ));
        }
        if self.browse.recent_search_limit == 0 {
            return Err(AppError::validation("browse.recent_search_limit must be > 0"));
        }
        if self.browse.surprise_max_page == 0 {
            return Err(AppError::validation("browse.surprise_max_page must be > 0"));
        }
        Ok(())
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint is built from
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; unset keeps the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Local key-value persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per persisted key
    #[serde(default = "defaults::storage_dir")]
    pub dir: PathBuf,

    #[serde(default = "defaults::favorites_key")]
    pub favorites_key: String,

    #[serde(default = "defaults::recent_searches_key")]
    pub recent_searches_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: defaults::storage_dir(),
            favorites_key: defaults::favorites_key(),
            recent_searches_key: defaults::recent_searches_key(),
        }
    }
}

/// Browsing behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Distance from the end of the content that triggers "load more"
    #[serde(default = "defaults::load_more_threshold")]
    pub load_more_threshold: f64,

    /// Maximum number of remembered search queries
    #[serde(default = "defaults::recent_search_limit")]
    pub recent_search_limit: usize,

    /// Highest people page "surprise me" draws from
    #[serde(default = "defaults::surprise_max_page")]
    pub surprise_max_page: u32,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            load_more_threshold: defaults::load_more_threshold(),
            recent_search_limit: defaults::recent_search_limit(),
            surprise_max_page: defaults::surprise_max_page(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // API defaults
    pub fn base_url() -> String {
        "https://swapi.dev/api".into()
    }
    pub fn user_agent() -> String {
        concat!("archives/", env!("CARGO_PKG_VERSION")).into()
    }

    // Storage defaults
    pub fn storage_dir() -> PathBuf {
        PathBuf::from("data")
    }
    pub fn favorites_key() -> String {
        "favorites".into()
    }
    pub fn recent_searches_key() -> String {
        "recentSearches".into()
    }

    // Browse defaults
    pub fn load_more_threshold() -> f64 {
        crate::pipeline::list::DEFAULT_LOAD_MORE_THRESHOLD
    }
    pub fn recent_search_limit() -> usize {
        crate::storage::recent::DEFAULT_RECENT_SEARCH_LIMIT
    }
    pub fn surprise_max_page() -> u32 {
        9
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
