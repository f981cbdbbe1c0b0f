//! Content store configuration
//!
//! Settings come from three layers, each overriding the last:
//!
//! 1. [`StoreConfig::default`] - a CMS backend on `http://localhost:3000`
//! 2. A JSON file read with [`StoreConfig::load`]
//! 3. `BLOGSTUDIO_*` environment variables via [`StoreConfig::apply_env_overrides`]

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_COLLECTION: &str = "cms/blogs";
pub const DEFAULT_LIST_ROLE: &str = "admin";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "BLOGSTUDIO_API_URL";
pub const ENV_COLLECTION: &str = "BLOGSTUDIO_COLLECTION";
pub const ENV_TIMEOUT_SECS: &str = "BLOGSTUDIO_TIMEOUT_SECS";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Collection path must not be empty")]
    EmptyCollection,

    #[error("Timeout must be at least one second")]
    ZeroTimeout,

    #[error("Invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Where and how to reach the content store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Backend origin, e.g. `http://localhost:3000`
    pub base_url: String,
    /// Path of the article collection below the origin
    pub collection: String,
    /// Sent as `?role=` when listing; `None` omits the parameter
    pub list_role: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            list_role: Some(DEFAULT_LIST_ROLE.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    /// Read a JSON config file; missing fields keep their defaults
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let config: StoreConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded store config from {}", path.display());
        Ok(config)
    }

    /// Defaults plus environment overrides, validated
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `BLOGSTUDIO_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup(ENV_API_URL) {
            self.base_url = url;
        }
        if let Some(collection) = lookup(ENV_COLLECTION) {
            self.collection = collection;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_TIMEOUT_SECS,
                value: timeout.clone(),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.collection_url()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the article collection
    pub fn collection_url(&self) -> Result<Url, ConfigError> {
        let collection = self.collection.trim_matches('/');
        if collection.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }

        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        let base = Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        let mut url = base;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid("not a base URL".to_string()))?;
            segments.pop_if_empty();
            segments.extend(collection.split('/'));
        }
        Ok(url)
    }
}
