//! Configuration loading for brewsight
//!
//! Feed URLs, timeouts and retry counts are an explicit value threaded
//! into the orchestrator and assembler constructors, never module-level
//! mutable state. Loaded from TOML with serde defaults so a partial
//! config file is fine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Published CSV endpoints, one per feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedUrls {
    /// Taste test responses
    pub taste_test: String,
    /// Preference survey responses
    pub preference: String,
    /// Coffee metadata (id, name, geography, process, brew method, price)
    pub coffee_metadata: String,
    /// Per-coffee quality estimates (mean + confidence bounds)
    pub coffee_quality: String,
    /// Per-participant harshness/discrimination estimates
    pub participant_harshness: String,
}

impl Default for FeedUrls {
    fn default() -> Self {
        Self {
            taste_test: String::new(),
            preference: String::new(),
            coffee_metadata: String::new(),
            coffee_quality: String::new(),
            participant_harshness: String::new(),
        }
    }
}

/// Retry/backoff tuning for the fetch orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-attempt timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Additional full cycles after the first (3 => 4 cycles total)
    pub max_retries: u32,
    /// Base inter-cycle delay; cycle n waits n * base ms (linear backoff)
    pub retry_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            max_retries: 3,
            retry_delay_ms: 1_000,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feeds: FeedUrls,
    pub fetch: FetchConfig,
    /// Cache lifetime for the coffee metadata feed, in hours
    pub cache_ttl_hours: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feeds: FeedUrls::default(),
            fetch: FetchConfig::default(),
            cache_ttl_hours: 24,
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit path, or from the default
    /// location (`~/.config/brewsight/config.toml`) when present.
    /// Missing default file yields `AppConfig::default()`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let default = default_config_path();
                default.filter(|p| p.exists())
            }
        };

        match resolved {
            Some(p) => {
                let content = std::fs::read_to_string(&p)
                    .map_err(|e| Error::Config(format!("Read {} failed: {}", p.display(), e)))?;
                let config: AppConfig = toml::from_str(&content)
                    .map_err(|e| Error::Config(format!("Parse {} failed: {}", p.display(), e)))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Default configuration file path for the platform
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("brewsight").join("config.toml"))
}
