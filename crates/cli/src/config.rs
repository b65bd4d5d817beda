// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is read from a TOML file and includes:
//! - `base_url`: where the hub server listens (e.g., "http://127.0.0.1:5000")
//! - `timeout_secs`: per-request timeout applied by the HTTP fetchers
//! - `[search]` and `[students]`: debounce settings for each list surface
//!
//! The file is located by, in order: the `--config` flag, `HUB_CONFIG`,
//! then `<config dir>/futureai-hub/config.toml`. When none of these exist the
//! built-in defaults are used. `HUB_BASE_URL` overrides `base_url` last.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "futureai-hub";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the hub server.
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    pub timeout_secs: u64,
    /// Search suggestion box settings.
    pub search: SearchConfig,
    /// Student roster settings.
    pub students: StudentsConfig,
}

/// Settings for the search suggestion surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before fetching (default: 300).
    pub debounce_ms: u64,
    /// Shorter queries hide the suggestions instead of fetching (default: 1).
    pub min_query_length: usize,
}

/// Settings for the student roster surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudentsConfig {
    /// Debounce for roster refreshes (default: 0, refresh immediately).
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 10,
            search: SearchConfig::default(),
            students: StudentsConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: 300,
            min_query_length: 1,
        }
    }
}

impl Default for StudentsConfig {
    fn default() -> Self {
        StudentsConfig { debounce_ms: 0 }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl Config {
    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolves the effective configuration from flag, environment and
    /// default location.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        Self::resolve_with(
            explicit,
            env::config_path(),
            default_config_path(),
            env::base_url(),
        )
    }

    /// [`Config::resolve`] with every external input passed in.
    pub fn resolve_with(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
        base_url_override: Option<String>,
    ) -> Result<(Self, ConfigSource)> {
        let chosen = explicit.map(Path::to_path_buf).or(env_path);

        let (mut config, source) = match chosen {
            Some(path) => (Config::load(&path)?, ConfigSource::File(path)),
            None => match default_path.filter(|p| p.exists()) {
                Some(path) => (Config::load(&path)?, ConfigSource::File(path)),
                None => (Config::default(), ConfigSource::Defaults),
            },
        };

        if let Some(url) = base_url_override {
            config.base_url = url;
        }
        config.validate()?;
        Ok((config, source))
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let host = url.split("://").nth(1).unwrap_or("");
        if !has_scheme || host.trim_matches('/').is_empty() {
            return Err(Error::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `<config dir>/futureai-hub/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
