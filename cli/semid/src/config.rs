//! Configuration loading.
//!
//! Handles:
//! - Default prefix components for the codec
//! - Log level
//!
//! Values come from `config.json` in the platform config directory, then
//! environment variables, then command-line flags (highest priority).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable holding comma-separated prefix components.
const PREFIX_ENV: &str = "SEMID_PREFIX";

/// Environment variable holding the log level.
const LOG_LEVEL_ENV: &str = "SEMID_LOG_LEVEL";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "semid", "semid")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix components used when `--prefix` is not given.
    #[serde(default)]
    pub prefix: Vec<String>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from the config directory and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);
        let mut config = Self::load_from(&path)?;
        config.apply_env(
            std::env::var(PREFIX_ENV).ok(),
            std::env::var(LOG_LEVEL_ENV).ok(),
        );
        Ok(config)
    }

    /// Load config from a file, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    fn apply_env(&mut self, prefix: Option<String>, log_level: Option<String>) {
        if let Some(prefix) = prefix {
            self.prefix = split_prefix(&prefix);
        }
        if let Some(log_level) = log_level.filter(|level| !level.is_empty()) {
            self.log_level = log_level;
        }
    }
}

/// Split a comma-separated prefix, skipping blanks.
pub fn split_prefix(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
