//! Configuration file handling
//!
//! The config lives at `$XDG_CONFIG_HOME/tsync/config.toml` (or the platform
//! equivalent); `TSYNC_CONFIG` points at an explicit file instead. A missing
//! file means defaults, and missing fields fall back to their defaults.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::source::{default_languages, Language};
use crate::transcript::DEFAULT_TRACK_LABEL;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TSYNC_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub sync: SyncConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the lecture platform
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Languages probed for each stream, in preference order
    pub languages: Vec<Language>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://live.rbg.tum.de".to_string(),
            timeout_secs: 10,
            languages: default_languages(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Period of the sync loop in milliseconds
    pub interval_ms: u64,
    /// Minimum real time between two syncs in milliseconds
    pub min_gap_ms: u64,
    /// Track label preferred for the transcript
    pub selected_label: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            min_gap_ms: 1000,
            selected_label: DEFAULT_TRACK_LABEL.to_string(),
        }
    }
}

impl SyncConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn min_gap(&self) -> Duration {
        Duration::from_millis(self.min_gap_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory transcripts are written to when `-o` is not given
    pub directory: Option<PathBuf>,
}

impl ExportConfig {
    /// Target directory, the current directory if unset.
    pub fn directory_or_cwd(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("tsync").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write to the default location, creating parent directories.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
