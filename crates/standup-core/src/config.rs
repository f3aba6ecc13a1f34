//! Standup configuration system.
//!
//! TOML file at `~/.standup/config.toml`. Every field has a default so
//! an empty (or missing) file yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandupConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub messages: MessageConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

impl StandupConfig {
    /// Load config from the default path (~/.standup/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::StandupError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::StandupError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::StandupError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the standup home directory (~/.standup).
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".standup")
    }
}

/// Scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// How many minutes before a standup the warning fires.
    #[serde(default = "default_warning_minutes")]
    pub warning_minutes: u32,
    /// Directory holding the persisted standup list.
    #[serde(default = "default_store_dir")]
    pub store_dir: String,
}

fn default_warning_minutes() -> u32 {
    10
}

fn default_store_dir() -> String {
    StandupConfig::home_dir()
        .join("store")
        .to_string_lossy()
        .into_owned()
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            warning_minutes: default_warning_minutes(),
            store_dir: default_store_dir(),
        }
    }
}

/// Message set configuration. Empty lists mean "use the built-in set".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Messages announcing the standup itself.
    #[serde(default)]
    pub main: Vec<String>,
    /// Messages fired `warning_minutes` ahead of the standup.
    #[serde(default)]
    pub warning: Vec<String>,
    /// Optional link (e.g. a video call URL) appended to main messages.
    #[serde(default)]
    pub link: Option<String>,
}

/// Delivery channel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Outbound webhook delivery. When absent, `standup run` logs to
    /// the console instead.
    #[serde(default)]
    pub webhook: Option<WebhookConfig>,
}

/// Generic outbound webhook — POST with a JSON `{room, text}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    /// Optional auth header, e.g. ("Authorization", "Bearer xyz").
    #[serde(default)]
    pub auth_header: Option<String>,
    #[serde(default)]
    pub auth_value: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}
