//! Configuration types for the farm dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Where the farm server lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Polling behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_refresh_interval", with = "humantime_serde")]
    pub refresh_interval: Duration,
    /// Initial page size; raised to the minimum of 10 on startup
    #[serde(default = "default_rows")]
    pub rows: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            refresh_interval: default_refresh_interval(),
            rows: default_rows(),
        }
    }
}

/// Operator console HTTP surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_console_port")]
    pub port: u16,
    #[serde(default = "default_notice_history")]
    pub notice_history: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: default_console_port(),
            notice_history: default_notice_history(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:6969".to_string()
}

fn default_refresh_interval() -> Duration {
    Duration::from_secs(5)
}

fn default_rows() -> u64 {
    crate::pagination::MIN_ROWS
}

fn default_true() -> bool {
    true
}

fn default_console_port() -> u16 {
    11120
}

fn default_notice_history() -> usize {
    50
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::DashboardError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
