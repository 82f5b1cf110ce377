use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    API_URL_ENV, APP_DIR, CONFIG_FILE, DEFAULT_API_URL, SESSION_FILE, SESSION_FILE_ENV,
};
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
}

fn config_path() -> DashboardResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| DashboardError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Load the config file, falling back to defaults when it is missing or unreadable.
pub fn load_config() -> Config {
    let Ok(config_path) = config_path() else {
        return Config::default();
    };

    fs::read_to_string(&config_path)
        .ok()
        .and_then(|config_str| serde_json::from_str(&config_str).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> DashboardResult<()> {
    let config_path = config_path()?;
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;
    Ok(())
}

/// Base URL of the REST API: environment first, then config file, then the default.
pub fn api_url() -> String {
    if let Ok(url) = env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    load_config()
        .api_url
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Where the persisted session lives.
pub fn session_file_path() -> DashboardResult<PathBuf> {
    if let Ok(path) = env::var(SESSION_FILE_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| DashboardError::ConfigError("Could not find config directory".to_string()))?;
    Ok(config_dir.join(APP_DIR).join(SESSION_FILE))
}
