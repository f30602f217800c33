// Configuration module for toastkit
// This module handles loading and parsing configuration from ~/.config/toastkit/config.toml

mod types;

pub use types::{Config, ToastConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ToastError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/toastkit/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path with the same fallback rules
/// as [`load_config`]
pub fn load_config_from(path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", path);

    // If file doesn't exist, return defaults silently
    if !path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::error!("Failed to load config file {:?}: {}", path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Reads and parses a config file without any fallback
pub fn read_config(path: &Path) -> Result<Config, ToastError> {
    let contents = fs::read_to_string(path).map_err(|source| ToastError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Config file read successfully, {} bytes", contents.len());
    Ok(toml::from_str::<Config>(&contents)?)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/toastkit/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("toastkit")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
