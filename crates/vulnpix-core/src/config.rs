// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Vulnpix.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `VULNPIX_`)
//! 2. Config file: `~/.config/vulnpix/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Override the listener port via environment variable
//! VULNPIX_SERVER__PORT=9000 cargo run
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::VulnpixError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// SQLite database settings.
    pub database: DatabaseConfig,
    /// Resolver process settings.
    pub lookup: LookupConfig,
    /// Search result shaping.
    pub search: SearchConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// SQLite database settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL, e.g. `sqlite://vulnpix.db`.
    ///
    /// With `sqlite::memory:` keep `max_connections` at 1; each pooled
    /// connection opens its own empty in-memory database.
    pub url: String,
    /// Maximum pool connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://vulnpix.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Resolver process settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Program spawned for domain lookups.
    ///
    /// Tests substitute `echo` or `false` so no resolver is needed.
    pub program: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            program: "nslookup".to_string(),
        }
    }
}

/// Search result shaping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Row cap applied to the bound search paths.
    pub max_results: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 100 }
    }
}

/// Returns the Vulnpix configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/vulnpix`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("vulnpix");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("vulnpix")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `VULNPIX_` and double
/// underscore for nested keys (e.g., `VULNPIX_LOOKUP__PROGRAM`).
///
/// # Errors
///
/// Returns `VulnpixError::Config` if the config file exists but is
/// invalid.
pub fn load_config() -> Result<AppConfig, VulnpixError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("VULNPIX")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
