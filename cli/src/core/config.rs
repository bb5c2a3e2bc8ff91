//! # Leadbox Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the Leadbox configuration.
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the commands after loading)
//! 2. Project-specific `leadbox.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/leadbox/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! enable_cors = true
//!
//! [storage]
//! data_dir = "~/leadbox-data"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(cli.data_dir)?;
//! let store = SiteStore::open(&cfg.storage)?;
//! ```
//!
use crate::core::error::{LeadboxError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Settings for `leadbox serve`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    /// Interface to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Send permissive CORS headers so the site frontend can live on another origin.
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

/// Where the record tables live. Handed to `SiteStore::open`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding one CSV table per record type (can use ~). Will be expanded.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
fn default_port() -> u16 {
    5000
}
fn default_enable_cors() -> bool {
    true
}
fn default_data_dir() -> String {
    "excel-data".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

impl Config {
    /// Applies a `--data-dir` / `LEADBOX_DATA_DIR` override on top of the loaded files.
    fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            debug!("Data directory overridden to {}", dir.display());
            self.storage.data_dir = dir.to_string_lossy().into_owned();
        }
        self
    }
}

const PROJECT_CONFIG_FILENAME: &str = "leadbox.toml";

/// Loads and merges the configuration files, then applies `data_dir_override`
/// (from `--data-dir` or `LEADBOX_DATA_DIR`) before paths are expanded and
/// the result validated.
pub fn load_config(data_dir_override: Option<PathBuf>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    let config = finalize_config(merged_config, data_dir_override)?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn finalize_config(config: Config, data_dir_override: Option<PathBuf>) -> Result<Config> {
    let mut config = config.with_data_dir(data_dir_override);
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Leadbox", "leadbox") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (leadbox.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => return Ok(None),
        }
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win over user values wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = Config::default();
    Config {
        server: ServerSettings {
            host: prefer(project.server.host, user.server.host, defaults.server.host),
            port: prefer(project.server.port, user.server.port, defaults.server.port),
            enable_cors: prefer(
                project.server.enable_cors,
                user.server.enable_cors,
                defaults.server.enable_cors,
            ),
        },
        storage: StorageConfig {
            data_dir: prefer(
                project.storage.data_dir,
                user.storage.data_dir,
                defaults.storage.data_dir,
            ),
        },
    }
}

fn prefer<T: PartialEq>(project: T, user: T, default: T) -> T {
    if project != default {
        project
    } else {
        user
    }
}

fn expand_config_paths(config: &mut Config) {
    config.storage.data_dir = shellexpand::tilde(&config.storage.data_dir).into_owned();
    debug!("Expanded data directory: {}", config.storage.data_dir);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        return Err(anyhow!(LeadboxError::Config(
            "server.port must be between 1 and 65535.".to_string()
        )));
    }
    if config.storage.data_dir.trim().is_empty() {
        return Err(anyhow!(LeadboxError::Config(
            "storage.data_dir cannot be empty.".to_string()
        )));
    }
    let data_dir = config.storage.data_dir();
    if data_dir.exists() && !data_dir.is_dir() {
        return Err(anyhow!(LeadboxError::Config(format!(
            "Configured data directory '{}' exists but is not a directory.",
            data_dir.display()
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
