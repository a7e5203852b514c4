// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Time Space GUI config
//!

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time_space_client::DEFAULT_API_BASE_URL;
use time_space_core::{Limit, Location, MAX_EVENT_LIMIT};

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "TimeSpace";
const APPLICATION_NAME: &str = "TimeSpace";
const CONFIG_FILE_NAME: &str = "config.json";

/// Overrides [`Config::api_base_url`]
const ENV_API_BASE_URL: &str = "TIME_SPACE_API_BASE_URL";

/// Overrides [`Config::mapbox_access_token`]
const ENV_MAPBOX_ACCESS_TOKEN: &str = "MAPBOX_ACCESS_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No home directory found to keep the config in")]
    NoProjectDirs,

    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The event limit must be between 1 and {MAX_EVENT_LIMIT} (got {0})")]
    EventLimit(u32),
}

/// The config that's saved to disk.  Missing fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the web API is served
    api_base_url: String,

    /// Without one, place search returns nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    mapbox_access_token: Option<String>,

    /// Shown when the app starts
    initial_location: Location,

    /// Number of events fetched per timeline
    event_limit: Limit,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            mapbox_access_token: None,
            initial_location: Location::new("Seattle", 47.6062, -122.3321)
                .with_region(Some("Washington".to_string()))
                .with_country(Some("United States".to_string())),
            event_limit: Limit::default(),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory (creating it with
    /// defaults first if need be) and apply any environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path()?;
        Self::ensure_setup_at(&path)?;
        let config = Self::load_from(&path)?;
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {path:?}");
        let json = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        if !config.event_limit.is_valid() {
            return Err(ConfigError::EventLimit(config.event_limit.0));
        }
        debug!("Config loaded = {config:?}");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        info!("Saving config to {path:?}");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write the default config to `path` unless there is already one there
    pub fn ensure_setup_at(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            info!("No config file found, creating one");
            Config::default().save_to(path)?;
        }
        Ok(())
    }

    /// Replace values with those of any environment variables set (and not
    /// blank).  `lookup` gets a variable by name.
    pub fn with_env_overrides<F: Fn(&str) -> Option<String>>(mut self, lookup: F) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(api_base_url) = get(ENV_API_BASE_URL) {
            info!("Using the web API at {api_base_url} (from {ENV_API_BASE_URL})");
            self.api_base_url = api_base_url;
        }
        if let Some(token) = get(ENV_MAPBOX_ACCESS_TOKEN) {
            self.mapbox_access_token = Some(token);
        }
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn mapbox_access_token(&self) -> Option<&str> {
        self.mapbox_access_token.as_deref()
    }

    pub fn initial_location(&self) -> &Location {
        &self.initial_location
    }

    pub fn event_limit(&self) -> Limit {
        self.event_limit
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(ConfigError::NoProjectDirs)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .ok_or(ConfigError::NoProjectDirs)
}

/// Get the path to the config
fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}
