//! Configuration module for vitrine
//!
//! Stores the default inventory location and display preferences in the
//! user's config directory. Command-line flags override these values.

mod setup;

pub use setup::first_time_setup;

use crate::sync::SessionOptions;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Output format for the `search` command
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Card grid for humans
    #[default]
    Text,
    /// JSON array of items
    Json,
    /// CSV with one row per item
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_columns() -> u16 {
    3
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VitrineConfig {
    /// Inventory path or URL used when `--inventory` is not given
    #[serde(default)]
    pub inventory: Option<String>,

    /// Quiet period before text fields trigger a run
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Cards per row in the browser and the printed grid
    #[serde(default = "default_columns")]
    pub columns: u16,

    /// Default output format for `search`
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            inventory: None,
            debounce_ms: default_debounce_ms(),
            quiet: false,
            columns: default_columns(),
            output: OutputFormat::default(),
        }
    }
}

impl VitrineConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("vitrine").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on directory, serialization or write failures.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Set the default inventory location and save
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the value is blank or saving fails.
    pub fn set_inventory(&mut self, location: &str) -> Result<(), ConfigError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ConfigError::Message(
                "Inventory location cannot be empty".to_string(),
            ));
        }
        self.inventory = Some(location.to_string());
        self.save()
    }

    /// Debounce window as a duration
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Session tunables derived from this configuration
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            debounce: self.debounce(),
        }
    }
}
