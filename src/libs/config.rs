//! Application configuration.
//!
//! Settings live in `config.json` inside the data directory resolved by
//! [`DataStorage`]. A missing file is not an error: [`Config::read`] falls back
//! to [`Config::default`], so taskbox works without any setup.
//!
//! ```rust,no_run
//! use taskbox::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.date_format = "%d.%m.%Y".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::db::db::DB_FILE_NAME;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// `chrono` format used when printing due dates, e.g. "May 01, 2024".
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Explicit database file. When unset the database lives next to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Display format for due dates in tables.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: None,
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, or returns the defaults when no file exists.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    /// Writes the configuration to the default data directory.
    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(&DataStorage::new())
    }

    /// Writes the configuration as pretty JSON and returns the file path.
    pub fn save_to(&self, storage: &DataStorage) -> Result<PathBuf> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    /// Interactive wizard starting from the current configuration.
    pub fn init() -> Result<Config> {
        let current = Config::read()?;

        let date_format: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(current.date_format.clone())
            .interact_text()?;

        let database_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(
                current
                    .database_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            database_path: match database_path.trim() {
                "" => None,
                path => Some(PathBuf::from(path)),
            },
            date_format,
        })
    }

    /// Database file this configuration points at.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => storage.get_path(DB_FILE_NAME),
        }
    }
}
