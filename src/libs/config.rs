//! Configuration management for payr.
//!
//! Settings live in a JSON file in the platform application data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\hrkit\payr\config.json`
//! - **macOS**: `~/Library/Application Support/hrkit/payr/config.json`
//! - **Linux**: `~/.local/share/hrkit/payr/config.json`
//!
//! The file records the default storage mode and the paths backing the file
//! and database stores. Every setting is optional; a missing file yields the
//! defaults, and `payr init` runs an interactive wizard to fill them in.

use super::data_storage::DataStorage;
use super::error::StorageError;
use super::messages::Message;
use super::storage::StorageMode;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default flat-file name used when no path is configured.
pub const DATA_FILE_NAME: &str = "payroll.csv";

/// Relational store settings. The address is the database file path; an
/// embedded database has no credentials.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub address: PathBuf,
}

/// Flat-file store settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FileConfig {
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Backend used when a command gives no `--mode` override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<StorageMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup: pick a default storage mode and the backing paths,
    /// pre-filling current values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigIntro);

        let modes = [StorageMode::Memory, StorageMode::File, StorageMode::Database];
        let current = modes.iter().position(|m| Some(*m) == config.mode).unwrap_or(2);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageMode.to_string())
            .items(&modes.map(|m| m.as_str()))
            .default(current)
            .interact()?;
        config.mode = Some(modes[selection]);

        let default_file = config
            .file
            .as_ref()
            .map(|f| f.path.display().to_string())
            .unwrap_or_else(|| DATA_FILE_NAME.to_string());
        let file_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFilePath.to_string())
            .default(default_file)
            .interact_text()?;
        config.file = Some(FileConfig { path: PathBuf::from(file_path) });

        let default_address = config
            .database
            .as_ref()
            .map(|d| d.address.display().to_string())
            .unwrap_or_else(|| crate::db::db::DB_FILE_NAME.to_string());
        let address: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseAddress.to_string())
            .default(default_address)
            .interact_text()?;
        config.database = Some(DatabaseConfig { address: PathBuf::from(address) });

        Ok(config)
    }

    pub fn database_address(&self) -> Option<&Path> {
        self.database.as_ref().map(|d| d.address.as_path())
    }

    /// Configured flat-file path, or the default inside the data directory.
    pub fn file_path(&self) -> Result<PathBuf, StorageError> {
        match &self.file {
            Some(file) => Ok(file.path.clone()),
            None => Ok(DataStorage::new().get_path(DATA_FILE_NAME)?),
        }
    }
}
