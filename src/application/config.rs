// src/application/config.rs
//
// Resolved runtime configuration.
// Sources (CLI flags, environment) are merged by the binary before this point.

use std::path::PathBuf;

use crate::db::get_database_path;
use crate::error::{AppError, AppResult};
use crate::integrations::DEFAULT_FILMS_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Films listing endpoint
    pub api_url: String,
    /// Directory holding the favorites database
    pub data_dir: PathBuf,
    /// Keep favorites in memory only
    pub ephemeral: bool,
}

impl AppConfig {
    /// Build a config, falling back to the platform data directory
    pub fn new(
        api_url: Option<String>,
        data_dir: Option<PathBuf>,
        ephemeral: bool,
    ) -> AppResult<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        Ok(Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_FILMS_URL.to_string()),
            data_dir,
            ephemeral,
        })
    }

    /// {APP_DATA}/filmhub
    pub fn default_data_dir() -> AppResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("filmhub"))
            .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))
    }

    /// Database file, creating the data directory if needed
    pub fn database_path(&self) -> AppResult<PathBuf> {
        get_database_path(&self.data_dir)
    }
}
