//! Configuration management for the terminal host.

use shelf_engine::Settings;
use std::env;
use std::path::PathBuf;

/// Host configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file backing the key-value store
    pub data_file: PathBuf,
    /// Key the list blob is stored under
    pub storage_key: String,
    /// How long notices stay on screen
    pub notice_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let data_file = lookup("SHELF_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("shelf.json"));

        let storage_key = lookup("SHELF_STORAGE_KEY").unwrap_or(defaults.storage_key);
        if storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }

        let notice_delay_ms = match lookup("SHELF_NOTICE_MS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidNoticeDelay(raw))?,
            None => defaults.notice_delay_ms,
        };

        Ok(Self {
            data_file,
            storage_key,
            notice_delay_ms,
        })
    }

    /// Engine settings derived from this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            storage_key: self.storage_key.clone(),
            notice_delay_ms: self.notice_delay_ms,
            ..Settings::default()
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SHELF_STORAGE_KEY must not be empty")]
    EmptyStorageKey,

    #[error("Invalid SHELF_NOTICE_MS value: {0}")]
    InvalidNoticeDelay(String),
}
