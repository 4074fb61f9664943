use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_KEY};

use serde::Deserialize;

/// Where the account list is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory, relative to the config directory
    pub dir: String,
    /// Slot name; the list lives in `<dir>/<key>.json`
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        crate::config::require_relative("storage.dir", &self.dir)?;

        if self.key.is_empty() {
            return Err(ConfigError::storage("storage.key must not be empty"));
        }
        if !self
            .key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::storage(format!(
                "storage.key '{}' may only contain letters, digits, '_' and '-'",
                self.key
            )));
        }

        Ok(())
    }
}
