use crate::{
    BridgeConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRNAME, LoggingConfig, StorageConfig,
};

use std::path::{Component, Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
    /// Directory this config was loaded from; relative paths resolve here
    #[serde(skip)]
    pub dir: PathBuf,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for GM_CONFIG_DIR env var, else use ./.gm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Load config from an explicit directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.dir = config_dir.to_path_buf();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GM_CONFIG_DIR env var > ./.gm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.bridge.validate()?;

        if let Some(file) = &self.logging.file {
            require_relative("logging.file", file)?;
        }

        Ok(())
    }

    /// Absolute path of the data directory holding the account slot.
    pub fn storage_dir(&self) -> PathBuf {
        self.dir.join(&self.storage.dir)
    }

    /// Root of the shared storage area seen by the file bridge.
    pub fn bridge_root(&self) -> ConfigErrorResult<PathBuf> {
        match &self.bridge.root {
            Some(root) => Ok(PathBuf::from(root)),
            None => dirs::home_dir().ok_or(ConfigError::NoHomeDir),
        }
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging.file.as_ref().map(|file| self.dir.join(file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.dir.display());
        info!(
            "  storage: {} (key {})",
            self.storage_dir().display(),
            self.storage.key
        );
        info!(
            "  bridge: {} (root {}, target {}, permission {})",
            self.bridge.runtime,
            self.bridge.root.as_deref().unwrap_or("<home>"),
            self.bridge.guest_file,
            self.bridge.permission
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("GM_STORAGE_DIR", &mut self.storage.dir);
        Self::apply_env_string("GM_STORAGE_KEY", &mut self.storage.key);

        // Bridge
        Self::apply_env_parse("GM_BRIDGE_RUNTIME", &mut self.bridge.runtime);
        Self::apply_env_option_string("GM_BRIDGE_ROOT", &mut self.bridge.root);
        Self::apply_env_string("GM_GUEST_DIR", &mut self.bridge.guest_dir);
        Self::apply_env_string("GM_GUEST_FILE", &mut self.bridge.guest_file);
        Self::apply_env_parse("GM_PERMISSION", &mut self.bridge.permission);

        // Logging
        Self::apply_env_parse("GM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

/// Paths in the config must stay inside their base directory.
pub(crate) fn require_relative(field: &str, value: &str) -> ConfigErrorResult<()> {
    let path = Path::new(value);

    if value.trim().is_empty() {
        return Err(ConfigError::config(format!("{field} must not be empty")));
    }
    if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
        return Err(ConfigError::config(format!(
            "{field} must be relative and cannot contain '..'"
        )));
    }

    Ok(())
}
