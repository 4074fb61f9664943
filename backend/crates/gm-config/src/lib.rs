mod bridge_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use bridge_config::{BridgeConfig, BridgeRuntime, PermissionMode};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "GM_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".gm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "data";
const DEFAULT_STORAGE_KEY: &str = "r1_guest_accounts";

const DEFAULT_GUEST_DIR: &str = "guest";
const DEFAULT_GUEST_FILE: &str = "guest/guest100067.dat";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
