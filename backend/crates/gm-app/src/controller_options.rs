use crate::copy_flag::DEFAULT_COPIED_DURATION;

use gm_config::{BridgeConfig, Config};

use std::time::Duration;

/// Runtime settings for [`AppController`](crate::AppController).
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Directory listed for available guest files
    pub guest_dir: String,
    /// Initial inject/read target
    pub guest_file_path: String,
    pub copied_duration: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&BridgeConfig::default())
    }
}

impl From<&BridgeConfig> for ControllerOptions {
    fn from(bridge: &BridgeConfig) -> Self {
        Self {
            guest_dir: bridge.guest_dir.clone(),
            guest_file_path: bridge.guest_file.clone(),
            copied_duration: DEFAULT_COPIED_DURATION,
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self::from(&config.bridge)
    }
}
