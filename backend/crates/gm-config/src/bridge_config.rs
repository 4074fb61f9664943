use crate::{ConfigError, ConfigErrorResult, DEFAULT_GUEST_DIR, DEFAULT_GUEST_FILE};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Whether direct file access is available in this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeRuntime {
    #[default]
    Native,
    Unavailable,
}

/// How storage permission requests are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionMode {
    /// Ask interactively
    #[default]
    Prompt,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub runtime: BridgeRuntime,
    /// Shared storage root; the home directory when unset
    pub root: Option<String>,
    /// Guest directory, relative to `root`
    pub guest_dir: String,
    /// Default inject target, relative to `root`
    pub guest_file: String,
    pub permission: PermissionMode,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            runtime: BridgeRuntime::default(),
            root: None,
            guest_dir: String::from(DEFAULT_GUEST_DIR),
            guest_file: String::from(DEFAULT_GUEST_FILE),
            permission: PermissionMode::default(),
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        crate::config::require_relative("bridge.guest_dir", &self.guest_dir)?;
        crate::config::require_relative("bridge.guest_file", &self.guest_file)?;

        if let Some(root) = &self.root
            && root.trim().is_empty()
        {
            return Err(ConfigError::bridge("bridge.root must not be blank"));
        }

        Ok(())
    }
}

impl FromStr for BridgeRuntime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "unavailable" | "browser" => Ok(Self::Unavailable),
            other => Err(ConfigError::bridge(format!("unknown runtime '{other}'"))),
        }
    }
}

impl fmt::Display for BridgeRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

impl FromStr for PermissionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            other => Err(ConfigError::bridge(format!(
                "unknown permission mode '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt => write!(f, "prompt"),
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}
