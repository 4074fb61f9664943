use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Internal failures, flattened into [`FileOperationResult`](crate::FileOperationResult)
/// messages before they leave the bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Path '{path}' must be relative to the storage root {location}")]
    PathRejected {
        path: String,
        location: ErrorLocation,
    },

    #[error("Failed to access {}: {source} {location}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl BridgeError {
    /// Creates PathRejected error at caller location.
    #[track_caller]
    pub fn path_rejected(path: impl Into<String>) -> Self {
        Self::PathRejected {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Io error at caller location.
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message shown to the user; drops the source location.
    pub fn user_message(&self) -> String {
        match self {
            Self::PathRejected { path, .. } => {
                format!("Path '{path}' must be relative to the storage root")
            }
            Self::Io { path, source, .. } => format!("{}: {source}", path.display()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
