use crate::Action;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("{action} is already in progress {location}")]
    Busy {
        action: Action,
        location: ErrorLocation,
    },

    #[error("No account with id '{id}' {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("An account with id '{id}' already exists {location}")]
    DuplicateId { id: String, location: ErrorLocation },

    #[error(transparent)]
    Core(#[from] gm_core::CoreError),
}

impl ControllerError {
    /// Creates Busy error at caller location.
    #[track_caller]
    pub fn busy(action: Action) -> Self {
        Self::Busy {
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DuplicateId error at caller location.
    #[track_caller]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ControllerError>;
