//! Guest account entity - one stored credential entry.

use crate::{CoreError, Result as CoreResult, generate_id};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A guest login for the target game, plus optional local metadata.
///
/// Only `uid` and `password` ever leave the device (see
/// [`encode`](crate::encode)); everything else is local bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestAccount {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    pub uid: String,
    pub password: String,
    /// Epoch milliseconds, set once at creation
    pub created_at: i64,
}

impl GuestAccount {
    /// Create a new account with a fresh id and the current time.
    ///
    /// Blank optional fields are stored as `None`.
    pub fn new(
        uid: impl Into<String>,
        password: impl Into<String>,
        name: Option<String>,
        game_id: Option<String>,
    ) -> Self {
        Self::with_created_at(uid, password, name, game_id, Utc::now().timestamp_millis())
    }

    pub(crate) fn with_created_at(
        uid: impl Into<String>,
        password: impl Into<String>,
        name: Option<String>,
        game_id: Option<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: generate_id(),
            name: non_blank(name),
            game_id: non_blank(game_id),
            uid: uid.into(),
            password: password.into(),
            created_at,
        }
    }

    /// Reject records that cannot be persisted.
    pub fn validate(&self) -> CoreResult<()> {
        if self.uid.trim().is_empty() {
            return Err(CoreError::validation("uid must not be empty"));
        }
        if self.password.trim().is_empty() {
            return Err(CoreError::validation("password must not be empty"));
        }
        Ok(())
    }

    /// Label shown for the account: the name when present, else the uid.
    pub fn display_label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.uid)
    }
}

impl PartialEq for GuestAccount {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GuestAccount {}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
