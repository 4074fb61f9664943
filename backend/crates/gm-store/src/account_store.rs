use crate::{KeyValueStore, LoadResult, StoreResult};

use gm_core::GuestAccount;

use std::sync::Arc;

use log::{debug, info, warn};

/// Persists the full account list into one key-value slot.
#[derive(Clone)]
pub struct AccountStore {
    slots: Arc<dyn KeyValueStore>,
    key: String,
}

impl AccountStore {
    pub fn new(slots: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    /// Load the stored list. Any failure yields an empty list.
    pub async fn load(&self) -> Vec<GuestAccount> {
        self.load_detailed().await.accounts
    }

    /// Load the stored list, keeping the reason when it could not be read.
    ///
    /// Returns:
    /// - accounts, no error - loaded successfully (possibly empty)
    /// - empty, no error - slot never written (first launch)
    /// - empty, error - slot unreadable or corrupted
    pub async fn load_detailed(&self) -> LoadResult {
        let contents = match self.slots.get(&self.key).await {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                info!("No stored accounts under '{}' (first launch)", self.key);
                return LoadResult::default();
            }
            Err(e) => {
                warn!("Failed to read stored accounts: {e}");
                return LoadResult {
                    accounts: Vec::new(),
                    corruption_error: Some(e.to_string()),
                };
            }
        };

        match serde_json::from_str::<Vec<GuestAccount>>(&contents) {
            Ok(accounts) => {
                info!("Loaded {} account(s)", accounts.len());
                LoadResult {
                    accounts,
                    corruption_error: None,
                }
            }
            Err(e) => {
                warn!("Stored accounts under '{}' corrupted: {e}", self.key);
                LoadResult {
                    accounts: Vec::new(),
                    corruption_error: Some(e.to_string()),
                }
            }
        }
    }

    /// Overwrite the slot with the whole list. Last writer wins.
    pub async fn save(&self, accounts: &[GuestAccount]) -> StoreResult<()> {
        let json = serde_json::to_string(accounts)?;
        self.slots.set(&self.key, &json).await?;
        debug!("Saved {} account(s)", accounts.len());
        Ok(())
    }

    /// Fresh identifier for a new record.
    pub fn generate_id() -> String {
        gm_core::generate_id()
    }
}
