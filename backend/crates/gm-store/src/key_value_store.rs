use crate::StoreResult;

use async_trait::async_trait;

/// A flat string slot store, the persistence port behind [`AccountStore`](crate::AccountStore).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when the slot has never been written.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the whole slot.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
