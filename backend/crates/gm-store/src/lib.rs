//! Local persistence for the guest account list.
//!
//! The whole list lives in a single key-value slot and is replaced on every
//! save. Loading never fails: a missing or unreadable slot is an empty list.

mod account_store;
mod error;
mod file_key_value_store;
mod key_value_store;
mod load_result;
mod memory_key_value_store;


pub use account_store::AccountStore;
pub use error::{Result as StoreResult, StoreError};
pub use file_key_value_store::FileKeyValueStore;
pub use key_value_store::KeyValueStore;
pub use load_result::LoadResult;
pub use memory_key_value_store::MemoryKeyValueStore;
