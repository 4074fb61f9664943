#![allow(dead_code)]

use gm_core::GuestAccount;
use gm_store::{AccountStore, FileKeyValueStore, MemoryKeyValueStore};

use std::sync::Arc;

use tempfile::TempDir;

pub const TEST_KEY: &str = "r1_guest_accounts";

/// Creates a test GuestAccount with every field populated
pub fn create_test_account(uid: &str) -> GuestAccount {
    GuestAccount::new(
        uid,
        format!("pw-{uid}"),
        Some(format!("Player {uid}")),
        Some("100067".to_string()),
    )
}

/// Store backed by a fresh temp directory; keep the TempDir alive for the test
pub fn create_file_store() -> (TempDir, FileKeyValueStore, AccountStore) {
    let temp = TempDir::new().unwrap();
    let slots = FileKeyValueStore::new(temp.path().join("data"));
    let store = AccountStore::new(Arc::new(slots.clone()), TEST_KEY);
    (temp, slots, store)
}

pub fn create_memory_store() -> AccountStore {
    AccountStore::new(Arc::new(MemoryKeyValueStore::new()), TEST_KEY)
}

/// Field-wise comparison; `PartialEq` on accounts only looks at ids
pub fn assert_same_accounts(actual: &[GuestAccount], expected: &[GuestAccount]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a.id, e.id);
        assert_eq!(a.uid, e.uid);
        assert_eq!(a.password, e.password);
        assert_eq!(a.name, e.name);
        assert_eq!(a.game_id, e.game_id);
        assert_eq!(a.created_at, e.created_at);
    }
}
