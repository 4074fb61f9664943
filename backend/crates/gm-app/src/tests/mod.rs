
use crate::{AppController, ControllerOptions};

use gm_bridge::{FileBridge, FileOperationResult};
use gm_core::GuestAccount;
use gm_store::{AccountStore, KeyValueStore, MemoryKeyValueStore, StoreError, StoreResult};

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

pub(crate) const TEST_KEY: &str = "r1_guest_accounts";

pub(crate) fn account(uid: &str, name: Option<&str>, game_id: Option<&str>) -> GuestAccount {
    GuestAccount::new(
        uid,
        format!("pw-{uid}"),
        name.map(str::to_string),
        game_id.map(str::to_string),
    )
}

/// Store over a shared memory slot so tests can reload what was persisted.
pub(crate) fn memory_store() -> (Arc<MemoryKeyValueStore>, AccountStore) {
    let slots = Arc::new(MemoryKeyValueStore::new());
    let store = AccountStore::new(slots.clone(), TEST_KEY);
    (slots, store)
}

pub(crate) async fn reload(slots: &Arc<MemoryKeyValueStore>) -> Vec<GuestAccount> {
    AccountStore::new(slots.clone(), TEST_KEY).load().await
}

pub(crate) async fn controller_with(bridge: Arc<dyn FileBridge>) -> AppController {
    let (_slots, store) = memory_store();
    AppController::initialize(store, bridge, ControllerOptions::default()).await
}

/// Slot store whose writes always fail.
pub(crate) struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::file_write(
            PathBuf::from(format!("{key}.json")),
            std::io::Error::other("read-only"),
        ))
    }
}

/// In-memory bridge that records writes; `hold_writes` parks each write
/// until `release` is called.
pub(crate) struct FakeBridge {
    pub(crate) granted: bool,
    pub(crate) files: Vec<String>,
    pub(crate) writes: Mutex<Vec<(String, String)>>,
    pub(crate) requests: AtomicUsize,
    hold_writes: bool,
    gate: Notify,
}

impl FakeBridge {
    pub(crate) fn new(granted: bool) -> Self {
        Self {
            granted,
            files: vec!["guest100067.dat".to_string()],
            writes: Mutex::new(Vec::new()),
            requests: AtomicUsize::new(0),
            hold_writes: false,
            gate: Notify::new(),
        }
    }

    pub(crate) fn holding_writes() -> Self {
        Self {
            hold_writes: true,
            ..Self::new(true)
        }
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) fn written(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileBridge for FakeBridge {
    fn is_native_runtime(&self) -> bool {
        true
    }

    async fn check_permission(&self) -> bool {
        self.granted
    }

    async fn request_permission(&self) -> bool {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.granted
    }

    async fn list_directory(&self, _path: &str) -> Vec<String> {
        if self.granted {
            self.files.clone()
        } else {
            Vec::new()
        }
    }

    async fn read_file(&self, path: &str) -> FileOperationResult {
        let written = self.written();
        match written.iter().rev().find(|(p, _)| p == path) {
            Some((_, content)) => {
                FileOperationResult::ok_with_data("File read successfully", content.clone())
            }
            None => FileOperationResult::failure(format!("Failed to read file: {path}")),
        }
    }

    async fn write_file(&self, path: &str, content: &str) -> FileOperationResult {
        if self.hold_writes {
            self.gate.notified().await;
        }
        if !self.granted {
            return FileOperationResult::failure("Storage permission denied");
        }
        self.writes
            .lock()
            .unwrap()
            .push((path.to_string(), content.to_string()));
        FileOperationResult::ok("File written successfully")
    }

    async fn file_exists(&self, path: &str) -> bool {
        self.written().iter().any(|(p, _)| p == path)
    }
}
