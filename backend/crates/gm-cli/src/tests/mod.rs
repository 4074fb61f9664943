mod cli;

use gm_app::{AppController, ControllerOptions};
use gm_bridge::{FileBridge, NativeFileBridge, StaticPermission, UnavailableFileBridge};
use gm_store::{AccountStore, MemoryKeyValueStore};

use std::path::Path;
use std::sync::Arc;

pub(crate) const PASTE: &str = "👤 Alpha : 🆔️ 111\n100:pw1\n👤 Bravo : 🆔 222\n200:pw2\n";

pub(crate) async fn controller(bridge: Arc<dyn FileBridge>) -> AppController {
    let store = AccountStore::new(Arc::new(MemoryKeyValueStore::new()), "r1_guest_accounts");
    AppController::initialize(store, bridge, ControllerOptions::default()).await
}

pub(crate) async fn browser_controller() -> AppController {
    controller(Arc::new(UnavailableFileBridge)).await
}

pub(crate) async fn native_controller(root: &Path) -> AppController {
    let bridge = NativeFileBridge::new(root, Arc::new(StaticPermission::granted()));
    controller(Arc::new(bridge)).await
}
