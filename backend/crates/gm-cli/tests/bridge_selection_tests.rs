use gm_bridge::FileBridge;
use gm_cli::build_bridge;
use gm_config::{BridgeRuntime, Config, PermissionMode};

use tempfile::TempDir;

fn config_with_root(root: &TempDir, permission: PermissionMode) -> Config {
    let mut config = Config::default();
    config.bridge.root = Some(root.path().to_string_lossy().into_owned());
    config.bridge.permission = permission;
    config
}

#[tokio::test]
async fn given_unavailable_runtime_when_build_bridge_then_not_native() {
    let mut config = Config::default();
    config.bridge.runtime = BridgeRuntime::Unavailable;

    let bridge = build_bridge(&config, false, false).unwrap();

    assert!(!bridge.is_native_runtime());
}

#[tokio::test]
async fn given_browser_flag_when_build_bridge_then_not_native() {
    let root = TempDir::new().unwrap();
    let config = config_with_root(&root, PermissionMode::Granted);

    let bridge = build_bridge(&config, true, false).unwrap();

    assert!(!bridge.is_native_runtime());
}

#[tokio::test]
async fn given_granted_mode_when_build_bridge_then_permission_already_held() {
    let root = TempDir::new().unwrap();
    let config = config_with_root(&root, PermissionMode::Granted);

    let bridge = build_bridge(&config, false, false).unwrap();

    assert!(bridge.is_native_runtime());
    assert!(bridge.check_permission().await);
}

#[tokio::test]
async fn given_denied_mode_when_request_permission_then_refused() {
    let root = TempDir::new().unwrap();
    let config = config_with_root(&root, PermissionMode::Denied);

    let bridge = build_bridge(&config, false, false).unwrap();

    assert!(!bridge.request_permission().await);
    let result = bridge.write_file("guest/guest100067.dat", "{}").await;
    assert!(!result.success);
    assert_eq!(result.message, "Storage permission denied");
}

#[tokio::test]
async fn given_yes_flag_when_build_bridge_then_overrides_denied_mode() {
    let root = TempDir::new().unwrap();
    let config = config_with_root(&root, PermissionMode::Denied);

    let bridge = build_bridge(&config, false, true).unwrap();

    assert!(bridge.check_permission().await);
}
