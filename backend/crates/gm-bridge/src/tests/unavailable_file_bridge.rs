use crate::{FileBridge, UNAVAILABLE_MESSAGE, UnavailableFileBridge};

#[tokio::test]
async fn given_unavailable_bridge_when_any_operation_then_fails_softly() {
    let bridge = UnavailableFileBridge;

    assert!(!bridge.is_native_runtime());
    assert!(!bridge.check_permission().await);
    assert!(!bridge.request_permission().await);
    assert!(bridge.list_directory("guest").await.is_empty());
    assert!(!bridge.file_exists("guest/a.dat").await);

    let read = bridge.read_file("guest/a.dat").await;
    let write = bridge.write_file("guest/a.dat", "{}").await;
    assert!(!read.success && !write.success);
    assert_eq!(write.message, UNAVAILABLE_MESSAGE);
}
