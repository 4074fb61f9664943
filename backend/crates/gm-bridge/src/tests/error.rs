use crate::BridgeError;

use std::path::PathBuf;

#[test]
fn given_io_failure_when_created_then_records_caller_location() {
    let err = BridgeError::io(
        PathBuf::from("guest/guest100067.dat"),
        std::io::Error::other("disk full"),
    );

    match err {
        BridgeError::Io { location, .. } => {
            assert!(location.file.ends_with("error.rs"));
            assert!(location.line > 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_io_failure_when_user_message_then_location_omitted() {
    let err = BridgeError::io(
        PathBuf::from("guest/guest100067.dat"),
        std::io::Error::other("disk full"),
    );

    assert_eq!(err.user_message(), "guest/guest100067.dat: disk full");
    assert!(err.to_string().contains("disk full ["));
}

#[test]
fn given_absolute_path_when_rejected_then_user_message_names_path() {
    let err = BridgeError::path_rejected("/etc/passwd");

    assert_eq!(
        err.user_message(),
        "Path '/etc/passwd' must be relative to the storage root"
    );
}
