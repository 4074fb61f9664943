//! Direct file access to the shared guest directory.
//!
//! Only available when running natively; elsewhere the
//! [`UnavailableFileBridge`] answers every call with a failure. No operation
//! here returns an error to the caller: failures come back as a
//! [`FileOperationResult`] with `success == false` and a readable message.

mod error;
mod file_bridge;
mod file_operation_result;
mod native_file_bridge;
mod permission;
mod unavailable_file_bridge;

#[cfg(test)]
mod tests;

pub use error::{BridgeError, Result as BridgeResult};
pub use file_bridge::FileBridge;
pub use file_operation_result::FileOperationResult;
pub use native_file_bridge::NativeFileBridge;
pub use permission::{PermissionPrompt, StaticPermission};
pub use unavailable_file_bridge::UnavailableFileBridge;

pub const PERMISSION_DENIED_MESSAGE: &str = "Storage permission denied";
pub const UNAVAILABLE_MESSAGE: &str = "Native file access not available";
