use crate::FileOperationResult;

use async_trait::async_trait;

/// Capability surface the controller depends on.
///
/// Paths are relative to the bridge's storage root.
#[async_trait]
pub trait FileBridge: Send + Sync {
    /// Whether direct file access is possible at all.
    fn is_native_runtime(&self) -> bool;

    async fn check_permission(&self) -> bool;

    /// May prompt the user; resolves once they answer.
    async fn request_permission(&self) -> bool;

    /// Entry names in `path`, sorted. Empty on any failure.
    async fn list_directory(&self, path: &str) -> Vec<String>;

    async fn read_file(&self, path: &str) -> FileOperationResult;

    /// Creates the parent directory when missing.
    async fn write_file(&self, path: &str, content: &str) -> FileOperationResult;

    async fn file_exists(&self, path: &str) -> bool;
}
