use crate::{FileBridge, FileOperationResult, UNAVAILABLE_MESSAGE};

use async_trait::async_trait;

/// Stand-in used when there is no native file access.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableFileBridge;

#[async_trait]
impl FileBridge for UnavailableFileBridge {
    fn is_native_runtime(&self) -> bool {
        false
    }

    async fn check_permission(&self) -> bool {
        false
    }

    async fn request_permission(&self) -> bool {
        false
    }

    async fn list_directory(&self, _path: &str) -> Vec<String> {
        Vec::new()
    }

    async fn read_file(&self, _path: &str) -> FileOperationResult {
        FileOperationResult::failure(UNAVAILABLE_MESSAGE)
    }

    async fn write_file(&self, _path: &str, _content: &str) -> FileOperationResult {
        FileOperationResult::failure(UNAVAILABLE_MESSAGE)
    }

    async fn file_exists(&self, _path: &str) -> bool {
        false
    }
}
