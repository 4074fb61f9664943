use crate::{
    BridgeError, BridgeResult, FileBridge, FileOperationResult, PERMISSION_DENIED_MESSAGE,
    PermissionPrompt,
};

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::{error, info, warn};

const READ_SUCCESS_MESSAGE: &str = "File read successfully";
const WRITE_SUCCESS_MESSAGE: &str = "File written successfully";

/// Direct file access under a shared storage root.
///
/// Permission is cached for the lifetime of the bridge once granted; it is
/// re-checked against the root on every call since the directory can go
/// away between check and use.
pub struct NativeFileBridge {
    root: PathBuf,
    prompt: Arc<dyn PermissionPrompt>,
    granted: AtomicBool,
}

impl NativeFileBridge {
    pub fn new(root: impl Into<PathBuf>, prompt: Arc<dyn PermissionPrompt>) -> Self {
        let granted = AtomicBool::new(prompt.pre_granted());
        Self {
            root: root.into(),
            prompt,
            granted,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a caller path under the root, refusing anything that escapes it.
    fn resolve(&self, path: &str) -> BridgeResult<PathBuf> {
        let relative = Path::new(path);
        let inside_root = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if path.trim().is_empty() || !inside_root {
            return Err(BridgeError::path_rejected(path));
        }

        Ok(self.root.join(relative))
    }

    async fn root_accessible(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    /// Check, then request if needed.
    async fn ensure_permission(&self) -> bool {
        self.check_permission().await || self.request_permission().await
    }

    async fn write_inner(&self, path: &str, content: &str) -> BridgeResult<PathBuf> {
        let target = self.resolve(path)?;

        if let Some(parent) = target.parent() {
            // Already existing is fine.
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| BridgeError::io(parent.to_path_buf(), e))?;
        }

        tokio::fs::write(&target, content)
            .await
            .map_err(|e| BridgeError::io(target.clone(), e))?;

        Ok(target)
    }

    async fn read_inner(&self, path: &str) -> BridgeResult<String> {
        let target = self.resolve(path)?;
        tokio::fs::read_to_string(&target)
            .await
            .map_err(|e| BridgeError::io(target, e))
    }
}

#[async_trait]
impl FileBridge for NativeFileBridge {
    fn is_native_runtime(&self) -> bool {
        true
    }

    async fn check_permission(&self) -> bool {
        self.granted.load(Ordering::SeqCst) && self.root_accessible().await
    }

    async fn request_permission(&self) -> bool {
        if !self.root_accessible().await {
            warn!("Storage root {:?} is not an accessible directory", self.root);
            return false;
        }

        let granted = self.prompt.request(&self.root).await;
        self.granted.store(granted, Ordering::SeqCst);

        if granted {
            info!("Storage permission granted for {:?}", self.root);
        } else {
            warn!("Storage permission denied for {:?}", self.root);
        }
        granted
    }

    async fn list_directory(&self, path: &str) -> Vec<String> {
        if !self.check_permission().await {
            return Vec::new();
        }
        let Ok(dir) = self.resolve(path) else {
            return Vec::new();
        };
        let Ok(mut entries) = tokio::fs::read_dir(&dir).await else {
            return Vec::new();
        };

        let mut names = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        names
    }

    async fn read_file(&self, path: &str) -> FileOperationResult {
        if !self.ensure_permission().await {
            return FileOperationResult::failure(PERMISSION_DENIED_MESSAGE);
        }

        match self.read_inner(path).await {
            Ok(data) => FileOperationResult::ok_with_data(READ_SUCCESS_MESSAGE, data),
            Err(e) => {
                error!("Read file error: {e}");
                FileOperationResult::failure(e.user_message())
            }
        }
    }

    async fn write_file(&self, path: &str, content: &str) -> FileOperationResult {
        if !self.ensure_permission().await {
            return FileOperationResult::failure(PERMISSION_DENIED_MESSAGE);
        }

        match self.write_inner(path, content).await {
            Ok(target) => {
                info!("Wrote {} byte(s) to {target:?}", content.len());
                FileOperationResult::ok(WRITE_SUCCESS_MESSAGE)
            }
            Err(e) => {
                error!("Write file error: {e}");
                FileOperationResult::failure(e.user_message())
            }
        }
    }

    async fn file_exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(target) => tokio::fs::metadata(target).await.is_ok(),
            Err(_) => false,
        }
    }
}
