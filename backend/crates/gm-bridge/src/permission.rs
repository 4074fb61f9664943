use std::path::Path;

use async_trait::async_trait;

/// Answers storage permission requests on behalf of the platform.
#[async_trait]
pub trait PermissionPrompt: Send + Sync {
    /// Whether access was granted before this run.
    fn pre_granted(&self) -> bool {
        false
    }

    /// Ask for access to `root`. May block on user input.
    async fn request(&self, root: &Path) -> bool;
}

/// A fixed answer, for unattended runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission {
    granted: bool,
}

impl StaticPermission {
    pub fn granted() -> Self {
        Self { granted: true }
    }

    pub fn denied() -> Self {
        Self { granted: false }
    }
}

#[async_trait]
impl PermissionPrompt for StaticPermission {
    fn pre_granted(&self) -> bool {
        self.granted
    }

    async fn request(&self, _root: &Path) -> bool {
        self.granted
    }
}
