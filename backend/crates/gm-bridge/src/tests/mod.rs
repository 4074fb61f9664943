mod error;
mod unavailable_file_bridge;

use crate::PermissionPrompt;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Prompt that records how often it was asked.
pub(crate) struct CountingPrompt {
    answer: bool,
    asked: AtomicUsize,
}

impl CountingPrompt {
    pub(crate) fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub(crate) fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionPrompt for CountingPrompt {
    async fn request(&self, _root: &Path) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}
