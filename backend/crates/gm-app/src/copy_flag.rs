use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_COPIED_DURATION: Duration = Duration::from_secs(2);

/// "Copied!" acknowledgement that clears itself after a short delay.
///
/// Purely cosmetic; derived from the time of the last copy rather than a timer.
#[derive(Debug)]
pub struct CopyFlag {
    copied_at: Mutex<Option<Instant>>,
    duration: Duration,
}

impl CopyFlag {
    pub fn new(duration: Duration) -> Self {
        Self {
            copied_at: Mutex::new(None),
            duration,
        }
    }

    pub fn mark(&self) {
        self.mark_at(Instant::now());
    }

    pub fn is_set(&self) -> bool {
        self.is_set_at(Instant::now())
    }

    pub(crate) fn mark_at(&self, now: Instant) {
        if let Ok(mut copied_at) = self.copied_at.lock() {
            *copied_at = Some(now);
        }
    }

    pub(crate) fn is_set_at(&self, now: Instant) -> bool {
        self.copied_at
            .lock()
            .ok()
            .and_then(|copied_at| *copied_at)
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }
}

impl Default for CopyFlag {
    fn default() -> Self {
        Self::new(DEFAULT_COPIED_DURATION)
    }
}
