use crate::{ControllerError, ControllerResult};

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

/// Bridge-backed actions that may only run one at a time each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Inject,
    ReadFile,
    RefreshFiles,
    RequestPermission,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inject => "Inject",
            Self::ReadFile => "Read file",
            Self::RefreshFiles => "Refresh files",
            Self::RequestPermission => "Permission request",
        };
        f.write_str(name)
    }
}

/// Busy flag for one action.
#[derive(Debug)]
pub(crate) struct InFlight {
    action: Action,
    busy: AtomicBool,
}

impl InFlight {
    pub(crate) fn new(action: Action) -> Self {
        Self {
            action,
            busy: AtomicBool::new(false),
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Claim the action; the flag clears when the guard drops.
    #[track_caller]
    pub(crate) fn try_begin(&self) -> ControllerResult<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ControllerError::busy(self.action))?;
        Ok(InFlightGuard { busy: &self.busy })
    }
}

pub(crate) struct InFlightGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}
