use crate::in_flight::InFlight;
use crate::{
    Action, ControllerError, ControllerOptions, ControllerResult, ControllerStatus, CopyFlag,
    NATIVE_UNAVAILABLE_MESSAGE, Notice, filter_accounts,
};

use gm_bridge::FileBridge;
use gm_core::{GuestAccount, ParseReport, encode, parse_with_report};
use gm_store::AccountStore;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, info};

const INJECT_SUCCESS_MESSAGE: &str = "Account injected successfully!";

/// Bridge-facing state, shared by actions that run through `&self`.
#[derive(Debug, Default)]
struct FileState {
    has_permission: bool,
    guest_file_path: String,
    guest_files: Vec<String>,
}

/// Owns the account collection and wires user actions to store and bridge.
///
/// Collection mutations take `&mut self` and persist the whole list before
/// returning. Bridge actions take `&self`; each may only have one call in
/// flight, a second concurrent call fails with [`ControllerError::Busy`].
pub struct AppController {
    store: AccountStore,
    bridge: Arc<dyn FileBridge>,
    guest_dir: String,
    is_native: bool,

    accounts: Vec<GuestAccount>,
    search: String,
    selected_id: Option<String>,

    files: Mutex<FileState>,
    notices: Mutex<Vec<Notice>>,
    copied: CopyFlag,

    inject_flight: InFlight,
    read_flight: InFlight,
    refresh_flight: InFlight,
    permission_flight: InFlight,
}

impl AppController {
    /// Load stored accounts and query the bridge once.
    pub async fn initialize(
        store: AccountStore,
        bridge: Arc<dyn FileBridge>,
        options: ControllerOptions,
    ) -> Self {
        let loaded = store.load_detailed().await;
        let is_native = bridge.is_native_runtime();

        let mut has_permission = false;
        let mut guest_files = Vec::new();
        if is_native {
            has_permission = bridge.check_permission().await;
            if has_permission {
                guest_files = bridge.list_directory(&options.guest_dir).await;
            }
        }

        let mut notices = Vec::new();
        if let Some(reason) = loaded.corruption_error {
            notices.push(Notice::error(format!(
                "Stored accounts could not be read: {reason}"
            )));
        }

        info!(
            "Controller ready: {} account(s), native={is_native}, permission={has_permission}",
            loaded.accounts.len()
        );

        Self {
            store,
            bridge,
            guest_dir: options.guest_dir,
            is_native,
            accounts: loaded.accounts,
            search: String::new(),
            selected_id: None,
            files: Mutex::new(FileState {
                has_permission,
                guest_file_path: options.guest_file_path,
                guest_files,
            }),
            notices: Mutex::new(notices),
            copied: CopyFlag::new(options.copied_duration),
            inject_flight: InFlight::new(Action::Inject),
            read_flight: InFlight::new(Action::ReadFile),
            refresh_flight: InFlight::new(Action::RefreshFiles),
            permission_flight: InFlight::new(Action::RequestPermission),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn accounts(&self) -> &[GuestAccount] {
        &self.accounts
    }

    pub fn account(&self, id: &str) -> Option<&GuestAccount> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Accounts matching the current search text.
    pub fn filtered(&self) -> Vec<&GuestAccount> {
        filter_accounts(&self.accounts, &self.search)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_account(&self) -> Option<&GuestAccount> {
        self.selected_id.as_deref().and_then(|id| self.account(id))
    }

    pub fn guest_dir(&self) -> &str {
        &self.guest_dir
    }

    pub fn is_native(&self) -> bool {
        self.is_native
    }

    pub fn has_permission(&self) -> bool {
        self.file_state().has_permission
    }

    pub fn guest_file_path(&self) -> String {
        self.file_state().guest_file_path.clone()
    }

    pub fn guest_files(&self) -> Vec<String> {
        self.file_state().guest_files.clone()
    }

    /// Whether `action` is running; its trigger should be disabled meanwhile.
    pub fn is_busy(&self, action: Action) -> bool {
        self.flight(action).is_busy()
    }

    pub fn status(&self) -> ControllerStatus {
        let files = self.file_state();
        ControllerStatus {
            is_native: self.is_native,
            has_permission: files.has_permission,
            guest_file_path: files.guest_file_path.clone(),
            guest_files: files.guest_files.clone(),
            account_count: self.accounts.len(),
            visible_count: self.filtered().len(),
            selected_id: self.selected_id.clone(),
        }
    }

    /// Drain pending notices, oldest first.
    pub fn take_notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut notices) => std::mem::take(&mut *notices),
            Err(_) => Vec::new(),
        }
    }

    // =========================================================================
    // Collection Mutations
    // =========================================================================

    /// Prepend a manually entered account and persist.
    ///
    /// Rejects blank credentials and an id already in the collection.
    pub async fn add(&mut self, account: GuestAccount) -> ControllerResult<()> {
        account.validate()?;
        if self.account(&account.id).is_some() {
            return Err(ControllerError::duplicate_id(account.id));
        }

        debug!("Adding account {}", account.id);
        self.accounts.insert(0, account);
        self.persist().await;
        self.notify(Notice::success("Account added successfully!"));
        Ok(())
    }

    /// Prepend a batch of accounts, keeping batch order, and persist.
    ///
    /// The batch is all or nothing: one invalid record or one id already
    /// present (in the collection or earlier in the batch) rejects it whole.
    /// Returns how many were added. An empty batch changes nothing.
    pub async fn import(&mut self, accounts: Vec<GuestAccount>) -> ControllerResult<usize> {
        let count = accounts.len();
        if count == 0 {
            return Ok(0);
        }

        let mut ids: HashSet<&str> = self.accounts.iter().map(|a| a.id.as_str()).collect();
        for account in &accounts {
            account.validate()?;
            if !ids.insert(account.id.as_str()) {
                return Err(ControllerError::duplicate_id(account.id.as_str()));
            }
        }

        self.accounts.splice(0..0, accounts);
        self.persist().await;
        self.notify(Notice::success(format!("Imported {count} account(s)!")));
        Ok(count)
    }

    /// Parse pasted text and import whatever it yields.
    pub async fn import_text(&mut self, text: &str) -> ControllerResult<ParseReport> {
        let report = parse_with_report(text);
        if report.discarded_pairs > 0 {
            info!("Import skipped {} malformed pair(s)", report.discarded_pairs);
            self.notify(Notice::info(format!(
                "Skipped {} unreadable pair(s)",
                report.discarded_pairs
            )));
        }

        self.import(report.accounts.clone()).await?;
        Ok(report)
    }

    /// Remove an account; unknown ids are ignored.
    ///
    /// Returns whether anything was removed.
    pub async fn delete(&mut self, id: &str) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|account| account.id != id);
        if self.accounts.len() == before {
            return false;
        }

        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        self.persist().await;
        self.notify(Notice::success("Account deleted"));
        true
    }

    /// Toggle selection: selecting the selected account clears it.
    pub fn select(&mut self, id: &str) {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        } else {
            self.selected_id = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Guest document for the selected account.
    pub fn export_selected(&self) -> Option<String> {
        self.selected_account().map(encode)
    }

    /// Guest document for any account.
    pub fn export(&self, id: &str) -> ControllerResult<String> {
        self.account(id)
            .map(encode)
            .ok_or_else(|| ControllerError::not_found(id))
    }

    /// Record that the export text was copied.
    pub fn mark_copied(&self) {
        self.copied.mark();
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_set()
    }

    // =========================================================================
    // Bridge Actions
    // =========================================================================

    pub fn set_guest_file_path(&self, path: impl Into<String>) {
        if let Ok(mut files) = self.files.lock() {
            files.guest_file_path = path.into();
        }
    }

    /// Target one of the listed guest files.
    pub fn choose_guest_file(&self, file_name: &str) {
        self.set_guest_file_path(format!("{}/{file_name}", self.guest_dir));
    }

    /// Write the account's guest document to the target path.
    ///
    /// Returns whether the file was written; the reason for a failure is
    /// left as an error notice.
    pub async fn inject(&self, id: &str) -> ControllerResult<bool> {
        if !self.is_native {
            self.notify(Notice::error(NATIVE_UNAVAILABLE_MESSAGE));
            return Ok(false);
        }

        let _guard = self.inject_flight.try_begin()?;
        let account = self.account(id).ok_or_else(|| ControllerError::not_found(id))?;
        let path = self.guest_file_path();

        let result = self.bridge.write_file(&path, &encode(account)).await;
        if result.success {
            info!("Injected {} into {path}", account.display_label());
            self.notify(Notice::success(INJECT_SUCCESS_MESSAGE));
        } else {
            error!("Inject into {path} failed: {}", result.message);
            self.notify(Notice::error(result.message));
        }
        Ok(result.success)
    }

    /// Contents of the target file, or `None` when it cannot be read.
    pub async fn read_current_file(&self) -> ControllerResult<Option<String>> {
        if !self.is_native {
            return Ok(None);
        }

        let _guard = self.read_flight.try_begin()?;
        let result = self.bridge.read_file(&self.guest_file_path()).await;

        match result.data {
            Some(data) if result.success => Ok(Some(data)),
            _ => {
                self.notify(Notice::error(result.message));
                Ok(None)
            }
        }
    }

    /// Whether the target file currently exists. Always false off-native.
    pub async fn guest_file_exists(&self) -> bool {
        self.is_native && self.bridge.file_exists(&self.guest_file_path()).await
    }

    /// Re-list the guest directory.
    pub async fn refresh_guest_files(&self) -> ControllerResult<()> {
        if !self.is_native {
            return Ok(());
        }

        let _guard = self.refresh_flight.try_begin()?;
        let files = self.bridge.list_directory(&self.guest_dir).await;
        if let Ok(mut state) = self.files.lock() {
            state.guest_files = files;
        }
        Ok(())
    }

    /// Ask for storage access; refreshes the guest file list when granted.
    pub async fn request_storage_permission(&self) -> ControllerResult<bool> {
        let _guard = self.permission_flight.try_begin()?;
        let granted = self.bridge.request_permission().await;

        let files = if granted {
            self.notify(Notice::success("Storage permission granted!"));
            self.bridge.list_directory(&self.guest_dir).await
        } else {
            self.notify(Notice::error("Storage permission denied"));
            Vec::new()
        };

        if let Ok(mut state) = self.files.lock() {
            state.has_permission = granted;
            if granted {
                state.guest_files = files;
            }
        }
        Ok(granted)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn persist(&self) {
        if let Err(e) = self.store.save(&self.accounts).await {
            error!("Failed to save accounts: {e}");
            self.notify(Notice::error(format!(
                "Failed to save accounts. {}",
                e.recovery_hint()
            )));
        }
    }

    fn notify(&self, notice: Notice) {
        debug!("Notice: {notice:?}");
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }

    fn file_state(&self) -> MutexGuard<'_, FileState> {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn flight(&self, action: Action) -> &InFlight {
        match action {
            Action::Inject => &self.inject_flight,
            Action::ReadFile => &self.read_flight,
            Action::RefreshFiles => &self.refresh_flight,
            Action::RequestPermission => &self.permission_flight,
        }
    }
}
