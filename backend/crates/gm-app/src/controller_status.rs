use serde::Serialize;

/// Snapshot of controller state for display.
#[derive(Debug, Clone, Serialize)]
pub struct ControllerStatus {
    pub is_native: bool,
    pub has_permission: bool,
    pub guest_file_path: String,
    pub guest_files: Vec<String>,
    pub account_count: usize,
    pub visible_count: usize,
    pub selected_id: Option<String>,
}
