use gm_core::GuestAccount;

/// Result of loading the account list - distinguishes "empty" from "unreadable".
#[derive(Debug, Default)]
pub struct LoadResult {
    pub accounts: Vec<GuestAccount>,
    /// Present if the slot exists but could not be read or parsed
    pub corruption_error: Option<String>,
}
