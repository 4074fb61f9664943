//! The guest file document written on export and inject.

pub mod guest_document;

use crate::{GuestAccount, GuestDocument, Result as CoreResult};

/// Encode an account as the pretty-printed guest document (2-space indent).
pub fn encode(account: &GuestAccount) -> String {
    let document = GuestDocument::from(account);
    // Two string fields under a fixed struct cannot fail to serialize.
    serde_json::to_string_pretty(&document).unwrap_or_default()
}

/// Decode a guest document, ignoring any keys it does not know.
pub fn decode(json: &str) -> CoreResult<GuestDocument> {
    Ok(serde_json::from_str(json)?)
}

/// File name used when the document is saved as a download.
pub fn download_file_name(account: &GuestAccount) -> String {
    format!("guest_{}.dat", account.uid)
}
