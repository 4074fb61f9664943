use crate::GuestAccount;

use serde::{Deserialize, Serialize};

/// Top-level export document. Key names are consumed verbatim by the game
/// client and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDocument {
    pub guest_account_info: GuestAccountInfo,
}

/// Field order is significant: password first, then uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestAccountInfo {
    #[serde(rename = "com.garena.msdk.guest_password")]
    pub password: String,
    #[serde(rename = "com.garena.msdk.guest_uid")]
    pub uid: String,
}

impl From<&GuestAccount> for GuestDocument {
    fn from(account: &GuestAccount) -> Self {
        Self {
            guest_account_info: GuestAccountInfo {
                password: account.password.clone(),
                uid: account.uid.clone(),
            },
        }
    }
}
