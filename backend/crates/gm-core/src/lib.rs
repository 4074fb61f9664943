pub mod error;
pub mod export;
pub mod import;
pub mod models;


pub use error::{CoreError, Result};
pub use export::guest_document::{GuestAccountInfo, GuestDocument};
pub use export::{decode, download_file_name, encode};
pub use import::parse_report::ParseReport;
pub use import::parser::{parse, parse_with_report};
pub use models::account_id::generate_id;
pub use models::guest_account::GuestAccount;
