pub mod account_id;
pub mod guest_account;
