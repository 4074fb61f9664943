//! Application state controller.
//!
//! Owns the in-memory account list, search text and selection, persists the
//! list after every mutation and drives the file bridge for inject/read.

mod controller;
mod controller_options;
mod controller_status;
mod copy_flag;
mod error;
mod in_flight;
mod notice;
mod search;

#[cfg(test)]
mod tests;

pub use controller::AppController;
pub use controller_options::ControllerOptions;
pub use controller_status::ControllerStatus;
pub use copy_flag::CopyFlag;
pub use error::{ControllerError, Result as ControllerResult};
pub use in_flight::Action;
pub use notice::{Notice, NoticeLevel};
pub use search::filter_accounts;

pub const NATIVE_UNAVAILABLE_MESSAGE: &str = "Native file access not available in browser";
