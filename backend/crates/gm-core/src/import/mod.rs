//! Bulk import from the two-line paste format.
//!
//! ```text
//! 👤{name} : 🆔 {game id}
//! {uid}:{password}
//! ```

pub mod markers;
pub mod parse_report;
pub mod parser;
