//! gm-cli library
//!
//! Command parsing and dispatch for the `gm` binary, exported so the
//! commands can be driven against any store and bridge.

mod cli;
mod commands;
mod console_prompt;
mod error;
mod logger;
mod output;
mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use console_prompt::ConsolePrompt;
pub use error::{CliError, Result as CliResult};
pub use output::{Output, print_notices, render};
pub use runner::{build_bridge, execute, run};
