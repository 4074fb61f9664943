//! gm - guest account manager
//!
//! Keeps a local list of guest logins and writes them into the game's
//! guest file.
//!
//! # Examples
//!
//! ```bash
//! # Import accounts pasted from a chat log
//! gm import --file accounts.txt
//!
//! # Find an account and write it into the default guest file
//! gm list --search alpha --pretty
//! gm inject <id>
//!
//! # Save the guest document next to you instead
//! gm export <id> --download
//! ```

use gm_cli::{Cli, render, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(output) => match render(&output, pretty) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
