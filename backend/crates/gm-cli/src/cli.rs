use crate::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gm")]
#[command(about = "Guest account manager")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Config directory (defaults to GM_CONFIG_DIR, then ./.gm)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Run without direct file access, as in a browser
    #[arg(long, global = true)]
    pub browser: bool,

    /// Grant storage permission without asking
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}
