use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List saved accounts, newest first
    List {
        /// Case-insensitive match on name, game id or uid
        #[arg(long)]
        search: Option<String>,
    },

    /// Add an account by hand
    Add {
        #[arg(long)]
        uid: String,

        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        game_id: Option<String>,
    },

    /// Import accounts from pasted text (stdin unless --file is given)
    Import {
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Delete an account
    Delete { id: String },

    /// Print the guest document for an account
    Export {
        id: String,

        /// Save as guest_<uid>.dat in DIR (current directory by default)
        #[arg(long, value_name = "DIR")]
        download: Option<Option<PathBuf>>,
    },

    /// Write an account into the guest file
    Inject {
        id: String,

        /// Target file, relative to the storage root
        #[arg(long)]
        path: Option<String>,
    },

    /// Print the current guest file
    Read {
        /// Target file, relative to the storage root
        #[arg(long)]
        path: Option<String>,
    },

    /// List files in the guest directory
    Files,

    /// Show or request storage permission
    Permission {
        #[arg(long)]
        request: bool,
    },

    /// Show runtime, permission and collection state
    Status,
}
