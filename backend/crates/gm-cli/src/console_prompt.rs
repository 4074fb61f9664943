use std::io::{BufRead, Write};
use std::path::Path;

use async_trait::async_trait;
use gm_bridge::PermissionPrompt;
use log::warn;

/// Asks on the terminal before touching the storage root.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

#[async_trait]
impl PermissionPrompt for ConsolePrompt {
    async fn request(&self, root: &Path) -> bool {
        let question = format!(
            "Allow gm to read and write guest files under {}? [y/N] ",
            root.display()
        );

        match tokio::task::spawn_blocking(move || ask(&question)).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Permission prompt failed: {e}");
                false
            }
        }
    }
}

fn ask(question: &str) -> bool {
    let mut stderr = std::io::stderr();
    if write!(stderr, "{question}").and_then(|_| stderr.flush()).is_err() {
        return false;
    }

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
