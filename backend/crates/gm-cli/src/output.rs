use crate::CliResult;

use gm_app::{Notice, NoticeLevel};

use serde_json::Value;

/// What a command prints on stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(Value),
    /// Printed verbatim, e.g. a guest document or file contents
    Text(String),
}

pub fn render(output: &Output, pretty: bool) -> CliResult<String> {
    match output {
        Output::Text(text) => Ok(text.clone()),
        Output::Json(value) if pretty => Ok(serde_json::to_string_pretty(value)?),
        Output::Json(value) => Ok(serde_json::to_string(value)?),
    }
}

/// Notices go to stderr so stdout stays machine readable.
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        eprintln!("{}", notice_line(notice));
    }
}

pub(crate) fn notice_line(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.message)
}
