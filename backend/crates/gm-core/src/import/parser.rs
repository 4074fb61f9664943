use crate::{
    GuestAccount, ParseReport,
    import::markers::{ID_MARKER, NAME_MARKER, SEPARATOR, VARIATION_SELECTOR},
};

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"{name}(.+?)\s*{sep}\s*{id}{vs}?\s*([0-9]+)",
        name = NAME_MARKER,
        sep = SEPARATOR,
        id = ID_MARKER,
        vs = VARIATION_SELECTOR,
    );
    Regex::new(&pattern).expect("header pattern is a valid regex")
});

static CREDENTIALS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"([0-9]+){sep}(.+)", sep = SEPARATOR);
    Regex::new(&pattern).expect("credentials pattern is a valid regex")
});

/// Parse pasted text into accounts. Malformed pairs are skipped, never reported.
pub fn parse(text: &str) -> Vec<GuestAccount> {
    parse_with_report(text).accounts
}

/// Parse pasted text, also counting what was dropped along the way.
///
/// Non-blank lines are taken in pairs (header, credentials). A header that
/// does not match still yields an account without name/game id; a
/// credentials line that does not match drops the whole pair.
pub fn parse_with_report(text: &str) -> ParseReport {
    let created_at = Utc::now().timestamp_millis();
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut report = ParseReport {
        unpaired_trailing_line: lines.len() % 2 == 1,
        ..ParseReport::default()
    };

    for pair in lines.chunks_exact(2) {
        let (name, game_id) = match parse_header(pair[0]) {
            Some((name, game_id)) => {
                if name.is_none() {
                    report.unnamed_pairs += 1;
                }
                (name, game_id)
            }
            None => {
                report.headerless_pairs += 1;
                (None, None)
            }
        };

        match parse_credentials(pair[1]) {
            Some((uid, password)) => report.accounts.push(GuestAccount::with_created_at(
                uid, password, name, game_id, created_at,
            )),
            None => report.discarded_pairs += 1,
        }
    }

    report
}

fn parse_header(line: &str) -> Option<(Option<String>, Option<String>)> {
    let caps = HEADER_PATTERN.captures(line)?;
    let name = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    let game_id = caps.get(2).map(|m| m.as_str().to_string());
    Some((name, game_id))
}

fn parse_credentials(line: &str) -> Option<(String, String)> {
    let caps = CREDENTIALS_PATTERN.captures(line)?;
    let uid = caps.get(1)?.as_str().to_string();
    let password = caps.get(2)?.as_str().trim();
    if password.is_empty() {
        return None;
    }
    Some((uid, password.to_string()))
}
