use crate::GuestAccount;

/// Outcome of a lenient parse: the accounts produced plus what was dropped.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub accounts: Vec<GuestAccount>,
    /// Pairs whose credentials line did not match and were skipped
    pub discarded_pairs: usize,
    /// Pairs whose header did not match at all; no name or game id
    pub headerless_pairs: usize,
    /// Pairs whose header matched but whose name was blank; game id only
    pub unnamed_pairs: usize,
    /// True when an odd trailing line was ignored
    pub unpaired_trailing_line: bool,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }
}
