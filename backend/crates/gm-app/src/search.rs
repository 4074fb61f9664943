use gm_core::GuestAccount;

/// Accounts matching `query`, in collection order.
///
/// A blank query matches everything. Otherwise the query is lowercased and
/// must appear in the lowercased name, the game id or the uid.
pub fn filter_accounts<'a>(accounts: &'a [GuestAccount], query: &str) -> Vec<&'a GuestAccount> {
    if query.trim().is_empty() {
        return accounts.iter().collect();
    }

    let query = query.to_lowercase();
    accounts
        .iter()
        .filter(|account| {
            account
                .name
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(&query))
                || account
                    .game_id
                    .as_ref()
                    .is_some_and(|game_id| game_id.contains(&query))
                || account.uid.contains(&query)
        })
        .collect()
}
