//! Local record identifiers.
//!
//! Ids are a base-36 millisecond timestamp followed by a random base-36
//! suffix. They never leave the local collection, so uniqueness only has to
//! hold within one device's lifetime.

use chrono::Utc;

const RADIX: u64 = 36;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a fresh record id.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: u64 = rand::random();

    let mut id = to_base36(millis);
    id.push_str(&to_base36(suffix));
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return String::from("0");
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % RADIX) as usize]);
        value /= RADIX;
    }
    digits.reverse();

    // Every byte comes from DIGITS, which is ASCII.
    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
pub(crate) fn base36(value: u64) -> String {
    to_base36(value)
}
