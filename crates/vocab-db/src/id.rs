//! Short opaque identifiers for topics and words.

use chrono::Utc;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new identifier.
///
/// A random component followed by the current Unix time in milliseconds,
/// both in lowercase base 36. Uniqueness is not re-checked against the store.
pub fn generate_id() -> String {
    let random: u64 = rand::random();
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();

    let mut id = to_base36(random);
    id.push_str(&to_base36(millis));
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    // Only ASCII digits and lowercase letters are ever pushed
    digits.into_iter().map(char::from).collect()
}
