//! # Identifier Generation
//!
//! Row identifiers are `<prefix>-<millis>-<suffix>`: a millisecond timestamp
//! for rough chronological ordering plus a random base36 suffix for
//! uniqueness within the same millisecond.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

/// Generate a fresh row identifier with the given entity prefix.
///
/// Globally-unique-enough: collisions require two ids generated in the same
/// millisecond to also draw the same 7-character random suffix.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{prefix}-{millis}-{}", random_suffix())
}

/// Deterministic composite key for a session-student association row.
///
/// Adding the same student to the same session twice produces the same key,
/// so the write overwrites rather than duplicates.
#[must_use]
pub fn session_student_id(session_id: &str, student_id: &str) -> String {
    format!("ss-{session_id}-{student_id}")
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
