//! Anonymous session token generation.
//!
//! Anonymous browsers are keyed by a random 12-character token using
//! Crockford's Base32 alphabet.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

/// Generate a token for an anonymous browser session.
pub fn generate_anonymous_token() -> String {
    let mut rng = rand::rng();
    let mut token = String::with_capacity(12);
    for _ in 0..12 {
        token.push(CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char);
    }
    token
}
