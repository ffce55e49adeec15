//! Random URL slug generation.
//!
//! Slugs identify published events in public URLs. They are assigned once
//! at creation and preserved for the life of the record. No store enforces
//! uniqueness; with 36^12 possible values a collision is treated as
//! exceptionally rare rather than impossible.

use rand::Rng;

/// Characters a slug may contain: lowercase ASCII letters and digits.
const SLUG_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated slug.
const SLUG_LEN: usize = 12;

/// Generate a random 12-character lowercase-alphanumeric slug.
pub fn generate_slug() -> String {
    let mut rng = rand::rng();
    (0..SLUG_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SLUG_CHARS.len());
            char::from(SLUG_CHARS.get(idx).copied().unwrap_or(b'a'))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_has_fixed_length_and_charset() {
        for _ in 0..32 {
            let slug = generate_slug();
            assert_eq!(slug.len(), SLUG_LEN);
            assert!(slug.bytes().all(|b| SLUG_CHARS.contains(&b)));
        }
    }

    #[test]
    fn slugs_are_not_constant() {
        let first = generate_slug();
        let distinct = (0..16).any(|_| generate_slug() != first);
        assert!(distinct);
    }
}
