//! Short identifier derivation from record ids.
//!
//! A record id is scrambled with an odd multiplier and an XOR mask inside a
//! fixed bit width, then encoded as URL-safe base64 without padding. Both steps
//! are bijections, so distinct ids always yield distinct tokens, while
//! consecutive ids produce unrelated-looking tokens.
//!
//! | id range        | scramble width | token length |
//! |-----------------|----------------|--------------|
//! | `0 .. 2^40`     | 40 bits        | 7            |
//! | `2^40 ..`       | 64 bits        | 11           |
//!
//! The two ranges produce tokens of different lengths and therefore never
//! collide with each other.

use base64::Engine as _;

const SMALL_BITS: u32 = 40;
const SMALL_MASK: u64 = (1 << SMALL_BITS) - 1;
const SMALL_BYTES: usize = (SMALL_BITS / 8) as usize;

/// Odd, so multiplication is invertible modulo 2^40.
const SMALL_MULTIPLIER: u64 = 0x9E_3779_B97F;
const SMALL_XOR: u64 = 0x5A_C3E1_7B2D;

/// Odd, so multiplication is invertible modulo 2^64.
const LARGE_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;
const LARGE_XOR: u64 = 0xD6E8_FEB8_6659_FD93;

/// Token length for ids below 2^40.
pub const SHORT_ID_LEN: usize = 7;

/// Token length for ids at or above 2^40.
pub const LONG_SHORT_ID_LEN: usize = 11;

/// Derives the short identifier for a record id.
///
/// Deterministic and injective over all `i64` values. Negative ids never come
/// out of the id sequence but are still encoded (through the 64-bit path).
///
/// # Examples
///
/// ```ignore
/// let token = encode_id(1);
/// assert_eq!(token.len(), 7);
/// assert_eq!(token, encode_id(1));
/// assert_ne!(token, encode_id(2));
/// ```
pub fn encode_id(id: i64) -> String {
    let id = id as u64;

    if id <= SMALL_MASK {
        let scrambled = (id.wrapping_mul(SMALL_MULTIPLIER) & SMALL_MASK) ^ SMALL_XOR;
        let bytes = scrambled.to_be_bytes();
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&bytes[8 - SMALL_BYTES..])
    } else {
        let scrambled = id.wrapping_mul(LARGE_MULTIPLIER) ^ LARGE_XOR;
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(scrambled.to_be_bytes())
    }
}

/// Returns true if `candidate` has the shape of a derived short identifier.
///
/// Used to reject obviously malformed identifiers before touching the database.
pub fn is_well_formed(candidate: &str) -> bool {
    (candidate.len() == SHORT_ID_LEN || candidate.len() == LONG_SHORT_ID_LEN)
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode_id(42), encode_id(42));
        assert_eq!(encode_id(1 << 50), encode_id(1 << 50));
    }

    #[test]
    fn test_small_ids_have_short_length() {
        assert_eq!(encode_id(1).len(), SHORT_ID_LEN);
        assert_eq!(encode_id(123_456).len(), SHORT_ID_LEN);
        assert_eq!(encode_id(SMALL_MASK as i64).len(), SHORT_ID_LEN);
    }

    #[test]
    fn test_large_ids_have_long_length() {
        assert_eq!(encode_id((SMALL_MASK + 1) as i64).len(), LONG_SHORT_ID_LEN);
        assert_eq!(encode_id(i64::MAX).len(), LONG_SHORT_ID_LEN);
    }

    #[test]
    fn test_encode_is_injective_over_sequential_ids() {
        let mut seen = HashSet::new();

        for id in 1..=100_000 {
            assert!(seen.insert(encode_id(id)), "collision at id {id}");
        }
    }

    #[test]
    fn test_encode_is_injective_around_width_boundary() {
        let boundary = SMALL_MASK as i64;
        let mut seen = HashSet::new();

        for id in (boundary - 1_000)..=(boundary + 1_000) {
            assert!(seen.insert(encode_id(id)), "collision at id {id}");
        }
    }

    #[test]
    fn test_encode_url_safe_characters() {
        for id in [1, 2, 63, 64, 1_000_000, i64::MAX] {
            let token = encode_id(id);
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {token}"
            );
            assert!(!token.contains('='));
        }
    }

    #[test]
    fn test_consecutive_ids_do_not_share_prefix() {
        let a = encode_id(1000);
        let b = encode_id(1001);
        assert_ne!(a[..4], b[..4]);
    }

    #[test]
    fn test_encoded_ids_are_well_formed() {
        assert!(is_well_formed(&encode_id(1)));
        assert!(is_well_formed(&encode_id(i64::MAX)));
    }

    #[test]
    fn test_is_well_formed_rejects_other_shapes() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("ping"));
        assert!(!is_well_formed("abc 123"));
        assert!(!is_well_formed("abcdefgh"));
        assert!(!is_well_formed("abc/123"));
    }
}
