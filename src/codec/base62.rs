//! Base62 short codes for `u32` values.
//!
//! The alphabet order (digits, lowercase, uppercase) is part of the wire
//! format: codes are persisted and decoded by other processes, so it must
//! never change.

use crate::errors::CodecError;

/// Number of symbols in the alphabet.
pub const BASE: u32 = 62;

/// Symbol table, index -> symbol. Digits first, then `a-z`, then `A-Z`.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// 62^5 < 2^32 < 62^6
const MAX_ENCODED_LEN: usize = 6;

/// Converts a number to its base62 representation.
///
/// `encode(0)` is the empty string. Existing codes depend on this, so zero is
/// not rendered as `"0"`.
pub fn encode(mut num: u32) -> String {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut start = buf.len();

    while num > 0 {
        start -= 1;
        buf[start] = ALPHABET[(num % BASE) as usize];
        num /= BASE;
    }

    // Every byte comes from ALPHABET, which is ASCII
    buf[start..].iter().map(|&b| b as char).collect()
}

/// Converts a base62 code back to the number it represents.
///
/// The empty string decodes to `0`, as does any run of `'0'` symbols. Values
/// above `u32::MAX` are rejected with [`CodecError::Overflow`] instead of
/// wrapping.
pub fn decode(s: &str) -> Result<u32, CodecError> {
    s.chars().enumerate().try_fold(0u32, |acc, (position, character)| {
        let digit = digit_value(character)
            .ok_or(CodecError::InvalidCharacter { character, position })?;

        acc.checked_mul(BASE)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(CodecError::Overflow)
    })
}

/// Index of `c` in [`ALPHABET`], if present.
fn digit_value(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='z' => c as u32 - 'a' as u32 + 10,
        'A'..='Z' => c as u32 - 'A' as u32 + 36,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rng, Rng};

    #[test]
    fn test_known_values() {
        assert_eq!(encode(1), "1");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
        assert_eq!(encode(62), "10");
        assert_eq!(encode(3843), "ZZ");
        assert_eq!(encode(4613355), "jm8X");

        assert_eq!(decode("jm8X").unwrap(), 4613355);
        assert_eq!(decode("10").unwrap(), 62);
        assert_eq!(decode("Z").unwrap(), 61);
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(encode(0), "");
        assert_eq!(decode("").unwrap(), 0);
        assert_eq!(decode("0").unwrap(), 0);
        assert_eq!(decode("000").unwrap(), 0);
    }

    #[test]
    fn test_leading_zeros_are_ignored() {
        assert_eq!(decode("0001").unwrap(), 1);
        // Longer than any encoded u32, but still in range
        assert_eq!(decode("00000000000000jm8X").unwrap(), 4613355);
    }

    #[test]
    fn test_u32_bounds() {
        assert_eq!(encode(u32::MAX), "4GFfc3");
        assert_eq!(decode("4GFfc3").unwrap(), u32::MAX);
        assert_eq!(encode(u32::MAX).len(), MAX_ENCODED_LEN);
    }

    #[test]
    fn test_overflow_is_rejected() {
        // u32::MAX + 1
        assert_eq!(decode("4GFfc4"), Err(CodecError::Overflow));
        assert_eq!(decode("ZZZZZZ"), Err(CodecError::Overflow));
        assert_eq!(decode("1000000"), Err(CodecError::Overflow));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            decode("a!b"),
            Err(CodecError::InvalidCharacter { character: '!', position: 1 })
        );
        assert_eq!(
            decode(" 1"),
            Err(CodecError::InvalidCharacter { character: ' ', position: 0 })
        );
        // Position counts chars, not bytes
        assert_eq!(
            decode("éa-"),
            Err(CodecError::InvalidCharacter { character: 'é', position: 0 })
        );
        assert_eq!(
            decode("ab\u{e9}"),
            Err(CodecError::InvalidCharacter { character: 'é', position: 2 })
        );
    }

    #[test]
    fn test_first_invalid_character_wins() {
        // Reported before the remaining digits could overflow
        assert_eq!(
            decode("-ZZZZZZZ"),
            Err(CodecError::InvalidCharacter { character: '-', position: 0 })
        );
        assert_eq!(
            decode("a_b+"),
            Err(CodecError::InvalidCharacter { character: '_', position: 1 })
        );
    }

    #[test]
    fn test_alphabet_matches_digit_values() {
        for (i, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(symbol as char), Some(i as u32));
            assert_eq!(encode(i as u32).as_bytes().last(), if i == 0 { None } else { Some(&symbol) });
        }
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = rng();
        for _ in 0..10_000 {
            let num: u32 = rng.random();
            let code = encode(num);

            assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
            assert_eq!(decode(&code).unwrap(), num);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(encode(987654321), encode(987654321));
        assert_eq!(decode("a!b"), decode("a!b"));
    }
}
