// Character Codec
// Per-character power-mod transform between text and integer sequences

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::math::power_mod;

/// Encrypt a message one character at a time.
///
/// Each codepoint becomes `codepoint^exponent mod modulus`, in message
/// order. Any codepoint at or above the modulus is rejected up front:
/// past that bound the transform stops being invertible and would only
/// surface as garbage at decode time.
pub fn encrypt(message: &str, exponent: &BigUint, modulus: &BigUint) -> Result<Vec<BigUint>> {
    for ch in message.chars() {
        if BigUint::from(ch as u32) >= *modulus {
            return Err(Error::CodepointOutOfRange {
                ch,
                modulus: modulus.clone(),
            });
        }
    }

    Ok(message
        .chars()
        .map(|ch| power_mod(&BigUint::from(ch as u32), exponent, modulus))
        .collect())
}

/// Decrypt a ciphertext sequence back into a string.
///
/// Applies power-mod with the complementary exponent to each element and
/// maps the result back to a character, preserving order. Elements at or
/// above the modulus, or results that are not Unicode scalar values, are
/// rejected as invalid ciphertext.
pub fn decrypt(ciphertext: &[BigUint], exponent: &BigUint, modulus: &BigUint) -> Result<String> {
    let mut message = String::with_capacity(ciphertext.len());

    for value in ciphertext {
        if value >= modulus {
            return Err(Error::InvalidCiphertext);
        }
        let plain = power_mod(value, exponent, modulus);
        let code = u32::try_from(&plain).map_err(|_| Error::InvalidCiphertext)?;
        let ch = char::from_u32(code).ok_or(Error::InvalidCiphertext)?;
        message.push(ch);
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::{generate_key_pair_with_rng, KeyPair};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn toy_key_pair(seed: u64) -> KeyPair {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_key_pair_with_rng(8, &mut rng).unwrap().key_pair
    }

    #[test]
    fn test_round_trip() {
        let KeyPair { n, e, d } = toy_key_pair(10);
        let message = "ABCDEFGHIJabcdefghij";

        let ciphertext = encrypt(message, &e, &n).unwrap();
        assert_eq!(ciphertext.len(), message.chars().count());
        assert_eq!(decrypt(&ciphertext, &d, &n).unwrap(), message);
    }

    #[test]
    fn test_round_trip_with_swapped_exponents() {
        let KeyPair { n, e, d } = toy_key_pair(11);
        let message = "ABCDEFGHIJabcdefghij";

        let ciphertext = encrypt(message, &d, &n).unwrap();
        assert_eq!(decrypt(&ciphertext, &e, &n).unwrap(), message);
    }

    #[test]
    fn test_empty_message() {
        let KeyPair { n, e, d } = toy_key_pair(12);
        let ciphertext = encrypt("", &e, &n).unwrap();
        assert!(ciphertext.is_empty());
        assert_eq!(decrypt(&ciphertext, &d, &n).unwrap(), "");
    }

    #[test]
    fn test_encrypt_rejects_codepoint_at_or_above_modulus() {
        let KeyPair { e, .. } = toy_key_pair(13);
        // 'a' is codepoint 97, at the modulus bound
        let modulus = BigUint::from(97u32);

        let err = encrypt("a", &e, &modulus).unwrap_err();
        assert_eq!(
            err,
            Error::CodepointOutOfRange {
                ch: 'a',
                modulus: modulus.clone(),
            }
        );

        // Nothing is transformed when any character is out of range
        assert!(encrypt("Aa", &e, &modulus).is_err());
    }

    #[test]
    fn test_decrypt_rejects_element_at_or_above_modulus() {
        let KeyPair { n, d, .. } = toy_key_pair(14);
        let err = decrypt(&[n.clone()], &d, &n).unwrap_err();
        assert_eq!(err, Error::InvalidCiphertext);
    }

    #[test]
    fn test_decrypt_rejects_non_scalar_result() {
        // Exponent 1 leaves each element untouched; 0xD800 is a surrogate,
        // never a valid character
        let one = BigUint::from(1u32);
        let modulus = BigUint::from(0x10000u32);

        let err = decrypt(&[BigUint::from(0xD800u32)], &one, &modulus).unwrap_err();
        assert_eq!(err, Error::InvalidCiphertext);
    }

    #[test]
    fn test_decrypt_rejects_result_beyond_u32() {
        let one = BigUint::from(1u32);
        let modulus = BigUint::from(1u64) << 40u32;
        let value = BigUint::from(u32::MAX as u64 + 1);

        let err = decrypt(&[value], &one, &modulus).unwrap_err();
        assert_eq!(err, Error::InvalidCiphertext);
    }

    #[test]
    fn test_order_is_preserved() {
        let KeyPair { n, e, d } = toy_key_pair(15);
        let message = "dcba";

        let mut ciphertext = encrypt(message, &e, &n).unwrap();
        ciphertext.reverse();
        assert_eq!(decrypt(&ciphertext, &d, &n).unwrap(), "abcd");
    }
}
