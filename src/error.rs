// Error taxonomy for key generation and the character codec

use num_bigint::BigUint;

/// Errors that can occur during key generation or encoding.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Bit length must be at least {min}, got {actual}")]
    InvalidBitLength { min: u32, actual: u32 },

    #[error("Exhausted every exponent candidate without finding a modular inverse")]
    KeyGenerationExhausted,

    #[error("Codepoint of {ch:?} is not below the modulus {modulus}")]
    CodepointOutOfRange { ch: char, modulus: BigUint },

    #[error("Ciphertext value does not decode to a valid character")]
    InvalidCiphertext,
}

/// Result type for key generation and codec operations
pub type Result<T> = std::result::Result<T, Error>;
