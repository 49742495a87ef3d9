// Textbook RSA - Library root
// Exposes the primality oracle, modular arithmetic, key generation,
// and the per-character codec

pub mod codec;
pub mod error;
pub mod keygen;
pub mod math;
pub mod prime;

pub use codec::{decrypt, encrypt};
pub use error::{Error, Result};
pub use keygen::{generate_key_pair, KeyGeneration, KeyPair};
pub use math::{extended_gcd, gcd, power_mod};
pub use prime::is_prime;
