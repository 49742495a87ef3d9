// RSA Key Generation
// Draws two random primes, then picks a coprime exponent pair over the totient

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::error::{Error, Result};
use crate::math::{extended_gcd, gcd};
use crate::prime::is_prime;

/// RSA key pair: the shared modulus plus the exponent pair.
///
/// Invariant: `e * d ≡ 1 (mod totient)`. Either exponent decrypts what the
/// other encrypted; confidentiality of `d` is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
    pub d: BigUint, // Private exponent
}

/// Full record of one key-generation run.
///
/// Carries the raw material alongside the key pair so a driver can report
/// how the keys came about. Display is the caller's concern.
#[derive(Debug, Clone)]
pub struct KeyGeneration {
    pub key_pair: KeyPair,
    pub p: BigUint,
    pub q: BigUint,
    pub totient: BigUint,
    /// Size of the enumerated coprime-candidate set.
    pub candidate_count: usize,
    /// Exponent candidates tried before one with an inverse turned up,
    /// in trial order, accepted candidate last.
    pub tried_candidates: Vec<BigUint>,
}

/// Generate a random prime of the given bit length.
///
/// Samples uniformly from [2^(bit_length-1), 2^bit_length) until `is_prime`
/// accepts, skipping `exclude` if given. Retries without an iteration cap;
/// prime density makes termination overwhelmingly likely but not bounded.
pub fn generate_prime(bit_length: u32, exclude: Option<&BigUint>) -> BigUint {
    generate_prime_with_rng(bit_length, exclude, &mut thread_rng())
}

/// `generate_prime` with an injected randomness source.
pub fn generate_prime_with_rng<R: Rng>(
    bit_length: u32,
    exclude: Option<&BigUint>,
    rng: &mut R,
) -> BigUint {
    let lower = BigUint::one() << (bit_length - 1);
    let upper = BigUint::one() << bit_length;

    loop {
        let candidate = rng.gen_biguint_range(&lower, &upper);
        if Some(&candidate) == exclude {
            continue;
        }
        if is_prime(&candidate) {
            return candidate;
        }
    }
}

/// All integers in [2, totient) coprime to the totient, ascending.
///
/// Exhaustive enumeration, tractable only at demonstration-scale bit
/// lengths. Realistic key sizes need rejection sampling instead.
pub fn coprime_candidates(totient: &BigUint) -> Vec<BigUint> {
    let one = BigUint::one();
    let mut candidates = Vec::new();
    let mut i = BigUint::from(2u32);

    while i < *totient {
        if gcd(totient, &i).is_one() {
            candidates.push(i.clone());
        }
        i += &one;
    }

    candidates
}

/// Pick a working exponent pair from the candidate list.
///
/// Scans the candidates in a uniformly random order and accepts the first
/// one with a modular inverse mod the totient. Returns `(e, d, tried)`
/// where `tried` is the scan prefix including the accepted candidate.
/// Exhausting the list without a hit is a generation failure; it cannot
/// happen for a totient built from two primes, but is surfaced rather
/// than assumed away.
pub fn select_key_pair(
    candidates: &[BigUint],
    totient: &BigUint,
) -> Result<(BigUint, BigUint, Vec<BigUint>)> {
    select_key_pair_with_rng(candidates, totient, &mut thread_rng())
}

/// `select_key_pair` with an injected randomness source.
pub fn select_key_pair_with_rng<R: Rng>(
    candidates: &[BigUint],
    totient: &BigUint,
    rng: &mut R,
) -> Result<(BigUint, BigUint, Vec<BigUint>)> {
    let mut order: Vec<&BigUint> = candidates.iter().collect();
    order.shuffle(rng);

    let mut tried = Vec::new();
    for e in order {
        tried.push(e.clone());
        let (gcd, d) = extended_gcd(totient, e);
        if gcd.is_one() {
            return Ok((e.clone(), d, tried));
        }
    }

    Err(Error::KeyGenerationExhausted)
}

/// Generate a complete RSA key pair with primes of the given bit length.
pub fn generate_key_pair(bit_length: u32) -> Result<KeyGeneration> {
    generate_key_pair_with_rng(bit_length, &mut thread_rng())
}

/// `generate_key_pair` with an injected randomness source.
pub fn generate_key_pair_with_rng<R: Rng>(bit_length: u32, rng: &mut R) -> Result<KeyGeneration> {
    if bit_length < 2 {
        return Err(Error::InvalidBitLength {
            min: 2,
            actual: bit_length,
        });
    }

    let p = generate_prime_with_rng(bit_length, None, rng);
    let q = generate_prime_with_rng(bit_length, Some(&p), rng);

    let n = &p * &q;
    let one = BigUint::one();
    let totient = (&p - &one) * (&q - &one);

    let candidates = coprime_candidates(&totient);
    let candidate_count = candidates.len();
    let (e, d, tried_candidates) = select_key_pair_with_rng(&candidates, &totient, rng)?;

    Ok(KeyGeneration {
        key_pair: KeyPair { n, e, d },
        p,
        q,
        totient,
        candidate_count,
        tried_candidates,
    })
}
