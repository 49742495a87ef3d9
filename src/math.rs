// Modular Arithmetic
// gcd, extended Euclid, and fast modular exponentiation over BigUint

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor via the Euclidean algorithm
/// gcd(m, 0) = m
pub fn gcd(m: &BigUint, n: &BigUint) -> BigUint {
    let mut m = m.clone();
    let mut n = n.clone();
    while !n.is_zero() {
        let r = &m % &n;
        m = n;
        n = r;
    }
    m
}

/// Extended Euclidean Algorithm over `modulus` and `e`
/// Returns (gcd, t) where t is the final Bézout coefficient of `e`,
/// normalized into [0, modulus).
///
/// When the gcd is 1, t is the modular inverse of `e` mod `modulus`;
/// otherwise no inverse exists and t carries no meaning.
pub fn extended_gcd(modulus: &BigUint, e: &BigUint) -> (BigUint, BigUint) {
    let mut r1 = BigInt::from(modulus.clone());
    let mut r2 = BigInt::from(e.clone());
    // Bézout coefficients of e across the three-term recurrence
    let mut t1 = BigInt::zero();
    let mut t2 = BigInt::one();

    while r2 > BigInt::zero() {
        let q = &r1 / &r2;
        let r = &r1 - &q * &r2;
        r1 = r2;
        r2 = r;
        let t = &t1 - &q * &t2;
        t1 = t2;
        t2 = t;
    }

    let t1 = t1.mod_floor(&BigInt::from(modulus.clone()));

    let gcd = r1.to_biguint().expect("remainder sequence is non-negative");
    let t = t1.to_biguint().expect("mod_floor lands in [0, modulus)");
    (gcd, t)
}

/// Compute modular inverse: e^(-1) mod modulus
/// Returns None if inverse doesn't exist
pub fn mod_inverse(modulus: &BigUint, e: &BigUint) -> Option<BigUint> {
    let (gcd, inverse) = extended_gcd(modulus, e);
    if gcd.is_one() {
        Some(inverse)
    } else {
        None
    }
}

/// Modular exponentiation: base^exponent mod modulus
/// Uses square-and-multiply algorithm
pub fn power_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exponent.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}
