// Primality Testing
// Trial division against the primes below 1000, then Miller-Rabin

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{thread_rng, Rng};

use crate::math::power_mod;

/// All 168 primes below 1000, used for the trial-division fast path.
pub const SMALL_PRIMES: [u32; 168] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419,
    421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
    547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653,
    659, 661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787,
    797, 809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919,
    929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Number of independent Miller-Rabin witness rounds.
const RABIN_MILLER_ROUNDS: usize = 5;

/// Primality test
/// Returns false for anything below 2, answers from the small-prime table
/// where it can, and falls back to Miller-Rabin otherwise.
pub fn is_prime(num: &BigUint) -> bool {
    if *num < BigUint::from(2u32) {
        return false;
    }
    for &small in SMALL_PRIMES.iter() {
        let small = BigUint::from(small);
        if *num == small {
            return true;
        }
        if (num % &small).is_zero() {
            return false;
        }
    }
    rabin_miller(num)
}

/// Miller-Rabin probabilistic primality test
/// Returns true if num is probably prime. A false "prime" verdict is
/// possible but rare for the configured round count.
///
/// Callers must pass an odd num > 3; `is_prime` guarantees this.
pub fn rabin_miller(num: &BigUint) -> bool {
    rabin_miller_with_rng(num, &mut thread_rng())
}

/// Miller-Rabin with an injected witness source, for deterministic tests.
pub fn rabin_miller_with_rng<R: Rng>(num: &BigUint, rng: &mut R) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let num_minus_one = num - &one;

    // Write num - 1 as s * 2^t with s odd
    let mut s = num_minus_one.clone();
    let mut t = 0u32;
    while s.is_even() {
        s >>= 1;
        t += 1;
    }

    for _ in 0..RABIN_MILLER_ROUNDS {
        // Random witness a in [2, num-2]
        let a = rng.gen_biguint_range(&two, &num_minus_one);
        let mut v = power_mod(&a, &s, num);

        if v != one {
            let mut i = 0u32;
            while v != num_minus_one {
                if i == t - 1 {
                    return false;
                }
                i += 1;
                v = (&v * &v) % num;
            }
        }
    }

    true
}
