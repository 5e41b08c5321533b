use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Miller-Rabin witnesses: the first twelve primes.
///
/// Testing against all of them is deterministic for every `n < 3.3 * 10^24`.
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Check if `n` is a prime number.
///
/// Uses Miller-Rabin with fixed witnesses. Exact below `3.3 * 10^24`, a strong
/// probable-prime test above that. Suitable for validating a field order once,
/// not for generating primes.
///
/// Field arithmetic never calls this; elements over a composite order are
/// accepted and simply produce meaningless quotients and powers.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use primefield::is_prime;
///
/// assert!(is_prime(&BigUint::from(31u32)));
/// assert!(!is_prime(&BigUint::from(57u32))); // 3 * 19
/// ```
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    for &w in WITNESSES.iter() {
        let w = BigUint::from(w);
        if *n == w {
            return true;
        }
        if (n % &w).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let one = BigUint::one();
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &w in WITNESSES.iter() {
        let mut x = BigUint::from(w).modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
