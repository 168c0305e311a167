//! Scalar number-theoretic helpers for coefficient arithmetic in Z/pZ.

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// field characteristics at construction time, not for
/// high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// `(a + b) mod p` without overflow for 8-bit coefficients.
#[inline]
pub(crate) fn add_mod(a: u8, b: u8, p: u8) -> u8 {
    ((a as u16 + b as u16) % p as u16) as u8
}

/// `(a - b) mod p`, result in `[0, p)`.
#[inline]
pub(crate) fn sub_mod(a: u8, b: u8, p: u8) -> u8 {
    ((a as i16 - b as i16).rem_euclid(p as i16)) as u8
}

/// `(a * b) mod p` without overflow for 8-bit coefficients.
#[inline]
pub(crate) fn mul_mod(a: u8, b: u8, p: u8) -> u8 {
    ((a as u16 * b as u16) % p as u16) as u8
}

/// `-a mod p`, result in `[0, p)`.
#[inline]
pub(crate) fn neg_mod(a: u8, p: u8) -> u8 {
    if a == 0 {
        0
    } else {
        p - a
    }
}

/// `a^e mod p` by square-and-multiply on 8-bit values.
pub(crate) fn pow_mod(a: u8, mut e: u32, p: u8) -> u8 {
    let mut base = (a % p) as u16;
    let mut result: u16 = 1 % p as u16;
    while e > 0 {
        if e & 1 == 1 {
            result = result * base % p as u16;
        }
        base = base * base % p as u16;
        e >>= 1;
    }
    result as u8
}

/// Multiplicative inverse of `a` in Z/pZ for prime `p`.
///
/// Computed as `a^(p-2) mod p` (Fermat). Returns `None` when `a ≡ 0`,
/// which has no inverse.
pub(crate) fn mod_inverse(a: u8, p: u8) -> Option<u8> {
    if a % p == 0 {
        return None;
    }
    Some(pow_mod(a, (p - 2) as u32, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(6));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(13));
        assert!(is_prime(17));
        assert!(is_prime(251));
    }

    #[test]
    fn composites() {
        assert!(!is_prime(15));
        assert!(!is_prime(21));
        assert!(!is_prime(25));
        assert!(!is_prime(100));
        assert!(!is_prime(255));
    }

    #[test]
    fn scalar_arithmetic_wraps() {
        assert_eq!(add_mod(250, 250, 251), 249);
        assert_eq!(sub_mod(0, 1, 7), 6);
        assert_eq!(mul_mod(250, 250, 251), 1);
        assert_eq!(neg_mod(0, 13), 0);
        assert_eq!(neg_mod(5, 13), 8);
    }

    #[test]
    fn pow_mod_fermat() {
        // a^(p-1) = 1 for a != 0
        for a in 1..17u8 {
            assert_eq!(pow_mod(a, 16, 17), 1);
        }
        assert_eq!(pow_mod(0, 5, 17), 0);
        assert_eq!(pow_mod(3, 0, 17), 1);
    }

    #[test]
    fn inverses_mod_small_primes() {
        for p in [2u8, 3, 5, 7, 17, 251] {
            assert_eq!(mod_inverse(0, p), None);
            for a in 1..p {
                let inv = mod_inverse(a, p).unwrap();
                assert_eq!(mul_mod(a, inv, p), 1, "a={} p={}", a, p);
            }
        }
    }
}
