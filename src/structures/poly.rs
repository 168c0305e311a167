use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::FieldError;
use crate::utils::{add_mod, mod_inverse, mul_mod, neg_mod, sub_mod};

/// Polynomial over Z/pZ with a runtime characteristic `p`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`, always reduced into `[0, p)`.
///
/// The zero polynomial is represented as an empty coefficient vector, so
/// every value has exactly one representation and trailing zeros never
/// survive a constructor or an arithmetic operation.
#[derive(Clone, PartialEq, Eq)]
pub struct Poly {
    p: u8,
    coeffs: Vec<u8>,
}

impl Poly {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// Each coefficient is reduced mod `p` and trailing zeros are removed.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldstream::Poly;
    ///
    /// // 3 + 2x + x^2 over Z/17Z
    /// let p = Poly::new(17, vec![3, 2, 1]);
    /// assert_eq!(p.degree(), Some(2));
    ///
    /// // coefficients wrap: 20 = 3 mod 17
    /// assert_eq!(Poly::new(17, vec![20]), Poly::new(17, vec![3]));
    /// ```
    pub fn new(p: u8, coeffs: Vec<u8>) -> Self {
        debug_assert!(p >= 2, "characteristic must be at least 2");
        let mut poly = Self {
            p,
            coeffs: coeffs.into_iter().map(|c| c % p).collect(),
        };
        poly.normalize();
        poly
    }

    /// Decode a big-endian integer array: `coeffs[0]` is the coefficient
    /// of the highest power. Each value is reduced mod `p`.
    ///
    /// This is the layout configuration buffers use for moduli and
    /// element coefficients.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldstream::Poly;
    ///
    /// // [1, 0, 3] is x^2 + 3
    /// let p = Poly::from_be_coeffs(17, &[1, 0, 3]);
    /// assert_eq!(p.degree(), Some(2));
    /// assert_eq!(p.coeff(0), 3);
    /// assert_eq!(p.coeff(2), 1);
    /// ```
    pub fn from_be_coeffs(p: u8, coeffs: &[u64]) -> Self {
        debug_assert!(p >= 2, "characteristic must be at least 2");
        let mut poly = Self {
            p,
            coeffs: coeffs.iter().rev().map(|&c| (c % p as u64) as u8).collect(),
        };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial.
    pub fn zero(p: u8) -> Self {
        Self {
            p,
            coeffs: Vec::new(),
        }
    }

    /// Create a constant polynomial.
    pub fn constant(p: u8, c: u8) -> Self {
        let c = c % p;
        if c == 0 {
            Self::zero(p)
        } else {
            Self { p, coeffs: vec![c] }
        }
    }

    /// Create the multiplicative unit (degree 0, value 1).
    pub fn one(p: u8) -> Self {
        Self { p, coeffs: vec![1] }
    }

    /// Create the polynomial `x`.
    pub fn x(p: u8) -> Self {
        Self {
            p,
            coeffs: vec![0, 1],
        }
    }

    /// The ring characteristic `p`.
    pub fn characteristic(&self) -> u8 {
        self.p
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if this is the multiplicative unit.
    pub fn is_one(&self) -> bool {
        self.coeffs == [1]
    }

    /// Degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise where
    /// `n` is the highest power with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Leading coefficient, `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<u8> {
        self.coeffs.last().copied()
    }

    /// Coefficient of `x^i`, zero beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> u8 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// All coefficients in ascending order.
    pub fn coefficients(&self) -> &[u8] {
        &self.coeffs
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }

    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// Returns `None` for the zero polynomial or when the leading
    /// coefficient has no inverse mod `p`.
    pub fn monic(&self) -> Option<Self> {
        let lc = self.leading_coeff()?;
        let inv = mod_inverse(lc, self.p)?;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| mul_mod(c, inv, self.p))
            .collect();
        Some(Self::new(self.p, coeffs))
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidModulus`] when the divisor is zero or its
    /// leading coefficient is not invertible mod `p` (only possible for a
    /// composite characteristic).
    ///
    /// # Example
    ///
    /// ```
    /// use fieldstream::Poly;
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = Poly::new(17, vec![1, 2, 1]);
    /// let divisor = Poly::new(17, vec![1, 1]);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), FieldError> {
        debug_assert_eq!(self.p, divisor.p, "mixed characteristics");

        let divisor_deg = divisor.degree().ok_or(FieldError::InvalidModulus)?;
        let lc = divisor.leading_coeff().ok_or(FieldError::InvalidModulus)?;
        let lc_inv = mod_inverse(lc, self.p).ok_or(FieldError::InvalidModulus)?;

        let self_deg = match self.degree() {
            None => return Ok((Self::zero(self.p), Self::zero(self.p))),
            Some(d) if d < divisor_deg => return Ok((Self::zero(self.p), self.clone())),
            Some(d) => d,
        };

        let mut rem = self.coeffs.clone();
        let mut quotient = vec![0u8; self_deg - divisor_deg + 1];

        // Cancel the leading term from the top down.
        for i in (divisor_deg..=self_deg).rev() {
            let lead = rem[i];
            if lead == 0 {
                continue;
            }
            let q = mul_mod(lead, lc_inv, self.p);
            quotient[i - divisor_deg] = q;
            for (j, &dc) in divisor.coeffs.iter().enumerate() {
                let idx = i - divisor_deg + j;
                rem[idx] = sub_mod(rem[idx], mul_mod(q, dc, self.p), self.p);
            }
        }

        Ok((Self::new(self.p, quotient), Self::new(self.p, rem)))
    }

    /// Remainder of division by `modulus`.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidModulus`] for a zero modulus or a leading
    /// coefficient that is not invertible mod `p`.
    pub fn rem(&self, modulus: &Self) -> Result<Self, FieldError> {
        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// Greatest common divisor of two polynomials.
    ///
    /// The result is monic unless both inputs are zero.
    pub fn gcd(a: &Self, b: &Self) -> Self {
        if b.is_zero() {
            return a.monic().unwrap_or_else(|| Self::zero(a.p));
        }

        let r = a.rem(b).unwrap_or_else(|_| Self::zero(a.p));
        Self::gcd(b, &r)
    }

    /// Compute `base^exp mod self` using repeated squaring.
    ///
    /// Returns `None` if self is zero or not usable as a modulus.
    pub fn powmod(&self, base: &Self, exp: u64) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        if exp == 0 {
            return Some(Self::one(self.p));
        }

        let mut b = base.rem(self).ok()?;
        let mut result = Self::one(self.p);
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = (&result * &b).rem(self).ok()?;
            }
            b = (&b * &b).rem(self).ok()?;
            e >>= 1;
        }

        Some(result)
    }

    /// Test if this polynomial is irreducible over Z/pZ using Rabin's
    /// algorithm (`p` must be prime for the result to be meaningful).
    ///
    /// A polynomial f(x) of degree n over F_p is irreducible if and only if:
    /// 1. `x^{p^n} ≡ x (mod f(x))`
    /// 2. `gcd(x^{p^{n/q}} - x, f(x)) = 1` for each prime divisor q of n
    ///
    /// Returns `false` for constant or zero polynomials.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldstream::Poly;
    ///
    /// // x^2 - 3 is irreducible over F_17 (3 is not a quadratic residue)
    /// let f = Poly::new(17, vec![14, 0, 1]);
    /// assert!(f.is_irreducible());
    ///
    /// // x^2 - 4 = (x - 2)(x + 2) is reducible
    /// let g = Poly::new(17, vec![13, 0, 1]);
    /// assert!(!g.is_irreducible());
    /// ```
    pub fn is_irreducible(&self) -> bool {
        let n = match self.degree() {
            None => return false,    // zero polynomial
            Some(0) => return false, // constant polynomial
            Some(1) => return true,  // linear polynomials are always irreducible
            Some(d) => d,
        };

        // Make monic for cleaner computation (irreducibility is preserved)
        let f = match self.monic() {
            Some(m) => m,
            None => return false,
        };

        let mut h = Self::x(self.p); // h = x^{p^i}, starting with i = 0
        let prime_divisors = Self::prime_divisors(n);

        for i in 1..=n {
            h = match f.powmod(&h, self.p as u64) {
                Some(r) => r,
                None => return false,
            };

            // At i = n/q for each prime divisor q, check gcd(h - x, f) = 1.
            for &q in &prime_divisors {
                if n == i * q {
                    let h_minus_x = &h - &Self::x(self.p);
                    let g = Self::gcd(&h_minus_x, &f);
                    if g.degree() != Some(0) {
                        return false;
                    }
                }
            }
        }

        // h is now x^{p^n}; f is irreducible only if h = x (mod f).
        (&h - &Self::x(self.p)).is_zero()
    }

    /// Find all prime divisors of n.
    fn prime_divisors(mut n: usize) -> Vec<usize> {
        let mut primes = Vec::new();
        let mut d = 2;

        while d <= n / d {
            if n % d == 0 {
                primes.push(d);
                while n % d == 0 {
                    n /= d;
                }
            }
            d += 1;
        }

        if n > 1 {
            primes.push(n);
        }

        primes
    }

    /// Unpack one byte into a mod-2 polynomial: bit `i` of `b` becomes
    /// the coefficient of `x^i`.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldstream::Poly;
    ///
    /// // 0b1011 = x^3 + x + 1
    /// let p = Poly::from_byte(0b1011);
    /// assert_eq!(p.degree(), Some(3));
    /// assert_eq!(p.characteristic(), 2);
    /// ```
    pub fn from_byte(b: u8) -> Self {
        let coeffs = (0..8).map(|i| (b >> i) & 1).collect();
        Self::new(2, coeffs)
    }

    /// Pack a mod-2 polynomial of degree < 8 into one byte, one bit per
    /// coefficient.
    ///
    /// # Errors
    ///
    /// [`FieldError::UnsupportedEncoding`] unless the characteristic is 2
    /// and the degree is below 8.
    pub fn to_byte(&self) -> Result<u8, FieldError> {
        if self.p != 2 || self.coeffs.len() > 8 {
            return Err(FieldError::UnsupportedEncoding);
        }
        let mut b = 0u8;
        for (i, &c) in self.coeffs.iter().enumerate() {
            b |= c << i;
        }
        Ok(b)
    }
}

/* ---- Arithmetic operators ---- */

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        debug_assert_eq!(self.p, rhs.p, "mixed characteristics");
        let max_len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(max_len);

        for i in 0..max_len {
            coeffs.push(add_mod(self.coeff(i), rhs.coeff(i), self.p));
        }

        Poly::new(self.p, coeffs)
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        debug_assert_eq!(self.p, rhs.p, "mixed characteristics");
        let max_len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = Vec::with_capacity(max_len);

        for i in 0..max_len {
            coeffs.push(sub_mod(self.coeff(i), rhs.coeff(i), self.p));
        }

        Poly::new(self.p, coeffs)
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        let coeffs = self.coeffs.iter().map(|&c| neg_mod(c, self.p)).collect();
        Poly {
            p: self.p,
            coeffs,
        }
    }
}

impl Mul for &Poly {
    type Output = Poly;

    /// Full convolution with no reduction; the degree may grow.
    fn mul(self, rhs: &Poly) -> Poly {
        debug_assert_eq!(self.p, rhs.p, "mixed characteristics");
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero(self.p);
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        // Accumulate in u32: at most 255 products of values < 2^8 each.
        let mut acc = vec![0u32; n + m - 1];

        for i in 0..n {
            for j in 0..m {
                acc[i + j] += self.coeffs[i] as u32 * rhs.coeffs[j] as u32;
            }
        }

        let coeffs = acc.into_iter().map(|c| (c % self.p as u32) as u8).collect();
        Poly::new(self.p, coeffs)
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff == 1 => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff)?,
                _ if coeff == 1 => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Poly;
    use serde::de::Error as _;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct PolyRepr {
        p: u8,
        coeffs: Vec<u8>,
    }

    impl serde::Serialize for Poly {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            PolyRepr {
                p: self.characteristic(),
                coeffs: self.coefficients().to_vec(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for Poly {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let repr = PolyRepr::deserialize(deserializer)?;
            if repr.p < 2 {
                return Err(D::Error::custom("characteristic must be at least 2"));
            }
            Ok(Poly::new(repr.p, repr.coeffs))
        }
    }
}
