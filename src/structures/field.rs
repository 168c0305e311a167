//! Finite-field descriptors.
//!
//! A [`FiniteField`] pairs a prime characteristic with an optional
//! irreducible modulus polynomial, describing either the prime field
//! GF(p) or the extension field GF(p^n). Descriptors are immutable after
//! construction and are shared by every element built from them via
//! `Rc<FiniteField>`.

use core::fmt;

use crate::error::FieldError;
use crate::structures::poly::Poly;
use crate::utils::is_prime;

/// Description of a finite field GF(p) or GF(p^n).
///
/// The prime field carries no modulus polynomial at all; prime-field
/// reduction works on coefficients mod `p` directly rather than routing
/// through polynomial division. Two descriptors are equal iff they have
/// the same characteristic and either both lack a modulus or have equal
/// moduli.
///
/// # Example
///
/// ```
/// use fieldstream::FiniteField;
///
/// let f7 = FiniteField::prime(7).unwrap();
/// assert_eq!(f7.order().unwrap(), 7);
///
/// // GF(2^8) with x^8 + x^7 + x^6 + x^5 + x^4 + x^3 + 1
/// let f256 = FiniteField::byte_field();
/// assert_eq!(f256.extension_degree(), 8);
/// assert_eq!(f256.order().unwrap(), 256);
/// assert_ne!(f7, f256);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum FiniteField {
    /// The prime field GF(p).
    Prime { p: u8 },
    /// The extension field GF(p^deg(modulus)).
    Extension { p: u8, modulus: Poly },
}

impl FiniteField {
    /// Construct the prime field GF(p).
    ///
    /// # Errors
    ///
    /// [`FieldError::NotPrime`] if `p` is composite.
    pub fn prime(p: u8) -> Result<Self, FieldError> {
        if !is_prime(p as u64) {
            return Err(FieldError::NotPrime(p));
        }
        Ok(Self::Prime { p })
    }

    /// Construct the extension field GF(p^n) with the given modulus
    /// polynomial, supplied as a big-endian coefficient array (highest
    /// power first), the layout configuration buffers use.
    ///
    /// The caller is responsible for supplying an irreducible polynomial;
    /// use [`FiniteField::extension_checked`] to have it verified.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotPrime`] if `p` is composite,
    /// [`FieldError::InvalidModulus`] if the modulus reduces to a constant
    /// or to zero.
    pub fn extension(p: u8, modulus_be: &[u64]) -> Result<Self, FieldError> {
        if !is_prime(p as u64) {
            return Err(FieldError::NotPrime(p));
        }
        let modulus = Poly::from_be_coeffs(p, modulus_be);
        match modulus.degree() {
            Some(d) if d >= 1 => Ok(Self::Extension { p, modulus }),
            _ => Err(FieldError::InvalidModulus),
        }
    }

    /// Construct GF(p^n), verifying that the modulus is irreducible.
    ///
    /// Same as [`FiniteField::extension`] plus Rabin's irreducibility
    /// test; rejects reducible moduli with [`FieldError::InvalidModulus`].
    pub fn extension_checked(p: u8, modulus_be: &[u64]) -> Result<Self, FieldError> {
        let field = Self::extension(p, modulus_be)?;
        match &field {
            Self::Extension { modulus, .. } if !modulus.is_irreducible() => {
                Err(FieldError::InvalidModulus)
            }
            _ => Ok(field),
        }
    }

    /// The fixed GF(2^8) field used for byte-stream generation, with the
    /// reduction polynomial x^8 + x^7 + x^6 + x^5 + x^4 + x^3 + 1.
    pub fn byte_field() -> Self {
        Self::Extension {
            p: 2,
            modulus: Poly::from_be_coeffs(2, &[1, 1, 1, 1, 1, 1, 0, 0, 1]),
        }
    }

    /// The field characteristic `p`.
    pub fn characteristic(&self) -> u8 {
        match self {
            Self::Prime { p } | Self::Extension { p, .. } => *p,
        }
    }

    /// The modulus polynomial, `None` for a prime field.
    pub fn modulus(&self) -> Option<&Poly> {
        match self {
            Self::Prime { .. } => None,
            Self::Extension { modulus, .. } => Some(modulus),
        }
    }

    /// Extension degree `n` of GF(p^n); 1 for a prime field.
    pub fn extension_degree(&self) -> usize {
        match self {
            Self::Prime { .. } => 1,
            // Degree >= 1 is a construction invariant.
            Self::Extension { modulus, .. } => modulus.degree().unwrap_or(1),
        }
    }

    /// Number of field elements, `p^n`.
    ///
    /// # Errors
    ///
    /// [`FieldError::FieldTooLarge`] when `p^n` exceeds `u128`.
    pub fn order(&self) -> Result<u128, FieldError> {
        (self.characteristic() as u128)
            .checked_pow(self.extension_degree() as u32)
            .ok_or(FieldError::FieldTooLarge)
    }

    /// Reduce a raw polynomial to this field's canonical element form:
    /// the constant term for a prime field, the remainder modulo the
    /// modulus polynomial for an extension field.
    pub(crate) fn reduce(&self, poly: Poly) -> Result<Poly, FieldError> {
        match self {
            Self::Prime { p } => Ok(Poly::constant(*p, poly.coeff(0))),
            Self::Extension { modulus, .. } => poly.rem(modulus),
        }
    }
}

impl fmt::Debug for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prime { p } => write!(f, "GF({})", p),
            Self::Extension { p, modulus } => {
                write!(f, "GF({}^{}; {:?})", p, self.extension_degree(), modulus)
            }
        }
    }
}

impl fmt::Display for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prime { p } => write!(f, "GF({})", p),
            Self::Extension { p, .. } => write!(f, "GF({}^{})", p, self.extension_degree()),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::FiniteField;
    use serde::de::Error as _;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct FieldRepr {
        p: u8,
        /// Big-endian modulus coefficients; `None` for a prime field.
        modulus: Option<Vec<u64>>,
    }

    impl serde::Serialize for FiniteField {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let modulus = self
                .modulus()
                .map(|m| m.coefficients().iter().rev().map(|&c| c as u64).collect());
            FieldRepr {
                p: self.characteristic(),
                modulus,
            }
            .serialize(serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for FiniteField {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let repr = FieldRepr::deserialize(deserializer)?;
            let field = match repr.modulus {
                None => FiniteField::prime(repr.p),
                Some(m) => FiniteField::extension(repr.p, &m),
            };
            field.map_err(D::Error::custom)
        }
    }
}
