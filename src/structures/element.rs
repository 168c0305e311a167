//! Field elements: reduced polynomials bound to their owning field.
//!
//! Every arithmetic operation validates that both operands share one
//! field descriptor and returns [`FieldError::FieldMismatch`] otherwise;
//! cross-field arithmetic is a contract error, never a silent truncation.

use core::fmt;
use std::rc::Rc;

use crate::error::FieldError;
use crate::structures::field::FiniteField;
use crate::structures::poly::Poly;

/// An element of a finite field: a polynomial already reduced modulo the
/// field's modulus (a constant for a prime field), plus a shared
/// reference to the field it belongs to.
///
/// Cloning is a deep value copy of the polynomial that shares the field
/// descriptor, so elements are cheap to fan out into buffers.
///
/// # Example
///
/// ```
/// use fieldstream::{FieldElement, FiniteField};
/// use std::rc::Rc;
///
/// let field = Rc::new(FiniteField::byte_field());
/// let a = FieldElement::from_byte(&field, 0x57).unwrap();
/// let b = FieldElement::from_byte(&field, 0x83).unwrap();
///
/// let prod = a.mul(&b).unwrap();
/// let back = prod.div(&b).unwrap();
/// assert_eq!(back, a);
/// ```
#[derive(Clone)]
pub struct FieldElement {
    poly: Poly,
    field: Rc<FiniteField>,
}

impl FieldElement {
    /// The additive identity of `field`.
    pub fn zero(field: &Rc<FiniteField>) -> Self {
        Self {
            poly: Poly::zero(field.characteristic()),
            field: Rc::clone(field),
        }
    }

    /// The multiplicative identity of `field`.
    pub fn one(field: &Rc<FiniteField>) -> Self {
        Self {
            poly: Poly::one(field.characteristic()),
            field: Rc::clone(field),
        }
    }

    /// Build an element from a big-endian coefficient array (highest
    /// power first), reducing it into the field.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidModulus`] if the field's modulus cannot be
    /// used for reduction.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldstream::{FieldElement, FiniteField};
    /// use std::rc::Rc;
    ///
    /// let field = Rc::new(FiniteField::prime(7).unwrap());
    /// // Higher-power coefficients fall away in the prime field.
    /// let a = FieldElement::from_coeffs(&field, &[3, 5]).unwrap();
    /// let b = FieldElement::from_coeffs(&field, &[5]).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn from_coeffs(field: &Rc<FiniteField>, coeffs_be: &[u64]) -> Result<Self, FieldError> {
        let raw = Poly::from_be_coeffs(field.characteristic(), coeffs_be);
        let poly = field.reduce(raw)?;
        Ok(Self {
            poly,
            field: Rc::clone(field),
        })
    }

    /// Decode one byte into an element of a binary field, bit `i` of the
    /// byte becoming the coefficient of `x^i`, then reduce.
    ///
    /// # Errors
    ///
    /// [`FieldError::UnsupportedEncoding`] unless the field is GF(2^n)
    /// with n <= 8 (or GF(2) itself).
    pub fn from_byte(field: &Rc<FiniteField>, b: u8) -> Result<Self, FieldError> {
        if field.characteristic() != 2 || field.extension_degree() > 8 {
            return Err(FieldError::UnsupportedEncoding);
        }
        let poly = field.reduce(Poly::from_byte(b))?;
        Ok(Self {
            poly,
            field: Rc::clone(field),
        })
    }

    /// Pack this element of a binary field into one byte, one bit per
    /// coefficient.
    ///
    /// # Errors
    ///
    /// [`FieldError::UnsupportedEncoding`] unless the field is binary
    /// with degree at most 8.
    pub fn to_byte(&self) -> Result<u8, FieldError> {
        self.poly.to_byte()
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &Rc<FiniteField> {
        &self.field
    }

    /// The reduced polynomial representation.
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    /// Check if this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }

    /// Check if this is the multiplicative identity.
    pub fn is_one(&self) -> bool {
        self.poly.is_one()
    }

    /// Check that two elements share a field descriptor.
    ///
    /// Pointer equality is the fast path; structurally equal descriptors
    /// behind different `Rc`s also compare compatible.
    fn ensure_same_field(&self, other: &Self) -> Result<(), FieldError> {
        if Rc::ptr_eq(&self.field, &other.field) || self.field == other.field {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    fn with_poly(&self, poly: Poly) -> Self {
        Self {
            poly,
            field: Rc::clone(&self.field),
        }
    }

    /// Field addition.
    ///
    /// Coefficient-wise addition is already mod p and cannot raise the
    /// degree, so the sum needs no further reduction.
    ///
    /// # Errors
    ///
    /// [`FieldError::FieldMismatch`] when the operands' fields differ.
    pub fn add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.ensure_same_field(rhs)?;
        Ok(self.with_poly(&self.poly + &rhs.poly))
    }

    /// Additive inverse.
    pub fn neg(&self) -> Self {
        self.with_poly(-&self.poly)
    }

    /// Field subtraction, `self + (-rhs)`.
    ///
    /// # Errors
    ///
    /// [`FieldError::FieldMismatch`] when the operands' fields differ.
    pub fn sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.add(&rhs.neg())
    }

    /// Field multiplication: full polynomial product, then reduction
    /// modulo the field's modulus.
    ///
    /// # Errors
    ///
    /// [`FieldError::FieldMismatch`] when the operands' fields differ.
    pub fn mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.ensure_same_field(rhs)?;
        let product = &self.poly * &rhs.poly;
        Ok(self.with_poly(self.field.reduce(product)?))
    }

    /// Field division, `self * rhs^(-1)`.
    ///
    /// # Errors
    ///
    /// [`FieldError::DivisionByZero`] for a zero divisor,
    /// [`FieldError::FieldMismatch`] when the operands' fields differ.
    pub fn div(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.ensure_same_field(rhs)?;
        if rhs.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        self.mul(&rhs.invert()?)
    }

    /// Multiplicative inverse via the field generalization of Fermat's
    /// little theorem: every non-zero `a` satisfies `a^(ord-1) = 1`, so
    /// `a^(ord-2)` is its inverse, where `ord = p^n` is the field order.
    ///
    /// # Errors
    ///
    /// [`FieldError::DivisionByZero`] for the zero element,
    /// [`FieldError::FieldTooLarge`] when the order overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldstream::{FieldElement, FiniteField};
    /// use std::rc::Rc;
    ///
    /// let field = Rc::new(FiniteField::byte_field());
    /// let a = FieldElement::from_byte(&field, 0x02).unwrap();
    /// let inv = a.invert().unwrap();
    /// assert!(a.mul(&inv).unwrap().is_one());
    /// ```
    pub fn invert(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let ord = self.field.order()?;
        self.pow_unsigned(ord - 2)
    }

    /// Raise to a signed integer power.
    ///
    /// Non-negative exponents use square-and-multiply directly; negative
    /// exponents invert first and then raise to `-n`.
    ///
    /// # Errors
    ///
    /// [`FieldError::DivisionByZero`] when raising zero to a negative
    /// power.
    pub fn pow(&self, n: i64) -> Result<Self, FieldError> {
        if n < 0 {
            self.invert()?.pow_unsigned(n.unsigned_abs() as u128)
        } else {
            self.pow_unsigned(n as u128)
        }
    }

    /// Square-and-multiply with zero/one short-circuits: zero stays zero
    /// and one stays one for every exponent.
    fn pow_unsigned(&self, mut e: u128) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Ok(Self::zero(&self.field));
        }
        if self.is_one() {
            return Ok(Self::one(&self.field));
        }

        let mut result = Self::one(&self.field);
        let mut base = self.clone();

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base)?;
            }
            base = base.mul(&base)?;
            e >>= 1;
        }

        Ok(result)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.field, &other.field) || self.field == other.field)
            && self.poly == other.poly
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} in {}", self.poly, self.field)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
