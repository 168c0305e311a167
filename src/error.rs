//! Error types for field construction and element arithmetic.

use thiserror::Error;

/// Failure of a field-construction or element-arithmetic operation.
///
/// Every fallible operation in the arithmetic layer returns a
/// distinguishable error instead of a sentinel value, so a failure can
/// never be confused with a valid zero element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Binary operation over elements of two different fields.
    #[error("operands belong to different fields")]
    FieldMismatch,

    /// Reduction attempted against a zero or degenerate modulus, or a
    /// modulus rejected at field construction.
    #[error("modulus is zero or unusable for reduction")]
    InvalidModulus,

    /// Inversion or division of the zero element.
    #[error("division or inversion of the zero element")]
    DivisionByZero,

    /// The requested characteristic is not a prime number.
    #[error("characteristic {0} is not prime")]
    NotPrime(u8),

    /// The byte codec is only defined for binary fields GF(2^n), n <= 8.
    #[error("byte codec requires a binary field of degree at most 8")]
    UnsupportedEncoding,

    /// The multiplicative-group order does not fit the exponent domain.
    #[error("field order exceeds the supported exponent range")]
    FieldTooLarge,
}
