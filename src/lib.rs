//! Finite-field arithmetic and a field-valued LFSR byte generator.
//!
//! `fieldstream` implements arithmetic over GF(p) and GF(p^n) in
//! polynomial representation, and on top of it a deterministic
//! pseudorandom byte generator driven by a k-term linear recurrence of
//! field elements.
//!
//! The layers, bottom up:
//!
//! - [`Poly`]: polynomials over Z/pZ with a runtime characteristic,
//!   with ring operations, long-division reduction, and irreducibility
//!   testing.
//! - [`FiniteField`]: a field descriptor, either `Prime(p)` or
//!   `Extension(p, modulus)`, shared by reference between elements.
//! - [`FieldElement`]: a reduced polynomial tagged with its owning
//!   field; all field operations enforce operand compatibility and
//!   report failures as [`FieldError`] values.
//! - [`Generator`]: the shifting-window recurrence that emits one byte
//!   per step.
//!
//! # Example
//!
//! ```
//! use fieldstream::Generator;
//!
//! let mut gen = Generator::for_bytes();
//! gen.configure_from_bytes(&[2, 1, 18, 125, 17, 8]).unwrap();
//!
//! let mut stream = [0u8; 16];
//! gen.generate(&mut stream).unwrap();
//! ```

pub mod error;
pub mod generator;
pub mod structures;
pub mod utils;

pub use error::FieldError;
pub use generator::{Generator, GeneratorError};
pub use structures::element::FieldElement;
pub use structures::field::FiniteField;
pub use structures::poly::Poly;
pub use utils::is_prime;
