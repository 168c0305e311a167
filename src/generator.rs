//! Deterministic byte generator driven by a linear recurrence over
//! field elements.
//!
//! The generator is a k-term linear feedback shift register generalized
//! from bits to arbitrary finite-field values: it holds a sliding window
//! `x` of the last `k` elements, fixed tap coefficients `a`, and an
//! additive constant `c`. Each step computes
//!
//! ```text
//! x_new = c + a[0]*x[0] + a[1]*x[1] + ... + a[k-1]*x[k-1]
//! ```
//!
//! shifts the window left by one (discarding `x[0]`, appending `x_new`),
//! and emits `x_new` packed into one byte. The design guarantees
//! bit-exact reproducibility for a given configuration; it makes no
//! periodicity or randomness-quality claim.

use std::rc::Rc;

use thiserror::Error;

use crate::error::FieldError;
use crate::structures::element::FieldElement;
use crate::structures::field::FiniteField;

/// Failure of a generator configuration or generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A step was requested before a successful configuration.
    #[error("generator has not been configured")]
    NotConfigured,

    /// The configuration buffer is too short, empty, or inconsistent.
    #[error("malformed configuration buffer")]
    MalformedConfiguration,

    /// An underlying field-arithmetic failure.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// A linear-recurrence byte generator over a finite field.
///
/// The generator starts unconfigured (`k == 0`); [`Generator::configure`]
/// or [`Generator::configure_from_bytes`] installs the taps, the initial
/// window, and the constant atomically. Both `configure` and
/// [`Generator::step`] take `&mut self`, so at most one operation can be
/// in flight per generator.
///
/// # Example
///
/// ```
/// use fieldstream::Generator;
///
/// let mut gen = Generator::for_bytes();
/// // k = 2, taps [1, 18], window [125, 17], constant 8
/// gen.configure_from_bytes(&[2, 1, 18, 125, 17, 8]).unwrap();
///
/// let mut out = [0u8; 4];
/// gen.generate(&mut out).unwrap();
///
/// // Identical configurations replay the identical stream.
/// let mut replay = Generator::for_bytes();
/// replay.configure_from_bytes(&[2, 1, 18, 125, 17, 8]).unwrap();
/// let mut out2 = [0u8; 4];
/// replay.generate(&mut out2).unwrap();
/// assert_eq!(out, out2);
/// ```
pub struct Generator {
    /// Fixed tap coefficients, `a.len() == k`.
    a: Vec<FieldElement>,
    /// Sliding state window, most recent element last.
    x: Vec<FieldElement>,
    /// Additive constant; `None` while unconfigured.
    c: Option<FieldElement>,
    field: Rc<FiniteField>,
}

impl Generator {
    /// Create a fresh unconfigured generator bound to `field`.
    pub fn new(field: Rc<FiniteField>) -> Self {
        Self {
            a: Vec::new(),
            x: Vec::new(),
            c: None,
            field,
        }
    }

    /// Create an unconfigured generator over the fixed GF(2^8) field
    /// used by the byte-stream configuration format.
    pub fn for_bytes() -> Self {
        Self::new(Rc::new(FiniteField::byte_field()))
    }

    /// The field this generator operates in.
    pub fn field(&self) -> &Rc<FiniteField> {
        &self.field
    }

    /// Window width `k`; zero while unconfigured.
    pub fn k(&self) -> usize {
        self.a.len()
    }

    /// Whether the generator holds a complete configuration.
    pub fn is_configured(&self) -> bool {
        self.c.is_some()
    }

    /// The current state window, oldest element first.
    pub fn window(&self) -> &[FieldElement] {
        &self.x
    }

    /// The tap coefficients.
    pub fn coefficients(&self) -> &[FieldElement] {
        &self.a
    }

    /// The additive constant, if configured.
    pub fn constant(&self) -> Option<&FieldElement> {
        self.c.as_ref()
    }

    /// Install a complete generator state: taps `a`, initial window `x`,
    /// and constant `c`.
    ///
    /// The new state is validated in full before anything is replaced;
    /// on error the previous configuration (or unconfigured state) is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::MalformedConfiguration`] unless
    /// `1 <= a.len() == x.len() <= 255`;
    /// [`FieldError::FieldMismatch`] if any supplied element belongs to a
    /// field other than the generator's.
    pub fn configure(
        &mut self,
        a: Vec<FieldElement>,
        x: Vec<FieldElement>,
        c: FieldElement,
    ) -> Result<(), GeneratorError> {
        let k = a.len();
        if k == 0 || k > 255 || x.len() != k {
            return Err(GeneratorError::MalformedConfiguration);
        }

        for elem in a.iter().chain(x.iter()).chain(core::iter::once(&c)) {
            if !Rc::ptr_eq(elem.field(), &self.field) && **elem.field() != *self.field {
                return Err(FieldError::FieldMismatch.into());
            }
        }

        // Candidate validated in full; commit replaces the old buffers.
        self.a = a;
        self.x = x;
        self.c = Some(c);
        Ok(())
    }

    /// Decode and install a configuration from its byte layout:
    /// `[k, a_0..a_{k-1}, x_0..x_{k-1}, c]`, each value one byte decoded
    /// as an element of the generator's field.
    ///
    /// Trailing bytes past `2k+2` are ignored, matching a transport that
    /// hands over a fixed-size write buffer.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::MalformedConfiguration`] if the buffer is
    /// shorter than `2k+2` or `k` is zero; any decode failure surfaces as
    /// the underlying [`FieldError`]. In every error case the prior state
    /// is preserved.
    pub fn configure_from_bytes(&mut self, buf: &[u8]) -> Result<(), GeneratorError> {
        let &k = buf.first().ok_or(GeneratorError::MalformedConfiguration)?;
        let k = k as usize;
        if k == 0 || buf.len() < 2 * k + 2 {
            return Err(GeneratorError::MalformedConfiguration);
        }

        let mut a = Vec::with_capacity(k);
        let mut x = Vec::with_capacity(k);
        for i in 1..=k {
            a.push(FieldElement::from_byte(&self.field, buf[i])?);
            x.push(FieldElement::from_byte(&self.field, buf[i + k])?);
        }
        let c = FieldElement::from_byte(&self.field, buf[2 * k + 1])?;

        self.configure(a, x, c)
    }

    /// Advance the recurrence by one step and emit one byte.
    ///
    /// Computes `x_new = c + sum(a[i] * x[i])` left-to-right, encodes it,
    /// and only then shifts the window: the oldest element is discarded
    /// and `x_new` appended. Any arithmetic or encoding failure aborts
    /// the step with the window unchanged.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::NotConfigured`] before a successful
    /// configuration; any [`FieldError`] from the summation or the byte
    /// encoding.
    pub fn step(&mut self) -> Result<u8, GeneratorError> {
        let c = self.c.as_ref().ok_or(GeneratorError::NotConfigured)?;

        let mut acc = FieldElement::zero(&self.field);
        for (a_i, x_i) in self.a.iter().zip(self.x.iter()) {
            acc = acc.add(&a_i.mul(x_i)?)?;
        }
        let x_new = acc.add(c)?;
        let byte = x_new.to_byte()?;

        // Full success: commit the window shift and the output together.
        self.x.remove(0);
        self.x.push(x_new);
        Ok(byte)
    }

    /// Fill `out` with generated bytes, one [`Generator::step`] per byte.
    pub fn generate(&mut self, out: &mut [u8]) -> Result<(), GeneratorError> {
        for b in out.iter_mut() {
            *b = self.step()?;
        }
        Ok(())
    }

    /// Drop the configuration, returning to the unconfigured state.
    /// The field binding is kept, so the generator can be reconfigured.
    pub fn reset(&mut self) {
        self.a = Vec::new();
        self.x = Vec::new();
        self.c = None;
    }
}
