//! Prime-field arithmetic.
//!
//! Two concrete representations live here:
//!
//! - [`Fp`]: a generic Montgomery-form field over `Uint<N>`, parameterized by
//!   a zero-sized [`FieldParams`] type carrying the modulus. Every
//!   Weierstrass base and scalar field, the Curve448/Ed448 fields and the
//!   Ed25519 scalar field are instances of it.
//! - [`Fe25519`]: the radix-2²⁵·⁵ representation specialised to
//!   `p = 2²⁵⁵ − 19`, used by Curve25519 and Ed25519.
//!
//! [`Fe448`] names the Goldilocks field `2⁴⁴⁸ − 2²²⁴ − 1` as an [`Fp`]
//! instance.
//!
//! Curve code is written once against the [`Field`] trait and monomorphized
//! per curve.
//!
//! # Invariants
//!
//! Values crossing a public boundary are always canonical: byte encodings
//! produced by [`Field::write_le_bytes`] lie in `[0, p)`, and decoding with
//! [`Field::from_le_bytes`] rejects anything that is not.

mod fe25519;
mod monty;

pub use fe25519::Fe25519;
pub use monty::{FieldParams, Fp};

pub(crate) use monty::field_params;

field_params!(
    /// `p = 2⁴⁴⁸ − 2²²⁴ − 1`, shared by Curve448 and Ed448.
    P448, 7, 56,
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
);

/// Element of the Curve448 / Ed448 base field.
pub type Fe448 = Fp<P448, 7>;

use crate::ct::{ConditionallySelectable, ConstantTimeEq};
use crate::error::Result;

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Widest canonical field encoding in the crate (P-521, 66 bytes).
pub(crate) const MAX_FIELD_BYTES: usize = 66;

/// Common interface of every prime field used by the curve modules.
///
/// Conditions returned as `u8` are `0`/`1` values suitable for
/// [`ConditionallySelectable`].
pub trait Field:
    Copy
    + Debug
    + PartialEq
    + ConditionallySelectable
    + ConstantTimeEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Length of the canonical byte encoding.
    const BYTES: usize;

    /// Bit length of the modulus.
    const MODULUS_BITS: usize;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Embeds a small integer.
    fn from_u64(value: u64) -> Self;

    /// Returns `1` if the element is zero.
    fn is_zero(&self) -> u8;

    /// Returns `1` if the canonical representative is odd.
    fn is_odd(&self) -> u8;

    /// Returns `1` if the canonical representative exceeds `(p − 1) / 2`.
    fn is_high(&self) -> u8;

    /// Computes `self²`.
    fn square(&self) -> Self;

    /// Computes `2 · self`.
    fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    /// [`Error::InvalidOperand`](crate::Error::InvalidOperand) when `self`
    /// is zero.
    fn invert(&self) -> Result<Self>;

    /// A square root of `self`, if one exists.
    ///
    /// Which of the two roots is returned is unspecified; callers pick the
    /// one they need by parity.
    fn sqrt(&self) -> Option<Self>;

    /// Decodes a canonical little-endian encoding of exactly
    /// [`Self::BYTES`] bytes.
    fn from_le_bytes(bytes: &[u8]) -> Option<Self>;

    /// Interprets `bytes` as a little-endian integer and reduces it modulo
    /// `p`.
    fn from_le_bytes_reduced(bytes: &[u8]) -> Self;

    /// Writes the canonical little-endian encoding into `out`, which must
    /// be [`Self::BYTES`] long.
    fn write_le_bytes(&self, out: &mut [u8]);

    /// Decodes a canonical big-endian encoding of exactly
    /// [`Self::BYTES`] bytes.
    fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::BYTES || bytes.len() > MAX_FIELD_BYTES {
            return None;
        }

        let mut le = [0u8; MAX_FIELD_BYTES];
        for (dst, src) in le.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }

        Self::from_le_bytes(&le[..bytes.len()])
    }

    /// Writes the canonical big-endian encoding into `out`.
    fn write_be_bytes(&self, out: &mut [u8]) {
        self.write_le_bytes(out);
        out.reverse();
    }
}
