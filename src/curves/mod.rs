//! Elliptic-curve groups.
//!
//! Three curve families are supported, each in its own module and each
//! generic over a zero-sized parameter type describing one concrete curve:
//!
//! - [`weierstrass`]: `y² = x³ + ax + b` (secp256k1, P-256, P-384, P-521),
//!   projective coordinates with complete addition formulas and a
//!   fixed-window scalar multiplication.
//! - [`montgomery`]: `v² = u³ + Au² + u` (Curve25519, Curve448), x-only
//!   Montgomery ladder followed by recovery of `v`.
//! - [`edwards`]: `ax² + y² = 1 + dx²y²` (Ed25519, Ed448), extended
//!   coordinates with the unified addition law and a Montgomery ladder over
//!   complete additions.
//!
//! Every family exposes an affine point type implementing [`CurveGroup`],
//! which is the surface the public API is written against. Points cross
//! that surface only in affine form; projective representations stay
//! internal.

pub mod edwards;
pub mod montgomery;
pub mod weierstrass;

use crate::error::{Error, Result};
use crate::field::Field;

/// Group operations shared by every supported curve.
///
/// Scalars are passed as fixed-length byte strings (`SCALAR_BYTES` long)
/// in the curve's conventional byte order: big-endian for Weierstrass
/// curves, little-endian for Montgomery and Edwards curves. They are used
/// as-is, without reduction modulo the group order.
pub trait CurveGroup: Sized + Copy + PartialEq + core::fmt::Debug {
    /// Human-readable curve name.
    const NAME: &'static str;

    /// Length of a scalar accepted by [`multiply`](Self::multiply).
    const SCALAR_BYTES: usize;

    /// The neutral element.
    fn identity() -> Self;

    /// The standard base point.
    fn generator() -> Self;

    /// Returns `true` for the neutral element.
    fn is_identity(&self) -> bool;

    /// Group law.
    fn add(&self, other: &Self) -> Self;

    /// `2 · self`.
    fn double(&self) -> Self;

    /// `k · self` in time independent of `k`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] when `scalar` is not `SCALAR_BYTES` long.
    fn multiply(&self, scalar: &[u8]) -> Result<Self>;

    /// Encodes the point, compressed or not, in the curve's native format.
    fn to_bytes(&self, compressed: bool) -> Result<Vec<u8>>;

    /// Decodes and validates a point.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Rejects scalars of the wrong length.
pub(crate) fn check_scalar_len<G: CurveGroup>(scalar: &[u8]) -> Result<()> {
    if scalar.len() != G::SCALAR_BYTES {
        return Err(Error::length("curve scalar length", scalar.len()));
    }
    Ok(())
}

/// Little-endian coordinate followed by a sign bit in bit 7 of the last
/// byte.
///
/// `len` is either `F::BYTES` (the sign bit overlays an unused top bit of
/// the coordinate, as in Ed25519) or `F::BYTES + 1` (a dedicated trailing
/// byte, as in Ed448).
pub(crate) fn encode_with_sign<F: Field>(coord: &F, sign: u8, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    coord.write_le_bytes(&mut out[..F::BYTES]);
    out[len - 1] |= sign << 7;
    out
}

/// Inverse of [`encode_with_sign`]; rejects non-canonical coordinates and
/// non-zero padding.
pub(crate) fn decode_with_sign<F: Field>(bytes: &[u8], len: usize) -> Result<(F, u8)> {
    if bytes.len() != len {
        return Err(Error::length("signed coordinate encoding", bytes.len()));
    }

    let sign = bytes[len - 1] >> 7;

    let mut buf = bytes.to_vec();
    buf[len - 1] &= 0x7f;
    if buf[F::BYTES..].iter().any(|&b| b != 0) {
        return Err(Error::InvalidPoint);
    }

    let coord = F::from_le_bytes(&buf[..F::BYTES]).ok_or(Error::InvalidPoint)?;
    Ok((coord, sign))
}

/// Little-endian `x || y`.
pub(crate) fn encode_pair<F: Field>(x: &F, y: &F) -> Vec<u8> {
    let mut out = vec![0u8; 2 * F::BYTES];
    let (lo, hi) = out.split_at_mut(F::BYTES);
    x.write_le_bytes(lo);
    y.write_le_bytes(hi);
    out
}

/// Inverse of [`encode_pair`]; rejects non-canonical coordinates.
pub(crate) fn decode_pair<F: Field>(bytes: &[u8]) -> Result<(F, F)> {
    if bytes.len() != 2 * F::BYTES {
        return Err(Error::length("coordinate pair encoding", bytes.len()));
    }

    let (lo, hi) = bytes.split_at(F::BYTES);
    let x = F::from_le_bytes(lo).ok_or(Error::InvalidPoint)?;
    let y = F::from_le_bytes(hi).ok_or(Error::InvalidPoint)?;
    Ok((x, y))
}
