//! Twisted Edwards curves `ax² + y² = 1 + dx²y²` (Ed25519, Ed448).
//!
//! Points are kept in extended coordinates `(X : Y : Z : T)` with
//! `x = X/Z`, `y = Y/Z`, `xy = T/Z`. With `a` a square and `d` a non-square
//! the unified addition law below is complete, so doubling is just
//! `P + P` and the scalar multiplication can be a plain Montgomery ladder
//! over additions: one addition and one doubling per scalar bit, with a
//! masked swap deciding which accumulator receives which.
//!
//! Encodings follow RFC 8032: `y` little-endian with the parity of `x` in the
//! top bit of the last byte (32 bytes for Ed25519, 57 for Ed448). The
//! uncompressed form is `x || y`, little-endian.

mod params;

pub use params::{Ed448, Ed25519};

use super::{CurveGroup, check_scalar_len, decode_pair, decode_with_sign, encode_pair, encode_with_sign};

use crate::ct::{ConditionallySelectable, ConstantTimeEq};
use crate::error::{Error, Result};
use crate::field::Field;

use std::fmt::Debug;

/// Parameters of one twisted Edwards curve.
pub trait EdwardsCurve: Copy + Debug + Default + PartialEq + 'static {
    /// Base field.
    type Base: Field;

    /// Scalar field `ℤ/Lℤ` of the prime-order subgroup.
    type Scalar: Field;

    /// Curve name.
    const NAME: &'static str;

    /// Coefficient `a`.
    const A: Self::Base;

    /// Coefficient `d`.
    const D: Self::Base;

    /// Affine base point.
    const GENERATOR: (Self::Base, Self::Base);

    /// Scalar length (little-endian).
    const SCALAR_BYTES: usize;

    /// Length of the RFC 8032 point encoding.
    const ENCODED_BYTES: usize;
}

/// Affine point `(x, y)`; the identity is `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffinePoint<C: EdwardsCurve> {
    x: C::Base,
    y: C::Base,
}

/// Extended point `(X : Y : Z : T)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExtendedPoint<C: EdwardsCurve> {
    x: C::Base,
    y: C::Base,
    z: C::Base,
    t: C::Base,
}

impl<C: EdwardsCurve> AffinePoint<C> {
    /// The neutral element `(0, 1)`.
    pub const IDENTITY: Self = Self {
        x: <C::Base as Field>::ZERO,
        y: <C::Base as Field>::ONE,
    };

    /// Builds a point from affine coordinates, checking the curve equation.
    pub fn from_coordinates(x: C::Base, y: C::Base) -> Result<Self> {
        let (x2, y2) = (x.square(), y.square());
        if C::A * x2 + y2 != C::Base::ONE + C::D * x2 * y2 {
            tracing::debug!(curve = C::NAME, "point is not on the curve");
            return Err(Error::InvalidPoint);
        }
        Ok(Self { x, y })
    }

    /// Affine coordinates.
    pub fn coordinates(&self) -> (C::Base, C::Base) {
        (self.x, self.y)
    }

    pub(crate) fn to_extended(self) -> ExtendedPoint<C> {
        ExtendedPoint {
            x: self.x,
            y: self.y,
            z: C::Base::ONE,
            t: self.x * self.y,
        }
    }

    /// RFC 8032 decoding: `x² = (y² − 1) / (d·y² − a)`, root chosen by the
    /// sign bit.
    fn decompress(bytes: &[u8]) -> Result<Self> {
        let (y, x_is_odd) = decode_with_sign::<C::Base>(bytes, C::ENCODED_BYTES)?;

        let y2 = y.square();
        let num = y2 - C::Base::ONE;
        let den = C::D * y2 - C::A;

        let x = den
            .invert()
            .ok()
            .and_then(|inv| (num * inv).sqrt())
            .ok_or_else(|| {
                tracing::debug!(curve = C::NAME, "y-coordinate is not on the curve");
                Error::InvalidPoint
            })?;

        if x.is_zero() == 1 && x_is_odd == 1 {
            tracing::debug!(curve = C::NAME, "sign bit set for x = 0");
            return Err(Error::InvalidPoint);
        }

        let x = C::Base::conditional_select(&x, &-x, x.is_odd() ^ x_is_odd);
        Ok(Self { x, y })
    }

    pub(crate) fn compress(&self) -> Vec<u8> {
        encode_with_sign(&self.y, self.x.is_odd(), C::ENCODED_BYTES)
    }
}

impl<C: EdwardsCurve> ExtendedPoint<C> {
    pub(crate) const IDENTITY: Self = Self {
        x: <C::Base as Field>::ZERO,
        y: <C::Base as Field>::ONE,
        z: <C::Base as Field>::ONE,
        t: <C::Base as Field>::ZERO,
    };

    /// Unified addition (Hisil–Wong–Carter–Dawson 2008).
    pub(crate) fn add(&self, other: &Self) -> Self {
        let a = self.x * other.x;
        let b = self.y * other.y;
        let c = C::D * self.t * other.t;
        let d = self.z * other.z;
        let e = (self.x + self.y) * (other.x + other.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - C::A * a;

        Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    /// Montgomery ladder over the `8 · len` bits of a little-endian scalar.
    pub(crate) fn mul(&self, scalar_le: &[u8]) -> Self {
        let mut r0 = Self::IDENTITY;
        let mut r1 = *self;

        for t in (0..8 * scalar_le.len()).rev() {
            let bit = (scalar_le[t / 8] >> (t % 8)) & 1;
            Self::conditional_swap(&mut r0, &mut r1, bit);
            r1 = r0.add(&r1);
            r0 = r0.double();
            Self::conditional_swap(&mut r0, &mut r1, bit);
        }

        r0
    }

    pub(crate) fn to_affine(self) -> AffinePoint<C> {
        // Z never vanishes under the complete law
        let z_inv = self.z.invert().unwrap_or(C::Base::ZERO);
        AffinePoint {
            x: self.x * z_inv,
            y: self.y * z_inv,
        }
    }

    /// Projective equality, `X₁Z₂ = X₂Z₁` and `Y₁Z₂ = Y₂Z₁`.
    pub(crate) fn ct_eq_point(&self, other: &Self) -> u8 {
        (self.x * other.z).ct_eq(&(other.x * self.z)) & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl<C: EdwardsCurve> ConditionallySelectable for ExtendedPoint<C> {
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self {
        Self {
            x: C::Base::conditional_select(&a.x, &b.x, condition),
            y: C::Base::conditional_select(&a.y, &b.y, condition),
            z: C::Base::conditional_select(&a.z, &b.z, condition),
            t: C::Base::conditional_select(&a.t, &b.t, condition),
        }
    }
}

impl<C: EdwardsCurve> CurveGroup for AffinePoint<C> {
    const NAME: &'static str = C::NAME;
    const SCALAR_BYTES: usize = C::SCALAR_BYTES;

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self {
            x: C::GENERATOR.0,
            y: C::GENERATOR.1,
        }
    }

    fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    fn add(&self, other: &Self) -> Self {
        self.to_extended().add(&other.to_extended()).to_affine()
    }

    fn double(&self) -> Self {
        self.to_extended().double().to_affine()
    }

    fn multiply(&self, scalar: &[u8]) -> Result<Self> {
        check_scalar_len::<Self>(scalar)?;
        Ok(self.to_extended().mul(scalar).to_affine())
    }

    fn to_bytes(&self, compressed: bool) -> Result<Vec<u8>> {
        Ok(if compressed {
            self.compress()
        } else {
            encode_pair(&self.x, &self.y)
        })
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() == C::ENCODED_BYTES {
            Self::decompress(bytes)
        } else if bytes.len() == 2 * C::Base::BYTES {
            let (x, y) = decode_pair::<C::Base>(bytes)?;
            Self::from_coordinates(x, y)
        } else {
            Err(Error::length("Edwards point encoding", bytes.len()))
        }
    }
}
