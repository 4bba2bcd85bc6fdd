//! Short Weierstrass curves `y² = x³ + ax + b`.
//!
//! # Representation
//!
//! Internally points are homogeneous projective triples `(X : Y : Z)` with
//! `x = X/Z`, `y = Y/Z`; the identity is `(0 : 1 : 0)`. Addition uses the
//! complete formulas of Renes, Costello and Batina (2016, Algorithm 1),
//! valid for every pair of inputs including doubling and the identity, so
//! the scalar multiplication never branches on intermediate points.
//!
//! # Scalar multiplication
//!
//! Fixed 4-bit window over the big-endian scalar: a table `[O, P, …, 15P]`
//! is built once, then every nibble costs four doublings, one complete
//! addition and a scan of the whole table with masked selection. Neither
//! the sequence of field operations nor the memory access pattern depends
//! on the scalar.
//!
//! # Encoding
//!
//! SEC1: `0x00` for the identity, `0x02 | 0x03 || x` compressed (prefix
//! carries the parity of `y`), `0x04 || x || y` uncompressed, coordinates
//! big-endian.

mod params;

pub use params::{P256, P384, P521, Secp256k1};

use super::{CurveGroup, check_scalar_len};

use crate::ct::{ConditionallySelectable, ConstantTimeEq};
use crate::error::{Error, Result};
use crate::field::Field;

use std::fmt::Debug;

/// Parameters of one short Weierstrass curve.
pub trait WeierstrassCurve: Copy + Debug + Default + PartialEq + 'static {
    /// Base field `𝔽ₚ`.
    type Base: Field;

    /// Scalar field `ℤ/nℤ`.
    type Scalar: Field;

    /// Curve name, used in logs and errors.
    const NAME: &'static str;

    /// Coefficient `a`.
    const A: Self::Base;

    /// Coefficient `b`.
    const B: Self::Base;

    /// Affine coordinates of the base point.
    const GENERATOR: (Self::Base, Self::Base);

    /// Group order `n` reduced into the base field (`n < p` for every
    /// supported curve).
    const ORDER_IN_BASE: Self::Base;
}

/// Affine point, or the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffinePoint<C: WeierstrassCurve> {
    x: C::Base,
    y: C::Base,
    infinity: bool,
}

/// Projective point `(X : Y : Z)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint<C: WeierstrassCurve> {
    x: C::Base,
    y: C::Base,
    z: C::Base,
}

/// Right-hand side of the curve equation, `x³ + ax + b`.
fn rhs<C: WeierstrassCurve>(x: &C::Base) -> C::Base {
    (x.square() + C::A) * *x + C::B
}

impl<C: WeierstrassCurve> AffinePoint<C> {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: <C::Base as Field>::ZERO,
        y: <C::Base as Field>::ZERO,
        infinity: true,
    };

    /// Builds a point from affine coordinates, checking the curve equation.
    pub fn from_coordinates(x: C::Base, y: C::Base) -> Result<Self> {
        if y.square() != rhs::<C>(&x) {
            tracing::debug!(curve = C::NAME, "point is not on the curve");
            return Err(Error::InvalidPoint);
        }
        Ok(Self {
            x,
            y,
            infinity: false,
        })
    }

    /// Returns the affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(C::Base, C::Base)> {
        (!self.infinity).then_some((self.x, self.y))
    }

    /// Recovers a point from its x-coordinate and the parity of `y`.
    pub(crate) fn decompress(x: &C::Base, y_is_odd: u8) -> Result<Self> {
        let y = rhs::<C>(x).sqrt().ok_or_else(|| {
            tracing::debug!(curve = C::NAME, "x-coordinate has no square root");
            Error::InvalidPoint
        })?;

        let flip = y.is_odd() ^ y_is_odd;
        let y = C::Base::conditional_select(&y, &-y, flip);

        Ok(Self {
            x: *x,
            y,
            infinity: false,
        })
    }

    pub(crate) fn to_projective(self) -> ProjectivePoint<C> {
        if self.infinity {
            ProjectivePoint::IDENTITY
        } else {
            ProjectivePoint {
                x: self.x,
                y: self.y,
                z: <C::Base as Field>::ONE,
            }
        }
    }
}

impl<C: WeierstrassCurve> ProjectivePoint<C> {
    pub(crate) const IDENTITY: Self = Self {
        x: <C::Base as Field>::ZERO,
        y: <C::Base as Field>::ONE,
        z: <C::Base as Field>::ZERO,
    };

    /// Normalizes to affine form with one inversion.
    pub(crate) fn to_affine(self) -> AffinePoint<C> {
        match self.z.invert() {
            Ok(z_inv) => AffinePoint {
                x: self.x * z_inv,
                y: self.y * z_inv,
                infinity: false,
            },
            Err(_) => AffinePoint::IDENTITY,
        }
    }

    /// Complete addition (RCB16, Algorithm 1).
    pub(crate) fn add(&self, other: &Self) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (other.x, other.y, other.z);
        let a = C::A;
        let b3 = C::B.double() + C::B;

        let mut t0 = x1 * x2;
        let mut t1 = y1 * y2;
        let mut t2 = z1 * z2;
        let mut t3 = (x1 + y1) * (x2 + y2);
        let mut t4 = t0 + t1;
        t3 = t3 - t4;
        t4 = (x1 + z1) * (x2 + z2);
        let mut t5 = t0 + t2;
        t4 = t4 - t5;
        t5 = (y1 + z1) * (y2 + z2);
        let mut x3 = t1 + t2;
        t5 = t5 - x3;
        let mut z3 = a * t4;
        x3 = b3 * t2;
        z3 = x3 + z3;
        x3 = t1 - z3;
        z3 = t1 + z3;
        let mut y3 = x3 * z3;
        t1 = t0.double() + t0;
        t2 = a * t2;
        t4 = b3 * t4;
        t1 = t1 + t2;
        t2 = t0 - t2;
        t2 = a * t2;
        t4 = t4 + t2;
        t0 = t1 * t4;
        y3 = y3 + t0;
        t0 = t5 * t4;
        x3 = t3 * x3;
        x3 = x3 - t0;
        t0 = t3 * t1;
        z3 = t5 * z3;
        z3 = z3 + t0;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    /// `k · self` for a big-endian scalar of any length.
    pub(crate) fn mul(&self, scalar_be: &[u8]) -> Self {
        let mut table = [Self::IDENTITY; 16];
        for i in 1..16 {
            table[i] = table[i - 1].add(self);
        }

        let mut acc = Self::IDENTITY;
        for byte in scalar_be {
            for nibble in [byte >> 4, byte & 0x0f] {
                for _ in 0..4 {
                    acc = acc.double();
                }
                acc = acc.add(&Self::select(&table, nibble));
            }
        }

        acc
    }

    /// Reads `table[index]` touching every entry.
    fn select(table: &[Self; 16], index: u8) -> Self {
        let mut out = Self::IDENTITY;
        for (i, entry) in table.iter().enumerate() {
            out.conditional_assign(entry, (i as u8).ct_eq(&index));
        }
        out
    }
}

impl<C: WeierstrassCurve> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self {
        Self {
            x: C::Base::conditional_select(&a.x, &b.x, condition),
            y: C::Base::conditional_select(&a.y, &b.y, condition),
            z: C::Base::conditional_select(&a.z, &b.z, condition),
        }
    }
}

impl<C: WeierstrassCurve> PartialEq for ProjectivePoint<C> {
    /// Cross-multiplied comparison; the identity only equals itself.
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl<C: WeierstrassCurve> CurveGroup for AffinePoint<C> {
    const NAME: &'static str = C::NAME;
    const SCALAR_BYTES: usize = <C::Scalar as Field>::BYTES;

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self {
            x: C::GENERATOR.0,
            y: C::GENERATOR.1,
            infinity: false,
        }
    }

    fn is_identity(&self) -> bool {
        self.infinity
    }

    fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    fn multiply(&self, scalar: &[u8]) -> Result<Self> {
        check_scalar_len::<Self>(scalar)?;
        Ok(self.to_projective().mul(scalar).to_affine())
    }

    fn to_bytes(&self, compressed: bool) -> Result<Vec<u8>> {
        let len = <C::Base as Field>::BYTES;

        if self.infinity {
            return Ok(vec![0x00]);
        }

        let out = if compressed {
            let mut out = vec![0u8; 1 + len];
            out[0] = 0x02 | self.y.is_odd();
            self.x.write_be_bytes(&mut out[1..]);
            out
        } else {
            let mut out = vec![0u8; 1 + 2 * len];
            out[0] = 0x04;
            self.x.write_be_bytes(&mut out[1..1 + len]);
            self.y.write_be_bytes(&mut out[1 + len..]);
            out
        };

        Ok(out)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let len = <C::Base as Field>::BYTES;

        let Some(&prefix) = bytes.first() else {
            return Err(Error::length("SEC1 encoding", 0));
        };

        let expected = match prefix {
            0x00 => 1,
            0x02 | 0x03 => 1 + len,
            0x04 => 1 + 2 * len,
            _ => {
                tracing::debug!(curve = C::NAME, prefix, "unknown SEC1 prefix");
                return Err(Error::InvalidPoint);
            }
        };

        if bytes.len() != expected {
            return Err(Error::length("SEC1 encoding", bytes.len()));
        }

        let coordinate = |b: &[u8]| {
            C::Base::from_be_bytes(b).ok_or_else(|| {
                tracing::debug!(curve = C::NAME, "coordinate is not below the field modulus");
                Error::InvalidPoint
            })
        };

        match prefix {
            0x00 => Ok(Self::IDENTITY),
            0x04 => {
                let x = coordinate(&bytes[1..1 + len])?;
                let y = coordinate(&bytes[1 + len..])?;
                Self::from_coordinates(x, y)
            }
            _ => {
                let x = coordinate(&bytes[1..])?;
                Self::decompress(&x, prefix & 1)
            }
        }
    }
}
