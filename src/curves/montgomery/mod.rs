//! Montgomery curves `v² = u³ + Au² + u` (Curve25519, Curve448).
//!
//! Scalar multiplication is the x-only Montgomery ladder of RFC 7748: the
//! same ladder step runs for every scalar bit, and the two running points
//! are exchanged with a masked swap. The ladder yields `u(kP)` and
//! `u((k+1)P)` in projective form, from which the full affine `kP` is
//! recovered with the Okeya–Sakurai formula at the cost of one inversion.
//!
//! Encodings:
//! - compressed: `u` little-endian with the parity of `v` in the top bit of
//!   the last byte (32 bytes for Curve25519, 57 for Curve448, which needs a
//!   trailing byte for it);
//! - uncompressed: `u || v`, both little-endian.
//!
//! The identity has no affine coordinates and therefore no encoding.
//!
//! [`diffie_hellman`] is the raw RFC 7748 X25519/X448 function, which works
//! on bare `u` coordinates and clamped scalars.

mod params;

pub use params::{Curve25519, Curve448};

use super::{CurveGroup, check_scalar_len, decode_pair, decode_with_sign, encode_pair, encode_with_sign};

use crate::ct::ConditionallySelectable;
use crate::error::{Error, Result};
use crate::field::Field;

use std::fmt::Debug;

use zeroize::Zeroize;

/// Parameters of one Montgomery curve (`B = 1`).
pub trait MontgomeryCurve: Copy + Debug + Default + PartialEq + 'static {
    /// Base field.
    type Base: Field;

    /// Curve name.
    const NAME: &'static str;

    /// Coefficient `A`.
    const A: Self::Base;

    /// Ladder constant `(A − 2) / 4`.
    const A24: Self::Base;

    /// Affine base point.
    const GENERATOR: (Self::Base, Self::Base);

    /// Scalar and `u`-coordinate length of the RFC 7748 function.
    const SCALAR_BYTES: usize;

    /// Length of the compressed point encoding.
    const COMPRESSED_BYTES: usize;

    /// Last part of the ladder doubling, `z₂ = E · (AA + a24 · E)`.
    fn ladder_z2(aa: Self::Base, _bb: Self::Base, e: Self::Base) -> Self::Base {
        e * (aa + Self::A24 * e)
    }

    /// RFC 7748 `decodeScalar`.
    fn clamp(scalar: &mut [u8]);

    /// RFC 7748 `decodeUCoordinate`: non-canonical values are accepted and
    /// reduced.
    fn decode_u(bytes: &[u8]) -> Self::Base {
        Self::Base::from_le_bytes_reduced(bytes)
    }
}

/// Affine point `(u, v)`, or the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffinePoint<C: MontgomeryCurve> {
    u: C::Base,
    v: C::Base,
    infinity: bool,
}

/// Runs the ladder over the `bits` low bits of the little-endian `scalar`.
///
/// Returns `(X₂ : Z₂) = kP` and `(X₃ : Z₃) = (k+1)P`.
fn ladder<C: MontgomeryCurve>(
    u: &C::Base,
    scalar: &[u8],
    bits: usize,
) -> (C::Base, C::Base, C::Base, C::Base) {
    let x1 = *u;
    let (mut x2, mut z2) = (C::Base::ONE, C::Base::ZERO);
    let (mut x3, mut z3) = (*u, C::Base::ONE);
    let mut swap = 0u8;

    for t in (0..bits).rev() {
        let bit = (scalar[t / 8] >> (t % 8)) & 1;
        swap ^= bit;
        C::Base::conditional_swap(&mut x2, &mut x3, swap);
        C::Base::conditional_swap(&mut z2, &mut z3, swap);
        swap = bit;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;
        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = C::ladder_z2(aa, bb, e);
    }

    C::Base::conditional_swap(&mut x2, &mut x3, swap);
    C::Base::conditional_swap(&mut z2, &mut z3, swap);

    (x2, z2, x3, z3)
}

/// RFC 7748 scalar multiplication on `u` coordinates (X25519 / X448).
///
/// # Errors
/// - [`Error::InvalidLength`] if either input is not `C::SCALAR_BYTES` long.
/// - [`Error::InvalidPoint`] if the result is the all-zero value, i.e. `u`
///   lies in a small subgroup.
pub fn diffie_hellman<C: MontgomeryCurve>(scalar: &[u8], u: &[u8]) -> Result<Vec<u8>> {
    if scalar.len() != C::SCALAR_BYTES {
        return Err(Error::length("Montgomery scalar", scalar.len()));
    }
    if u.len() != C::SCALAR_BYTES {
        return Err(Error::length("Montgomery u-coordinate", u.len()));
    }

    let mut k = scalar.to_vec();
    C::clamp(&mut k);

    let u = C::decode_u(u);
    let (x2, z2, _, _) = ladder::<C>(&u, &k, 8 * C::SCALAR_BYTES);
    k.zeroize();

    let shared = x2 * z2.invert().unwrap_or(C::Base::ZERO);

    let mut out = vec![0u8; C::SCALAR_BYTES];
    shared.write_le_bytes(&mut out[..C::Base::BYTES]);

    if shared.is_zero() == 1 {
        tracing::debug!(curve = C::NAME, "shared secret is all zero");
        return Err(Error::InvalidPoint);
    }

    Ok(out)
}

impl<C: MontgomeryCurve> AffinePoint<C> {
    /// The identity.
    pub const IDENTITY: Self = Self {
        u: <C::Base as Field>::ZERO,
        v: <C::Base as Field>::ZERO,
        infinity: true,
    };

    /// Builds a point from affine coordinates, checking the curve equation.
    pub fn from_coordinates(u: C::Base, v: C::Base) -> Result<Self> {
        if v.square() != Self::rhs(&u) {
            tracing::debug!(curve = C::NAME, "point is not on the curve");
            return Err(Error::InvalidPoint);
        }
        Ok(Self {
            u,
            v,
            infinity: false,
        })
    }

    /// Affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(C::Base, C::Base)> {
        (!self.infinity).then_some((self.u, self.v))
    }

    /// `u³ + Au² + u`.
    fn rhs(u: &C::Base) -> C::Base {
        ((*u + C::A) * *u + C::Base::ONE) * *u
    }

    fn negate(&self) -> Self {
        Self {
            u: self.u,
            v: -self.v,
            infinity: self.infinity,
        }
    }

    /// Affine chord-and-tangent law; `λ` is the slope through both points.
    fn add_affine(&self, other: &Self) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }

        let slope = if self.u == other.u {
            if self.v != other.v || self.v.is_zero() == 1 {
                return Self::IDENTITY;
            }
            // tangent: (3u² + 2Au + 1) / 2v
            let u2 = self.u.square();
            let num = u2.double() + u2 + (C::A * self.u).double() + C::Base::ONE;
            num * self.v.double().invert().unwrap_or(C::Base::ZERO)
        } else {
            (other.v - self.v) * (other.u - self.u).invert().unwrap_or(C::Base::ZERO)
        };

        let u3 = slope.square() - C::A - self.u - other.u;
        let v3 = slope * (self.u - u3) - self.v;

        Self {
            u: u3,
            v: v3,
            infinity: false,
        }
    }

    /// Okeya–Sakurai: recovers `kP` from `P = (x, y)`, `(X₁ : Z₁) = kP` and
    /// `(X₂ : Z₂) = (k+1)P`.
    fn recover(&self, x1: C::Base, z1: C::Base, x2: C::Base, z2: C::Base, k_odd: u8) -> Self {
        let (x, y) = (self.u, self.v);

        if z1.is_zero() == 1 {
            return Self::IDENTITY;
        }
        if y.is_zero() == 1 {
            // P has order two
            return if k_odd == 1 { *self } else { Self::IDENTITY };
        }
        if z2.is_zero() == 1 {
            return self.negate();
        }

        let two_a_z1 = (C::A * z1).double();
        let x_z1 = x * z1;
        let num = z2 * ((x * x1 + z1) * (x1 + x_z1 + two_a_z1) - two_a_z1 * z1)
            - (x1 - x_z1).square() * x2;

        let two_y_z1_z2 = y.double() * z1 * z2;
        let den = two_y_z1_z2 * z1;
        let inv = den.invert().unwrap_or(C::Base::ZERO);

        Self {
            u: x1 * two_y_z1_z2 * inv,
            v: num * inv,
            infinity: false,
        }
    }
}

impl<C: MontgomeryCurve> CurveGroup for AffinePoint<C> {
    const NAME: &'static str = C::NAME;
    const SCALAR_BYTES: usize = C::SCALAR_BYTES;

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self {
            u: C::GENERATOR.0,
            v: C::GENERATOR.1,
            infinity: false,
        }
    }

    fn is_identity(&self) -> bool {
        self.infinity
    }

    fn add(&self, other: &Self) -> Self {
        self.add_affine(other)
    }

    fn double(&self) -> Self {
        self.add_affine(self)
    }

    fn multiply(&self, scalar: &[u8]) -> Result<Self> {
        check_scalar_len::<Self>(scalar)?;

        if self.infinity {
            return Ok(Self::IDENTITY);
        }

        let (x1, z1, x2, z2) = ladder::<C>(&self.u, scalar, 8 * C::SCALAR_BYTES);
        Ok(self.recover(x1, z1, x2, z2, scalar[0] & 1))
    }

    fn to_bytes(&self, compressed: bool) -> Result<Vec<u8>> {
        if self.infinity {
            return Err(Error::InvalidPoint);
        }

        Ok(if compressed {
            encode_with_sign(&self.u, self.v.is_odd(), C::COMPRESSED_BYTES)
        } else {
            encode_pair(&self.u, &self.v)
        })
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() == C::COMPRESSED_BYTES {
            let (u, v_is_odd) = decode_with_sign::<C::Base>(bytes, C::COMPRESSED_BYTES)?;

            let v = Self::rhs(&u).sqrt().ok_or_else(|| {
                tracing::debug!(curve = C::NAME, "u-coordinate is not on the curve");
                Error::InvalidPoint
            })?;

            if v.is_zero() == 1 && v_is_odd == 1 {
                return Err(Error::InvalidPoint);
            }
            let v = C::Base::conditional_select(&v, &-v, v.is_odd() ^ v_is_odd);

            Ok(Self {
                u,
                v,
                infinity: false,
            })
        } else if bytes.len() == 2 * C::Base::BYTES {
            let (u, v) = decode_pair::<C::Base>(bytes)?;
            Self::from_coordinates(u, v)
        } else {
            Err(Error::length("Montgomery point encoding", bytes.len()))
        }
    }
}
