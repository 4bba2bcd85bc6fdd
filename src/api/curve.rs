use crate::curves::{CurveGroup, edwards, montgomery, weierstrass};
use crate::curves::edwards::{Ed448, Ed25519};
use crate::curves::montgomery::{Curve448, Curve25519, MontgomeryCurve};
use crate::curves::weierstrass::{P256, P384, P521, Secp256k1};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::signatures::{ecdsa, eddsa};

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// The supported curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    Secp256k1,
    P256,
    P384,
    P521,
    Curve25519,
    Curve448,
    Ed25519,
    Ed448,
}

/// A point on one of the supported curves, in affine form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Point {
    Secp256k1(weierstrass::AffinePoint<Secp256k1>),
    P256(weierstrass::AffinePoint<P256>),
    P384(weierstrass::AffinePoint<P384>),
    P521(weierstrass::AffinePoint<P521>),
    Curve25519(montgomery::AffinePoint<Curve25519>),
    Curve448(montgomery::AffinePoint<Curve448>),
    Ed25519(edwards::AffinePoint<Ed25519>),
    Ed448(edwards::AffinePoint<Ed448>),
}

/// Runs `$body` with `$p` bound to the inner point and `$variant` to the
/// matching constructor.
macro_rules! dispatch {
    ($point:expr, $p:ident, $variant:ident => $body:expr) => {
        match $point {
            Point::Secp256k1($p) => { let $variant = Point::Secp256k1; $body }
            Point::P256($p) => { let $variant = Point::P256; $body }
            Point::P384($p) => { let $variant = Point::P384; $body }
            Point::P521($p) => { let $variant = Point::P521; $body }
            Point::Curve25519($p) => { let $variant = Point::Curve25519; $body }
            Point::Curve448($p) => { let $variant = Point::Curve448; $body }
            Point::Ed25519($p) => { let $variant = Point::Ed25519; $body }
            Point::Ed448($p) => { let $variant = Point::Ed448; $body }
        }
    };
}

/// Same as [`dispatch!`], over a [`Curve`] and a point type alias `$g`.
macro_rules! per_curve {
    ($curve:expr, $g:ident, $variant:ident => $body:expr) => {
        match $curve {
            Curve::Secp256k1 => { type $g = weierstrass::AffinePoint<Secp256k1>; let $variant = Point::Secp256k1; $body }
            Curve::P256 => { type $g = weierstrass::AffinePoint<P256>; let $variant = Point::P256; $body }
            Curve::P384 => { type $g = weierstrass::AffinePoint<P384>; let $variant = Point::P384; $body }
            Curve::P521 => { type $g = weierstrass::AffinePoint<P521>; let $variant = Point::P521; $body }
            Curve::Curve25519 => { type $g = montgomery::AffinePoint<Curve25519>; let $variant = Point::Curve25519; $body }
            Curve::Curve448 => { type $g = montgomery::AffinePoint<Curve448>; let $variant = Point::Curve448; $body }
            Curve::Ed25519 => { type $g = edwards::AffinePoint<Ed25519>; let $variant = Point::Ed25519; $body }
            Curve::Ed448 => { type $g = edwards::AffinePoint<Ed448>; let $variant = Point::Ed448; $body }
        }
    };
}

impl Curve {
    /// Every supported curve.
    pub const ALL: [Curve; 8] = [
        Curve::Secp256k1,
        Curve::P256,
        Curve::P384,
        Curve::P521,
        Curve::Curve25519,
        Curve::Curve448,
        Curve::Ed25519,
        Curve::Ed448,
    ];

    pub fn name(self) -> &'static str {
        per_curve!(self, G, _v => G::NAME)
    }

    /// Length of the scalars accepted by [`Point::multiply`].
    pub fn scalar_len(self) -> usize {
        per_curve!(self, G, _v => G::SCALAR_BYTES)
    }

    /// Length of a private key: the order length for Weierstrass curves,
    /// the RFC 7748 scalar length for Montgomery curves, the seed length
    /// for Edwards curves.
    pub fn private_key_len(self) -> usize {
        match self {
            Curve::Ed25519 => <Ed25519 as eddsa::EddsaCurve>::SEED_BYTES,
            Curve::Ed448 => <Ed448 as eddsa::EddsaCurve>::SEED_BYTES,
            _ => self.scalar_len(),
        }
    }

    pub fn generator(self) -> Point {
        per_curve!(self, G, variant => variant(G::generator()))
    }

    pub fn identity(self) -> Point {
        per_curve!(self, G, variant => variant(G::identity()))
    }

    /// Decodes and validates a point of this curve.
    pub fn point_from_bytes(self, bytes: &[u8]) -> Result<Point> {
        per_curve!(self, G, variant => G::from_bytes(bytes).map(variant))
    }

    /// Public point of a private key.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] for a key of the wrong length,
    /// [`Error::InvalidScalar`] for a Weierstrass key outside `[1, n − 1]`.
    pub fn private_key_to_public_key(self, private: &[u8]) -> Result<Point> {
        match self {
            Curve::Secp256k1 => ecdsa::public_key::<Secp256k1>(private).map(Point::Secp256k1),
            Curve::P256 => ecdsa::public_key::<P256>(private).map(Point::P256),
            Curve::P384 => ecdsa::public_key::<P384>(private).map(Point::P384),
            Curve::P521 => ecdsa::public_key::<P521>(private).map(Point::P521),
            Curve::Curve25519 => clamped_public::<Curve25519>(private).map(Point::Curve25519),
            Curve::Curve448 => clamped_public::<Curve448>(private).map(Point::Curve448),
            Curve::Ed25519 => eddsa::public_key::<Ed25519>(private).map(Point::Ed25519),
            Curve::Ed448 => eddsa::public_key::<Ed448>(private).map(Point::Ed448),
        }
    }

    /// Draws a private key from `rng`.
    ///
    /// Weierstrass keys are rejection-sampled into `[1, n − 1]`; the other
    /// curves take uniformly random bytes of [`private_key_len`](Self::private_key_len).
    pub fn generate_private_key<R: RngCore + CryptoRng>(self, rng: &mut R) -> Vec<u8> {
        let mut key = vec![0u8; self.private_key_len()];

        let check: fn(&[u8]) -> bool = match self {
            Curve::Secp256k1 => in_order_range::<Secp256k1>,
            Curve::P256 => in_order_range::<P256>,
            Curve::P384 => in_order_range::<P384>,
            Curve::P521 => in_order_range::<P521>,
            _ => |_| true,
        };
        let excess_bits = match self {
            Curve::P521 => 7,
            _ => 0,
        };

        loop {
            rng.fill_bytes(&mut key);
            key[0] &= 0xff >> excess_bits;
            if check(&key) {
                return key;
            }
        }
    }
}

fn in_order_range<C: weierstrass::WeierstrassCurve>(key: &[u8]) -> bool {
    C::Scalar::from_be_bytes(key).is_some_and(|k| k.is_zero() == 0)
}

fn clamped_public<C: MontgomeryCurve>(private: &[u8]) -> Result<montgomery::AffinePoint<C>> {
    if private.len() != C::SCALAR_BYTES {
        return Err(Error::length("Montgomery private key", private.len()));
    }

    let mut k = private.to_vec();
    C::clamp(&mut k);
    let public = montgomery::AffinePoint::<C>::generator().multiply(&k);
    k.zeroize();
    public
}

impl Point {
    /// The curve this point lives on.
    pub fn curve(&self) -> Curve {
        match self {
            Point::Secp256k1(_) => Curve::Secp256k1,
            Point::P256(_) => Curve::P256,
            Point::P384(_) => Curve::P384,
            Point::P521(_) => Curve::P521,
            Point::Curve25519(_) => Curve::Curve25519,
            Point::Curve448(_) => Curve::Curve448,
            Point::Ed25519(_) => Curve::Ed25519,
            Point::Ed448(_) => Curve::Ed448,
        }
    }

    pub fn is_identity(&self) -> bool {
        dispatch!(self, p, _v => p.is_identity())
    }

    /// Group law.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] when the points lie on different curves.
    pub fn add(&self, other: &Point) -> Result<Point> {
        match (self, other) {
            (Point::Secp256k1(p), Point::Secp256k1(q)) => Ok(Point::Secp256k1(p.add(q))),
            (Point::P256(p), Point::P256(q)) => Ok(Point::P256(p.add(q))),
            (Point::P384(p), Point::P384(q)) => Ok(Point::P384(p.add(q))),
            (Point::P521(p), Point::P521(q)) => Ok(Point::P521(p.add(q))),
            (Point::Curve25519(p), Point::Curve25519(q)) => Ok(Point::Curve25519(p.add(q))),
            (Point::Curve448(p), Point::Curve448(q)) => Ok(Point::Curve448(p.add(q))),
            (Point::Ed25519(p), Point::Ed25519(q)) => Ok(Point::Ed25519(p.add(q))),
            (Point::Ed448(p), Point::Ed448(q)) => Ok(Point::Ed448(p.add(q))),
            _ => Err(Error::InvalidParameter("points lie on different curves")),
        }
    }

    pub fn double(&self) -> Point {
        dispatch!(self, p, variant => variant(p.double()))
    }

    /// `k · self`; see [`CurveGroup::multiply`] for the scalar format.
    pub fn multiply(&self, scalar: &[u8]) -> Result<Point> {
        dispatch!(self, p, variant => p.multiply(scalar).map(variant))
    }

    /// Encodes the point in its curve's native format.
    pub fn to_bytes(&self, compressed: bool) -> Result<Vec<u8>> {
        dispatch!(self, p, _v => p.to_bytes(compressed))
    }
}
