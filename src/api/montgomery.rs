//! Flat per-curve operations for Curve25519 and Curve448.

macro_rules! montgomery_api {
    ($(#[$meta:meta])* $module:ident, $curve:ident) => {
        $(#[$meta])*
        pub mod $module {
            use crate::curves::CurveGroup;
            use crate::curves::montgomery::{self, $curve, MontgomeryCurve};
            use crate::error::Result;
            use crate::field::Field;

            use zeroize::Zeroize;

            /// Affine point `(u, v)` (or identity) on this curve.
            pub type Point = montgomery::AffinePoint<$curve>;

            /// Scalar, private key and bare `u`-coordinate length.
            pub const SCALAR_BYTES: usize = <$curve as MontgomeryCurve>::SCALAR_BYTES;

            pub fn generator() -> Point {
                Point::generator()
            }

            pub fn identity() -> Point {
                Point::identity()
            }

            pub fn point_add(p: &Point, q: &Point) -> Point {
                p.add(q)
            }

            pub fn point_double(p: &Point) -> Point {
                p.double()
            }

            /// `k · p` for a little-endian scalar, used unclamped.
            pub fn point_multiply(scalar: &[u8], p: &Point) -> Result<Point> {
                p.multiply(scalar)
            }

            pub fn point_to_bytes(p: &Point, compressed: bool) -> Result<Vec<u8>> {
                p.to_bytes(compressed)
            }

            pub fn point_from_bytes(bytes: &[u8]) -> Result<Point> {
                Point::from_bytes(bytes)
            }

            /// Public point of a private key: the RFC 7748 clamped scalar
            /// times the base point.
            pub fn private_key_to_public_key(private: &[u8], compressed: bool) -> Result<Vec<u8>> {
                let mut k = private.to_vec();
                if k.len() == SCALAR_BYTES {
                    <$curve as MontgomeryCurve>::clamp(&mut k);
                }
                let public = Point::generator().multiply(&k);
                k.zeroize();
                public?.to_bytes(compressed)
            }

            /// The RFC 7748 function on bare `u`-coordinates.
            ///
            /// # Errors
            /// [`Error::InvalidLength`](crate::Error::InvalidLength) for
            /// inputs of the wrong length,
            /// [`Error::InvalidPoint`](crate::Error::InvalidPoint) for an
            /// all-zero shared secret.
            pub fn diffie_hellman(private: &[u8], public_u: &[u8]) -> Result<Vec<u8>> {
                montgomery::diffie_hellman::<$curve>(private, public_u)
            }

            /// Bare `u`-coordinate of the public key, as exchanged in
            /// X25519 / X448.
            pub fn public_u(private: &[u8]) -> Result<Vec<u8>> {
                let mut base = vec![0u8; SCALAR_BYTES];
                let (u, _) = <$curve as MontgomeryCurve>::GENERATOR;
                u.write_le_bytes(&mut base);
                montgomery::diffie_hellman::<$curve>(private, &base)
            }
        }
    };
}

montgomery_api!(
    /// Curve25519 and X25519 (RFC 7748).
    curve25519, Curve25519
);
montgomery_api!(
    /// Curve448 and X448 (RFC 7748).
    curve448, Curve448
);
