//! Flat per-curve operations for the Weierstrass curves.

macro_rules! weierstrass_api {
    ($(#[$meta:meta])* $module:ident, $curve:ident) => {
        $(#[$meta])*
        pub mod $module {
            use crate::curves::CurveGroup;
            use crate::curves::weierstrass::{self, $curve};
            use crate::error::Result;
            use crate::signatures::ecdsa;

            /// Affine point (or identity) on this curve.
            pub type Point = weierstrass::AffinePoint<$curve>;

            /// Recoverable ECDSA signature on this curve.
            pub type Signature = ecdsa::RecoverableSignature<$curve>;

            /// Private key and scalar length (big-endian).
            pub const SCALAR_BYTES: usize = <Point as CurveGroup>::SCALAR_BYTES;

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

            /// `k · p` for a big-endian scalar of [`SCALAR_BYTES`] bytes.
            pub fn point_multiply(scalar: &[u8], p: &Point) -> Result<Point> {
                p.multiply(scalar)
            }

            /// SEC1 encoding.
            pub fn point_to_bytes(p: &Point, compressed: bool) -> Result<Vec<u8>> {
                p.to_bytes(compressed)
            }

            /// SEC1 decoding with on-curve validation.
            pub fn point_from_bytes(bytes: &[u8]) -> Result<Point> {
                Point::from_bytes(bytes)
            }

            /// SEC1-encoded public key of a private key in `[1, n − 1]`.
            pub fn private_key_to_public_key(private: &[u8], compressed: bool) -> Result<Vec<u8>> {
                ecdsa::public_key::<$curve>(private)?.to_bytes(compressed)
            }

            /// Deterministic ECDSA over a caller-computed digest.
            pub fn sign(private: &[u8], hash: &[u8]) -> Result<Signature> {
                ecdsa::sign_prehash::<$curve>(private, hash)
            }

            /// Verifies `r || s` against a SEC1-encoded public key.
            pub fn verify(public: &[u8], hash: &[u8], signature: &[u8]) -> Result<()> {
                let public = Point::from_bytes(public)?;
                ecdsa::verify_prehash::<$curve>(&public, hash, signature)
            }

            /// Recovers the signer's public key from `r || s` and the
            /// recovery identifier.
            pub fn recover_public_key(hash: &[u8], signature: &[u8], recovery_id: u8) -> Result<Point> {
                ecdsa::recover_prehash::<$curve>(hash, signature, recovery_id)
            }
        }
    };
}

weierstrass_api!(
    /// secp256k1 (SEC 2).
    secp256k1, Secp256k1
);
weierstrass_api!(
    /// NIST P-256.
    p256, P256
);
weierstrass_api!(
    /// NIST P-384.
    p384, P384
);
weierstrass_api!(
    /// NIST P-521.
    p521, P521
);
