//! Flat per-curve operations for Ed25519 and Ed448.

macro_rules! edwards_api {
    ($(#[$meta:meta])* $module:ident, $curve:ident { $($extra:item)* }) => {
        $(#[$meta])*
        pub mod $module {
            use crate::curves::CurveGroup;
            use crate::curves::edwards::{self, $curve};
            use crate::error::Result;
            use crate::signatures::eddsa::{self, EddsaCurve};

            /// Affine point on this curve.
            pub type Point = edwards::AffinePoint<$curve>;

            /// Private key (seed) length.
            pub const SEED_BYTES: usize = <$curve as EddsaCurve>::SEED_BYTES;

            /// Length of a little-endian scalar for [`point_multiply`].
            pub const SCALAR_BYTES: usize = <Point as CurveGroup>::SCALAR_BYTES;

            /// Signature length, `R || S`.
            pub const SIGNATURE_BYTES: usize = 2 * <$curve as edwards::EdwardsCurve>::ENCODED_BYTES;

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

            /// `k · p` for a little-endian scalar of [`SCALAR_BYTES`] bytes.
            pub fn point_multiply(scalar: &[u8], p: &Point) -> Result<Point> {
                p.multiply(scalar)
            }

            /// RFC 8032 encoding when `compressed`, `x || y` otherwise.
            pub fn point_to_bytes(p: &Point, compressed: bool) -> Result<Vec<u8>> {
                p.to_bytes(compressed)
            }

            pub fn point_from_bytes(bytes: &[u8]) -> Result<Point> {
                Point::from_bytes(bytes)
            }

            /// Encoded public key of a seed.
            pub fn private_key_to_public_key(seed: &[u8], compressed: bool) -> Result<Vec<u8>> {
                eddsa::public_key::<$curve>(seed)?.to_bytes(compressed)
            }

            /// Deterministic signature `R || S` over `message`.
            pub fn sign(seed: &[u8], message: &[u8]) -> Result<Vec<u8>> {
                eddsa::sign::<$curve>(seed, message, &[])
            }

            /// Verifies `R || S` against an encoded public key.
            ///
            /// # Errors
            /// [`Error::InvalidPoint`](crate::Error::InvalidPoint) if the
            /// public key does not decode,
            /// [`Error::VerificationFailed`](crate::Error::VerificationFailed)
            /// if the signature does not hold.
            pub fn verify(public: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
                let public = Point::from_bytes(public)?;
                eddsa::verify::<$curve>(&public, message, signature, &[])
            }

            $($extra)*
        }
    };
}

edwards_api!(
    /// Ed25519 (RFC 8032, PureEdDSA with SHA-512).
    ed25519, Ed25519 {}
);

edwards_api!(
    /// Ed448 (RFC 8032, SHAKE256 with `dom4`).
    ed448, Ed448 {
        /// Signs with a context string of at most 255 bytes.
        pub fn sign_with_context(seed: &[u8], message: &[u8], context: &[u8]) -> Result<Vec<u8>> {
            eddsa::sign::<Ed448>(seed, message, context)
        }

        /// Verifies a signature made with [`sign_with_context`].
        pub fn verify_with_context(
            public: &[u8],
            message: &[u8],
            signature: &[u8],
            context: &[u8],
        ) -> Result<()> {
            let public = Point::from_bytes(public)?;
            eddsa::verify::<Ed448>(&public, message, signature, context)
        }
    }
);
