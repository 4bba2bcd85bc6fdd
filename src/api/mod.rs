//! Public primitive API.
//!
//! Two equivalent surfaces sit on top of the curve and signature modules:
//!
//! - [`Curve`] and [`Point`]: one closed enum of the eight supported curves
//!   and one enum of points, for callers that pick the curve at run time;
//! - one module per curve ([`secp256k1`], [`p256`], [`p384`], [`p521`],
//!   [`curve25519`], [`curve448`], [`ed25519`], [`ed448`]) with the flat,
//!   monomorphized operations of that curve.
//!
//! [`fe25519`] exposes arithmetic modulo `2²⁵⁵ − 19` on 32-byte encodings.

mod curve;
mod edwards;
pub mod fe25519;
mod montgomery;
mod weierstrass;

pub use curve::{Curve, Point};
pub use edwards::{ed448, ed25519};
pub use montgomery::{curve448, curve25519};
pub use weierstrass::{p256, p384, p521, secp256k1};
