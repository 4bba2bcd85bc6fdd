//! Curve25519 and Curve448 (RFC 7748).

use super::MontgomeryCurve;

use crate::field::{Fe448, Fe25519, Field};

/// Curve25519, `A = 486662` over `2²⁵⁵ − 19`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Curve25519;

impl MontgomeryCurve for Curve25519 {
    type Base = Fe25519;

    const NAME: &'static str = "Curve25519";
    const A: Fe25519 = Fe25519::from_limbs([486662, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    const A24: Fe25519 = Fe25519::from_limbs([121665, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// `u = 9` with the odd `v`.
    const GENERATOR: (Fe25519, Fe25519) = (
        Fe25519::from_limbs([9, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Fe25519::from_limbs([
            47109081, 7432351, 3556669, 32730083, 38335797, 21549388, 57579067, 14064643, 35359240,
            8566886,
        ]),
    );

    const SCALAR_BYTES: usize = 32;
    const COMPRESSED_BYTES: usize = 32;

    /// `AA + 121665·E = BB + 121666·E`.
    fn ladder_z2(_aa: Fe25519, bb: Fe25519, e: Fe25519) -> Fe25519 {
        e * (bb + e.mul121666())
    }

    fn clamp(scalar: &mut [u8]) {
        scalar[0] &= 248;
        scalar[31] &= 127;
        scalar[31] |= 64;
    }

    fn decode_u(bytes: &[u8]) -> Fe25519 {
        let mut masked = [0u8; 32];
        masked.copy_from_slice(bytes);
        masked[31] &= 0x7f;
        Fe25519::from_le_bytes_reduced(&masked)
    }
}

/// Curve448, `A = 156326` over `2⁴⁴⁸ − 2²²⁴ − 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Curve448;

impl MontgomeryCurve for Curve448 {
    type Base = Fe448;

    const NAME: &'static str = "Curve448";
    const A: Fe448 = Fe448::from_be_hex("0262a6");
    const A24: Fe448 = Fe448::from_be_hex("98a9");

    /// `u = 5` with the even `v`.
    const GENERATOR: (Fe448, Fe448) = (
        Fe448::from_be_hex("05"),
        Fe448::from_be_hex(
            "7d235d1295f5b1f66c98ab6e58326fcecbae5d34f55545d060f75dc28df3f6edb8027e2346430d211312c4b150677af76fd7223d457b5b1a",
        ),
    );

    const SCALAR_BYTES: usize = 56;
    const COMPRESSED_BYTES: usize = 57;

    fn clamp(scalar: &mut [u8]) {
        scalar[0] &= 252;
        scalar[55] |= 128;
    }
}
