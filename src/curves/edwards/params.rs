//! Ed25519 and Ed448 (RFC 8032).

use super::EdwardsCurve;

use crate::field::{Fe448, Fe25519, Fp, field_params};

field_params!(
    /// `L = 2²⁵² + 27742317777372353535851937790883648493`.
    L25519, 4, 32,
    "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"
);

field_params!(
    /// `L = 2⁴⁴⁶ − 13818066809895115352007386748515426880336692474882178609894547503885`.
    L448, 7, 56,
    "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3"
);

/// Scalars modulo the Ed25519 subgroup order.
pub(crate) type Ed25519Scalar = Fp<L25519, 4>;

/// Scalars modulo the Ed448 subgroup order.
pub(crate) type Ed448Scalar = Fp<L448, 7>;

/// edwards25519, `a = −1`, `d = −121665/121666`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ed25519;

impl EdwardsCurve for Ed25519 {
    type Base = Fe25519;
    type Scalar = Ed25519Scalar;

    const NAME: &'static str = "Ed25519";
    const A: Fe25519 = Fe25519::from_limbs([
        67108844, 33554431, 67108863, 33554431, 67108863, 33554431, 67108863, 33554431, 67108863,
        33554431,
    ]);
    const D: Fe25519 = Fe25519::from_limbs([
        56195235, 13857412, 51736253, 6949390, 114729, 24766616, 60832955, 30306712, 48412415,
        21499315,
    ]);

    /// `y = 4/5`, `x` even.
    const GENERATOR: (Fe25519, Fe25519) = (
        Fe25519::from_limbs([
            52811034, 25909283, 16144682, 17082669, 27570973, 30858332, 40966398, 8378388, 20764389,
            8758491,
        ]),
        Fe25519::from_limbs([
            40265304, 26843545, 13421772, 20132659, 26843545, 6710886, 53687091, 13421772, 40265318,
            26843545,
        ]),
    );

    const SCALAR_BYTES: usize = 32;
    const ENCODED_BYTES: usize = 32;
}

/// edwards448 ("Goldilocks"), `a = 1`, `d = −39081`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ed448;

impl EdwardsCurve for Ed448 {
    type Base = Fe448;
    type Scalar = Ed448Scalar;

    const NAME: &'static str = "Ed448";
    const A: Fe448 = Fe448::from_be_hex("01");
    const D: Fe448 = Fe448::from_be_hex(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffff6756",
    );
    const GENERATOR: (Fe448, Fe448) = (
        Fe448::from_be_hex(
            "4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324a3d3a46412ae1af72ab66511433b80e18b00938e2626a82bc70cc05e",
        ),
        Fe448::from_be_hex(
            "693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e05a0c2d73ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14",
        ),
    );

    const SCALAR_BYTES: usize = 57;
    const ENCODED_BYTES: usize = 57;
}
