//! Domain parameters of the supported Weierstrass curves.
//!
//! Values are those of SEC 2 (secp256k1) and FIPS 186-4 / SP 800-186
//! (P-256, P-384, P-521).

use super::WeierstrassCurve;

use crate::field::{Fp, field_params};

field_params!(
    /// `p = 2²⁵⁶ − 2³² − 977`.
    Secp256k1Base, 4, 32,
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
);
field_params!(
    /// Order of the secp256k1 base point.
    Secp256k1Order, 4, 32,
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
);

field_params!(
    /// `p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1`.
    P256Base, 4, 32,
    "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
);
field_params!(
    /// Order of the P-256 base point.
    P256Order, 4, 32,
    "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
);

field_params!(
    /// `p = 2³⁸⁴ − 2¹²⁸ − 2⁹⁶ + 2³² − 1`.
    P384Base, 6, 48,
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"
);
field_params!(
    /// Order of the P-384 base point.
    P384Order, 6, 48,
    "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"
);

field_params!(
    /// `p = 2⁵²¹ − 1`.
    P521Base, 9, 66,
    "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
);
field_params!(
    /// Order of the P-521 base point.
    P521Order, 9, 66,
    "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"
);

/// secp256k1 (SEC 2), `a = 0`, `b = 7`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Secp256k1;

impl WeierstrassCurve for Secp256k1 {
    type Base = Fp<Secp256k1Base, 4>;
    type Scalar = Fp<Secp256k1Order, 4>;

    const NAME: &'static str = "secp256k1";
    const A: Self::Base = Fp::from_be_hex("00");
    const B: Self::Base = Fp::from_be_hex("07");
    const GENERATOR: (Self::Base, Self::Base) = (
        Fp::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        Fp::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    );
    const ORDER_IN_BASE: Self::Base =
        Fp::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
}

/// NIST P-256 (secp256r1), `a = −3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct P256;

impl WeierstrassCurve for P256 {
    type Base = Fp<P256Base, 4>;
    type Scalar = Fp<P256Order, 4>;

    const NAME: &'static str = "P-256";
    const A: Self::Base =
        Fp::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
    const B: Self::Base =
        Fp::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    const GENERATOR: (Self::Base, Self::Base) = (
        Fp::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        Fp::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );
    const ORDER_IN_BASE: Self::Base =
        Fp::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
}

/// NIST P-384 (secp384r1), `a = −3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct P384;

impl WeierstrassCurve for P384 {
    type Base = Fp<P384Base, 6>;
    type Scalar = Fp<P384Order, 6>;

    const NAME: &'static str = "P-384";
    const A: Self::Base = Fp::from_be_hex(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    );
    const B: Self::Base = Fp::from_be_hex(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    );
    const GENERATOR: (Self::Base, Self::Base) = (
        Fp::from_be_hex(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        ),
        Fp::from_be_hex(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
        ),
    );
    const ORDER_IN_BASE: Self::Base = Fp::from_be_hex(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    );
}

/// NIST P-521 (secp521r1), `a = −3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct P521;

impl WeierstrassCurve for P521 {
    type Base = Fp<P521Base, 9>;
    type Scalar = Fp<P521Order, 9>;

    const NAME: &'static str = "P-521";
    const A: Self::Base = Fp::from_be_hex(
        "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    );
    const B: Self::Base = Fp::from_be_hex(
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    );
    const GENERATOR: (Self::Base, Self::Base) = (
        Fp::from_be_hex(
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        ),
        Fp::from_be_hex(
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
        ),
    );
    const ORDER_IN_BASE: Self::Base = Fp::from_be_hex(
        "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    );
}
