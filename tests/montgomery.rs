use cryptocore::Error;
use cryptocore::curves::CurveGroup;
use cryptocore::{curve448, curve25519};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

/// Little-endian scalar `k` on `len` bytes.
fn scalar(k: u64, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    out[..8].copy_from_slice(&k.to_le_bytes());
    out
}

// -------------------------------------------------------
// 1. RFC 7748 FUNCTION VECTORS (§5.2)
// -------------------------------------------------------

#[test]
fn x25519_single_iteration_vector() {
    let k = unhex("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let u = unhex("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");

    assert_eq!(
        hex::encode(curve25519::diffie_hellman(&k, &u).unwrap()),
        "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552"
    );
}

#[test]
fn x448_single_iteration_vector() {
    let k = unhex(
        "3d262fddf9ec8e88495266fea19a34d28882acef045104d0d1aae121700a779c\
         984c24f8cdd78fbff44943eba368f54b29259a4f1c600ad3",
    );
    let u = unhex(
        "06fce640fa3487bfda5f6cf2d5263f8aad88334cbd07437f020f08f9814dc031\
         ddbdc38c19c6da2583fa5429db94ada18aa7a7fb4ef8a086",
    );

    assert_eq!(
        hex::encode(curve448::diffie_hellman(&k, &u).unwrap()),
        "ce3e4ff95a60dc6697da1db1d85e6afbdf79b50a2412d7546d5f239fe14fbaad\
         eb445fc66a01b0779d98223961111e21766282f73dd96b6f"
    );
}

// -------------------------------------------------------
// 2. RFC 7748 DIFFIE-HELLMAN (§6)
// -------------------------------------------------------

#[test]
fn x25519_key_exchange() {
    let alice = unhex("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let bob = unhex("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

    let alice_public = curve25519::public_u(&alice).unwrap();
    let bob_public = curve25519::public_u(&bob).unwrap();
    assert_eq!(
        hex::encode(&alice_public),
        "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
    );
    assert_eq!(
        hex::encode(&bob_public),
        "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f"
    );

    let alice_shared = curve25519::diffie_hellman(&alice, &bob_public).unwrap();
    let bob_shared = curve25519::diffie_hellman(&bob, &alice_public).unwrap();
    assert_eq!(alice_shared, bob_shared);
    assert_eq!(
        hex::encode(alice_shared),
        "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742"
    );
}

#[test]
fn x448_key_exchange() {
    let alice = unhex(
        "9a8f4925d1519f5775cf46b04b5800d4ee9ee8bae8bc5565d498c28dd9c9baf5\
         74a9419744897391006382a6f127ab1d9ac2d8c0a598726b",
    );
    let bob = unhex(
        "1c306a7ac2a0e2e0990b294470cba339e6453772b075811d8fad0d1d6927c120\
         bb5ee8972b0d3e21374c9c921b09d1b0366f10b65173992d",
    );

    let alice_public = curve448::public_u(&alice).unwrap();
    let bob_public = curve448::public_u(&bob).unwrap();
    assert_eq!(
        hex::encode(&alice_public),
        "9b08f7cc31b7e3e67d22d5aea121074a273bd2b83de09c63faa73d2c22c5d9bb\
         c836647241d953d40c5b12da88120d53177f80e532c41fa0"
    );
    assert_eq!(
        hex::encode(&bob_public),
        "3eb7a829b0cd20f5bcfc0b599b6feccf6da4627107bdb0d4f345b43027d8b972\
         fc3e34fb4232a13ca706dcb57aec3dae07bdc1c67bf33609"
    );

    let shared = curve448::diffie_hellman(&alice, &bob_public).unwrap();
    assert_eq!(shared, curve448::diffie_hellman(&bob, &alice_public).unwrap());
    assert_eq!(
        hex::encode(shared),
        "07fff4181ac6cc95ec1c16a94a0f74d12da232ce40a77552281d282bb60c0b56\
         fd2464c335543936521c24403085d59a449a5037514a879d"
    );
}

#[test]
fn x25519_ignores_the_top_bit_of_u() {
    let k = unhex("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let mut u = unhex("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = curve25519::diffie_hellman(&k, &u).unwrap();

    u[31] |= 0x80;
    assert_eq!(curve25519::diffie_hellman(&k, &u).unwrap(), expected);
}

#[test]
fn small_order_inputs_give_an_error() {
    let k = unhex("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");

    assert_eq!(curve25519::diffie_hellman(&k, &[0u8; 32]), Err(Error::InvalidPoint));

    let order_8 = unhex("e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800");
    assert_eq!(curve25519::diffie_hellman(&k, &order_8), Err(Error::InvalidPoint));

    assert_eq!(
        curve448::diffie_hellman(&[0x11; 56], &[0u8; 56]),
        Err(Error::InvalidPoint)
    );
}

#[test]
fn wrong_lengths_are_rejected() {
    assert!(matches!(
        curve25519::diffie_hellman(&[1u8; 31], &[9u8; 32]),
        Err(Error::InvalidLength { got: 31, .. })
    ));
    assert!(matches!(
        curve448::diffie_hellman(&[1u8; 56], &[5u8; 57]),
        Err(Error::InvalidLength { got: 57, .. })
    ));
}

// -------------------------------------------------------
// 3. GROUP LAW AND POINT ENCODING
// -------------------------------------------------------

#[test]
fn curve25519_doubling_matches_addition_and_multiplication() {
    let g = curve25519::generator();
    let two = curve25519::point_double(&g);

    assert_eq!(curve25519::point_add(&g, &g), two);
    assert_eq!(curve25519::point_multiply(&scalar(2, 32), &g).unwrap(), two);

    let encoded = curve25519::point_to_bytes(&two, true).unwrap();
    let mut u = encoded.clone();
    u[31] &= 0x7f;
    assert_eq!(
        hex::encode(u),
        "fb4e68dd9c46ae5c5c0b351eed5c3f8f1471157d680c75d9b7f17318d542d320"
    );
}

#[test]
fn curve448_doubling_matches_addition_and_multiplication() {
    let g = curve448::generator();
    let two = curve448::point_double(&g);

    assert_eq!(curve448::point_add(&g, &g), two);
    assert_eq!(curve448::point_multiply(&scalar(2, 56), &g).unwrap(), two);

    let encoded = curve448::point_to_bytes(&two, true).unwrap();
    assert_eq!(encoded.len(), 57);
    assert_eq!(
        hex::encode(&encoded[..56]),
        "b63c741cbca4327d0808125a25f0e82571ed00daf14737bfc16f261666763c5f\
         d7831e51fbbe9aaccc5cbdd86546ef9ad4e3ca5722329163"
    );
}

#[test]
fn multiplication_recovers_the_full_point() {
    // 3G + 4G = 7G needs both coordinates of every multiple.
    let g = curve25519::generator();
    let three = curve25519::point_multiply(&scalar(3, 32), &g).unwrap();
    let four = curve25519::point_multiply(&scalar(4, 32), &g).unwrap();
    let seven = curve25519::point_multiply(&scalar(7, 32), &g).unwrap();
    assert_eq!(curve25519::point_add(&three, &four), seven, "Curve25519");

    let g = curve448::generator();
    let three = curve448::point_multiply(&scalar(3, 56), &g).unwrap();
    let four = curve448::point_multiply(&scalar(4, 56), &g).unwrap();
    let seven = curve448::point_multiply(&scalar(7, 56), &g).unwrap();
    assert_eq!(curve448::point_add(&three, &four), seven, "Curve448");
    assert_eq!(
        curve448::point_multiply(&scalar(7, 56), &three).unwrap(),
        curve448::point_multiply(&scalar(21, 56), &g).unwrap(),
        "7(3G)"
    );
}

#[test]
fn subgroup_order_times_generator_is_identity() {
    let l = unhex("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");
    let g = curve25519::generator();
    assert!(curve25519::point_multiply(&l, &g).unwrap().is_identity());

    let q = unhex(
        "f34458ab92c27823558fc58d72c26c219036d6ae49db4ec4e923ca7cffffffff\
         ffffffffffffffffffffffffffffffffffffffffffffff3f",
    );
    let g = curve448::generator();
    assert!(curve448::point_multiply(&q, &g).unwrap().is_identity());
}

#[test]
fn identity_laws() {
    let g = curve25519::generator();
    let o = curve25519::identity();

    assert_eq!(curve25519::point_add(&g, &o), g);
    assert_eq!(curve25519::point_add(&o, &g), g);
    assert_eq!(curve25519::point_multiply(&scalar(0, 32), &g).unwrap(), o);
    assert_eq!(curve25519::point_to_bytes(&o, true), Err(Error::InvalidPoint));
}

#[test]
fn public_key_matches_bare_u_coordinate() {
    let alice = unhex("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");

    let mut compressed = curve25519::private_key_to_public_key(&alice, true).unwrap();
    compressed[31] &= 0x7f;
    assert_eq!(compressed, curve25519::public_u(&alice).unwrap());

    let point = curve25519::point_from_bytes(
        &curve25519::private_key_to_public_key(&alice, false).unwrap(),
    )
    .unwrap();
    let mut u = curve25519::point_to_bytes(&point, true).unwrap();
    u[31] &= 0x7f;
    assert_eq!(u, curve25519::public_u(&alice).unwrap());
}

#[test]
fn encodings_round_trip() {
    let p = curve25519::point_multiply(&scalar(0xdead_beef, 32), &curve25519::generator()).unwrap();
    for compressed in [true, false] {
        let bytes = curve25519::point_to_bytes(&p, compressed).unwrap();
        assert_eq!(bytes.len(), if compressed { 32 } else { 64 });
        assert_eq!(curve25519::point_from_bytes(&bytes).unwrap(), p);
    }

    let p = curve448::point_multiply(&scalar(0xdead_beef, 56), &curve448::generator()).unwrap();
    for compressed in [true, false] {
        let bytes = curve448::point_to_bytes(&p, compressed).unwrap();
        assert_eq!(bytes.len(), if compressed { 57 } else { 112 });
        assert_eq!(curve448::point_from_bytes(&bytes).unwrap(), p);
    }
}

#[test]
fn malformed_encodings_are_rejected() {
    // Curve448 sign byte carries nothing but the sign bit.
    let g = curve448::point_to_bytes(&curve448::generator(), true).unwrap();
    let mut padded = g.clone();
    padded[56] |= 0x01;
    assert_eq!(curve448::point_from_bytes(&padded), Err(Error::InvalidPoint));

    // u = p is not canonical.
    let p = unhex("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert_eq!(curve25519::point_from_bytes(&p), Err(Error::InvalidPoint));

    // Off-curve affine pair.
    let mut pair = curve25519::point_to_bytes(&curve25519::generator(), false).unwrap();
    pair[32] ^= 0x01;
    assert_eq!(curve25519::point_from_bytes(&pair), Err(Error::InvalidPoint));

    assert!(matches!(
        curve25519::point_from_bytes(&[0u8; 33]),
        Err(Error::InvalidLength { .. })
    ));
}
