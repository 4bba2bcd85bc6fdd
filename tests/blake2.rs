use cryptocore::Error;
use cryptocore::hash::blake2::{blake2b_160, blake2b_384, blake2b_512, blake2s_128, blake2s_224};
use cryptocore::hash::{Blake2Params, Blake2b, Blake2s, blake2b, blake2s};

fn pattern(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}

fn expect_hex(got: &[u8], expected: &str, what: &str) {
    assert_eq!(hex::encode(got), expected, "{what} mismatch");
}

// -------------------------------------------------------
// 1. RFC 7693 / REFERENCE KAT VECTORS
// -------------------------------------------------------

#[test]
fn blake2b_512_empty() {
    expect_hex(
        &blake2b_512(b""),
        "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
        "BLAKE2b-512(\"\")",
    );
}

#[test]
fn blake2b_abc() {
    expect_hex(
        &blake2b(b"abc", 64, b"", b"", b"").unwrap(),
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d17d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
        "BLAKE2b-512(\"abc\")",
    );
}

#[test]
fn blake2s_abc() {
    expect_hex(
        &blake2s(b"abc", 32, b"", b"", b"").unwrap(),
        "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982",
        "BLAKE2s-256(\"abc\")",
    );
}

#[test]
fn keyed_kat_last_entries() {
    // Last entries of the reference keyed KAT: key 00..3f / 00..1f,
    // message 00..fe.
    expect_hex(
        &blake2b(&pattern(255), 64, &pattern(64), b"", b"").unwrap(),
        "142709d62e28fcccd0af97fad0f8465b971e82201dc51070faa0372aa43e92484be1c1e73ba10906d5d1853db6a4106e0a7bf9800d373d6dee2d46d62ef2a461",
        "keyed BLAKE2b",
    );
    expect_hex(
        &blake2s(&pattern(255), 32, &pattern(32), b"", b"").unwrap(),
        "3fb735061abc519dfe979e54c1ee5bfad0a9d858b3315bad34bde999efd724dd",
        "keyed BLAKE2s",
    );
}

// -------------------------------------------------------
// 2. DIGEST SIZES
// -------------------------------------------------------

#[test]
fn fixed_size_helpers() {
    expect_hex(
        &blake2b_160(b""),
        "3345524abf6bbe1809449224b5972c41790b6cf2",
        "BLAKE2b-160(\"\")",
    );
    expect_hex(
        &blake2s_128(b""),
        "64550d6ffe2c0a01a14aba1eade0200c",
        "BLAKE2s-128(\"\")",
    );
    expect_hex(
        &blake2b_384(&pattern(200)),
        "c3fb89d604f306fc6ee2aafebefbf69d26b21dbbdc055166858d527a4501ff479894b533398334379c182ad6747bd1af",
        "BLAKE2b-384",
    );
    expect_hex(
        &blake2s_224(&pattern(200)),
        "dcd646d913286f77fa6bd9b5e1999646a26448e586bcb54462e1d38d",
        "BLAKE2s-224",
    );
}

#[test]
fn digest_size_changes_the_whole_output() {
    let short = blake2b(b"abc", 32, b"", b"", b"").unwrap();
    let long = blake2b(b"abc", 64, b"", b"", b"").unwrap();
    assert_ne!(short[..], long[..32]);
}

// -------------------------------------------------------
// 3. SALT AND PERSONALIZATION
// -------------------------------------------------------

#[test]
fn salted_personalized_keyed_vectors() {
    // Lengths around the block boundary, where the last block is held back.
    let cases = [
        (0usize, "535914f1898dbd243c0b8efdd0c15d7666dd000a58c14a927eaa95597672b28a", "3bb7336d3018ce85a9d64b3a6fc6eb3d28afbd49"),
        (1, "dd2950d471692e115d880523dac4c69e315ad65f2b8202f916f4e53b9655b3c1", "891ae48c4dfbebabd424d0926b6719756487b310"),
        (127, "96ccada9dd28718c128e73b62c49bb9b84b2d8cda72e939df5c353f2ec547713", "8a3879d7f147260d4ad207b3affb7ed4f4efa90b"),
        (128, "6cebc72aa22b00af2c8f9a90a1ceb91fcc81ddd4a3c8c715203560e565e58dc4", "7f52708f254c6ba7d3b204ef1caacfd31e61a441"),
        (129, "fdae8f171ece0574f6a3b601fa6e49463bb1c28357eb24d2102ff7b2f95ef3e2", "34adb81af24707a392184301f1167c994dbbfe86"),
        (256, "910e0993b558c5af9910fe444a7bd08162bdc36e6accadc088dd9fd77164b208", "d5cc4cc33380642a3e8bb77b92bf926ca11e50f5"),
    ];

    for (len, b_expected, s_expected) in cases {
        let data = pattern(len);

        expect_hex(
            &blake2b(&data, 32, &[b'k'; 7], &[b's'; 16], &[b'p'; 16]).unwrap(),
            b_expected,
            &format!("BLAKE2b, length {len}"),
        );
        expect_hex(
            &blake2s(&data, 20, &[b'k'; 7], &[b's'; 8], &[b'p'; 8]).unwrap(),
            s_expected,
            &format!("BLAKE2s, length {len}"),
        );
    }
}

#[test]
fn short_salt_is_zero_padded() {
    let short = blake2s(b"m", 32, b"", b"ab", b"").unwrap();
    let padded = blake2s(b"m", 32, b"", b"ab\0\0\0\0\0\0", b"").unwrap();
    assert_eq!(short, padded);
}

// -------------------------------------------------------
// 4. INCREMENTAL API
// -------------------------------------------------------

#[test]
fn incremental_matches_one_shot() {
    let data = pattern(300);

    for split in [0, 1, 63, 64, 65, 127, 128, 129, 300] {
        let params = Blake2Params::new(64).key(b"secret").person(b"cryptocore");
        let mut h = Blake2b::new(&params).unwrap();
        h.update(&data[..split]);
        h.update(&data[split..]);
        assert_eq!(
            h.finalize(),
            blake2b(&data, 64, b"secret", b"", b"cryptocore").unwrap(),
            "BLAKE2b split at {split}"
        );

        let mut h = Blake2s::new(&Blake2Params::new(32)).unwrap();
        h.update(&data[..split]);
        h.update(&data[split..]);
        assert_eq!(
            h.finalize(),
            blake2s(&data, 32, b"", b"", b"").unwrap(),
            "BLAKE2s split at {split}"
        );
    }
}

// -------------------------------------------------------
// 5. PARAMETER VALIDATION
// -------------------------------------------------------

#[test]
fn invalid_digest_sizes_are_rejected() {
    for size in [0, 65] {
        assert!(
            matches!(blake2b(b"", size, b"", b"", b""), Err(Error::InvalidParameter(_))),
            "BLAKE2b digest size {size}"
        );
    }
    for size in [0, 33] {
        assert!(
            matches!(blake2s(b"", size, b"", b"", b""), Err(Error::InvalidParameter(_))),
            "BLAKE2s digest size {size}"
        );
    }
}

#[test]
fn oversized_key_salt_person_are_rejected() {
    let too_long = [0u8; 65];

    assert!(matches!(
        blake2b(b"", 64, &too_long, b"", b""),
        Err(Error::InvalidLength { got: 65, .. })
    ));
    assert!(matches!(
        blake2b(b"", 64, b"", &too_long[..17], b""),
        Err(Error::InvalidLength { got: 17, .. })
    ));
    assert!(matches!(
        blake2s(b"", 32, &too_long[..33], b"", b""),
        Err(Error::InvalidLength { got: 33, .. })
    ));
    assert!(matches!(
        blake2s(b"", 32, b"", b"", &too_long[..9]),
        Err(Error::InvalidLength { got: 9, .. })
    ));
}
