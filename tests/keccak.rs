use cryptocore::Error;
use cryptocore::hash::{
    CShake128, HashFunction, Sha3_256, Shake128, TURBO_SHAKE_DEFAULT_DOMAIN, cshake_128,
    cshake_256, kangaroo_twelve, keccak_256, kmac_128, kmac_256, kmac_xof_128, sha3_224, sha3_256,
    sha3_384, sha3_512, shake_128, shake_256, tuple_hash_128, tuple_hash_256, tuple_hash_xof_128,
    turbo_shake_128, turbo_shake_256,
};
use sha3::Digest;

/// `ptn(n)`: the repeating `00 01 .. FA` pattern of RFC 9861.
fn ptn(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 251) as u8).collect()
}

fn expect_hex(got: &[u8], expected: &str, what: &str) {
    assert_eq!(hex::encode(got), expected, "{what} mismatch");
}

// -------------------------------------------------------
// 1. SHA-3 AND KECCAK
// -------------------------------------------------------

#[test]
fn sha3_256_empty_vector() {
    expect_hex(
        &sha3_256(b""),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        "SHA3-256(\"\")",
    );
}

#[test]
fn keccak_256_empty_vector() {
    // Pre-standard padding, as used by Ethereum.
    expect_hex(
        &keccak_256(b""),
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        "Keccak-256(\"\")",
    );
}

#[test]
fn sha3_abc_vectors() {
    expect_hex(
        &sha3_224(b"abc"),
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
        "SHA3-224(\"abc\")",
    );
    expect_hex(
        &sha3_512(b"abc"),
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
        "SHA3-512(\"abc\")",
    );
}

#[test]
fn sha3_matches_reference_across_rate_boundaries() {
    // 136 is the SHA3-256 rate, 104 the SHA3-384 rate, 72 the SHA3-512 rate.
    for len in [0usize, 1, 71, 72, 73, 103, 104, 105, 135, 136, 137, 272, 1000] {
        let input = ptn(len);

        assert_eq!(
            sha3_256(&input).as_slice(),
            sha3::Sha3_256::digest(&input).as_slice(),
            "SHA3-256, length {len}"
        );
        assert_eq!(
            sha3_384(&input).as_slice(),
            sha3::Sha3_384::digest(&input).as_slice(),
            "SHA3-384, length {len}"
        );
        assert_eq!(
            sha3_512(&input).as_slice(),
            sha3::Sha3_512::digest(&input).as_slice(),
            "SHA3-512, length {len}"
        );
        assert_eq!(
            keccak_256(&input).as_slice(),
            sha3::Keccak256::digest(&input).as_slice(),
            "Keccak-256, length {len}"
        );
    }
}

#[test]
fn sha3_incremental_matches_one_shot() {
    let input = ptn(500);

    for split in [0, 1, 135, 136, 137, 499, 500] {
        let mut hasher = Sha3_256::new();
        hasher.update(&input[..split]);
        hasher.update(&input[split..]);
        assert_eq!(hasher.finalize(), sha3_256(&input).to_vec(), "split at {split}");
    }
}

// -------------------------------------------------------
// 2. SHAKE
// -------------------------------------------------------

#[test]
fn shake_vectors() {
    expect_hex(
        &shake_128(b"", 32).unwrap(),
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
        "SHAKE128(\"\", 32)",
    );
    expect_hex(
        &shake_256(b"", 64).unwrap(),
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762fd75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
        "SHAKE256(\"\", 64)",
    );
    expect_hex(
        &shake_256(b"abc", 32).unwrap(),
        "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739",
        "SHAKE256(\"abc\", 32)",
    );
}

#[test]
fn shake_output_crosses_squeeze_blocks() {
    // Bytes 168..200 of SHAKE128("") come from the second squeeze.
    let out = shake_128(b"", 200).unwrap();
    expect_hex(
        &out[168..],
        "767be1fda69419dfb927e9df07348b196691abaeb580b32def58538b8d23f877",
        "SHAKE128 second block",
    );
}

#[test]
fn xof_shorter_output_is_prefix_of_longer() {
    let long = shake_256(b"prefix", 300).unwrap();
    for len in [1, 31, 136, 137, 299] {
        assert_eq!(shake_256(b"prefix", len).unwrap(), long[..len], "length {len}");
    }

    let long = kangaroo_twelve(b"prefix", 300, b"").unwrap();
    assert_eq!(kangaroo_twelve(b"prefix", 32, b"").unwrap(), long[..32]);
}

#[test]
fn xof_reader_reads_in_pieces() {
    let mut shake = Shake128::new();
    shake.update(b"piecewise");
    let mut reader = shake.finalize_xof();

    let mut first = [0u8; 10];
    reader.read(&mut first);
    let rest = reader.read_vec(190);

    let mut joined = first.to_vec();
    joined.extend_from_slice(&rest);
    assert_eq!(joined, shake_128(b"piecewise", 200).unwrap());
}

#[test]
fn zero_output_length_is_rejected() {
    let invalid = |r: Result<Vec<u8>, Error>| matches!(r, Err(Error::InvalidParameter(_)));

    assert!(invalid(shake_128(b"x", 0)), "SHAKE128");
    assert!(invalid(cshake_256(b"x", 0, b"N", b"S")), "cSHAKE256");
    assert!(invalid(kmac_128(b"key", b"x", 0, b"")), "KMAC128");
    assert!(invalid(tuple_hash_256(&[b"x".as_slice()], 0, b"")), "TupleHash256");
    assert!(invalid(kangaroo_twelve(b"x", 0, b"")), "KangarooTwelve");
    assert!(invalid(turbo_shake_128(b"x", 0, TURBO_SHAKE_DEFAULT_DOMAIN)), "TurboSHAKE128");
}

// -------------------------------------------------------
// 3. SP 800-185 (NIST sample values)
// -------------------------------------------------------

#[test]
fn cshake_nist_samples() {
    let data = [0x00, 0x01, 0x02, 0x03];

    expect_hex(
        &cshake_128(&data, 32, b"", b"Email Signature").unwrap(),
        "c1c36925b6409a04f1b504fcbca9d82b4017277cb5ed2b2065fc1d3814d5aaf5",
        "cSHAKE128 sample #1",
    );
    expect_hex(
        &cshake_256(&data, 64, b"", b"Email Signature").unwrap(),
        "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd164020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c",
        "cSHAKE256 sample #3",
    );
}

#[test]
fn cshake_without_name_or_customization_is_shake() {
    assert_eq!(
        cshake_128(b"abc", 48, b"", b"").unwrap(),
        shake_128(b"abc", 48).unwrap()
    );

    let mut incremental = CShake128::new(b"", b"");
    incremental.update(b"abc");
    assert_eq!(
        incremental.finalize_xof().read_vec(48),
        shake_128(b"abc", 48).unwrap()
    );
}

#[test]
fn kmac_nist_samples() {
    let key: Vec<u8> = (0x40..0x60).collect();
    let data = [0x00, 0x01, 0x02, 0x03];

    expect_hex(
        &kmac_128(&key, &data, 32, b"").unwrap(),
        "e5780b0d3ea6f7d3a429c5706aa43a00fadbd7d49628839e3187243f456ee14e",
        "KMAC128 sample #1",
    );
    expect_hex(
        &kmac_128(&key, &data, 32, b"My Tagged Application").unwrap(),
        "3b1fba963cd8b0b59e8c1a6d71888b7143651af8ba0a7070c0979e2811324aa5",
        "KMAC128 sample #2",
    );
    expect_hex(
        &kmac_256(&key, &data, 64, b"My Tagged Application").unwrap(),
        "20c570c31346f703c9ac36c61c03cb64c3970d0cfc787e9b79599d273a68d2f7f69d4cc3de9d104a351689f27cf6f5951f0103f33f4f24871024d9c27773a8dd",
        "KMAC256 sample #4",
    );
    expect_hex(
        &kmac_xof_128(&key, &data, 32, b"").unwrap(),
        "cd83740bbd92ccc8cf032b1481a0f4460e7ca9dd12b08a0c4031178bacd6ec35",
        "KMACXOF128 sample #1",
    );
}

#[test]
fn kmac_output_length_is_bound_into_the_tag() {
    let short = kmac_128(b"key", b"data", 16, b"").unwrap();
    let long = kmac_128(b"key", b"data", 32, b"").unwrap();
    assert_ne!(short[..], long[..16]);

    let xof_short = kmac_xof_128(b"key", b"data", 16, b"").unwrap();
    let xof_long = kmac_xof_128(b"key", b"data", 32, b"").unwrap();
    assert_eq!(xof_short[..], xof_long[..16]);
}

#[test]
fn tuple_hash_nist_samples() {
    let parts: [&[u8]; 2] = [&[0x00, 0x01, 0x02], &[0x10, 0x11, 0x12, 0x13, 0x14, 0x15]];

    expect_hex(
        &tuple_hash_128(&parts, 32, b"").unwrap(),
        "c5d8786c1afb9b82111ab34b65b2c0048fa64e6d48e263264ce1707d3ffc8ed1",
        "TupleHash128 sample #1",
    );
    expect_hex(
        &tuple_hash_256(&parts, 64, b"My Tuple App").unwrap(),
        "147c2191d5ed7efd98dbd96d7ab5a11692576f5fe2a5065f3e33de6bba9f3aa1c4e9a068a289c61c95aab30aee1e410b0b607de3620e24a4e3bf9852a1d4367e",
        "TupleHash256 sample #5",
    );
    expect_hex(
        &tuple_hash_xof_128(&parts, 32, b"").unwrap(),
        "2f103cd7c32320353495c68de1a8129245c6325f6f2a3d608d92179c96e68488",
        "TupleHashXOF128 sample #1",
    );
}

#[test]
fn tuple_hash_separates_element_boundaries() {
    let split: [&[u8]; 2] = [&[0x00, 0x01, 0x02], &[0x10, 0x11, 0x12, 0x13, 0x14, 0x15]];
    let joined: [&[u8]; 1] = [&[0x00, 0x01, 0x02, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15]];

    let joined_hash = tuple_hash_128(&joined, 32, b"").unwrap();
    expect_hex(
        &joined_hash,
        "4e542ccdb48bd59b4323abe0f4cd362ff85c2d99e5064b3f2b7b29b8bc9f1b33",
        "TupleHash128 of the concatenation",
    );
    assert_ne!(tuple_hash_128(&split, 32, b"").unwrap(), joined_hash);
}

// -------------------------------------------------------
// 4. KANGAROOTWELVE AND TURBOSHAKE (RFC 9861)
// -------------------------------------------------------

#[test]
fn kangaroo_twelve_single_node_vectors() {
    expect_hex(
        &kangaroo_twelve(b"", 32, b"").unwrap(),
        "1ac2d450fc3b4205d19da7bfca1b37513c0803577ac7167f06fe2ce1f0ef39e5",
        "KT128(M=\"\", C=\"\", 32)",
    );
    expect_hex(
        &kangaroo_twelve(b"", 64, b"").unwrap(),
        "1ac2d450fc3b4205d19da7bfca1b37513c0803577ac7167f06fe2ce1f0ef39e54269c056b8c82e48276038b6d292966cc07a3d4645272e31ff38508139eb0a71",
        "KT128(M=\"\", C=\"\", 64)",
    );
    expect_hex(
        &kangaroo_twelve(&ptn(17), 32, b"").unwrap(),
        "6bf75fa2239198db4772e36478f8e19b0f371205f6a9a93a273f51df37122888",
        "KT128(M=ptn(17))",
    );
    expect_hex(
        &kangaroo_twelve(b"", 32, &ptn(1)).unwrap(),
        "fab658db63e94a246188bf7af69a133045f46ee984c56e3c3328caaf1aa1a583",
        "KT128(C=ptn(1))",
    );
    expect_hex(
        &kangaroo_twelve(&[0xff], 32, &ptn(41)).unwrap(),
        "d848c5068ced736f4462159b9867fd4c20b808acc3d5bc48e0b06ba0a3762ec4",
        "KT128(M=ff, C=ptn(41))",
    );
}

#[test]
fn kangaroo_twelve_tree_vectors() {
    expect_hex(
        &kangaroo_twelve(&ptn(17 * 17 * 17), 32, b"").unwrap(),
        "cb552e2ec77d9910701d578b457ddf772c12e322e4ee7fe417f92c758f0d59d0",
        "KT128(M=ptn(17^3))",
    );
    expect_hex(
        &kangaroo_twelve(&ptn(17 * 17 * 17 * 17), 32, b"").unwrap(),
        "8701045e22205345ff4dda05555cbb5c3af1a771c2b89baef37db43d9998b9fe",
        "KT128(M=ptn(17^4))",
    );
}

#[test]
fn kangaroo_twelve_chunk_boundary() {
    // 8191 + 1 suffix byte fits one chunk; 8192 + 1 spills into a leaf.
    expect_hex(
        &kangaroo_twelve(&ptn(8191), 32, b"").unwrap(),
        "1b577636f723643e990cc7d6a659837436fd6a103626600eb8301cd1dbe553d6",
        "KT128(M=ptn(8191))",
    );
    expect_hex(
        &kangaroo_twelve(&ptn(8192), 32, b"").unwrap(),
        "48f256f6772f9edfb6a8b661ec92dc93b95ebd05a08a17b39ae3490870c926c3",
        "KT128(M=ptn(8192))",
    );
}

#[test]
fn kangaroo_twelve_customization_spanning_chunks() {
    // The customization string and its length encoding cross the first
    // chunk boundary, or fill whole leaves on their own.
    expect_hex(
        &kangaroo_twelve(&ptn(8190), 32, &ptn(10)).unwrap(),
        "08bf9e167d4a1ddcacfa3b472f02a978db96926372ca4539e52bd1af051ffa2d",
        "KT128(M=ptn(8190), C=ptn(10))",
    );
    expect_hex(
        &kangaroo_twelve(&ptn(20000), 32, &ptn(8200)).unwrap(),
        "d28780cce2b80b5f5ff6aa86a013c46833b90c4f73526795cfabdc25698281e4",
        "KT128(M=ptn(20000), C=ptn(8200))",
    );
    expect_hex(
        &kangaroo_twelve(b"", 32, &ptn(9000)).unwrap(),
        "3168c7cef9ba2069a68c2e0c0290b5dd3048ef13d3fe32c3ffdd321f1b247922",
        "KT128(M=\"\", C=ptn(9000))",
    );
}

#[test]
fn turbo_shake_vectors() {
    expect_hex(
        &turbo_shake_128(b"", 32, 0x1f).unwrap(),
        "1e415f1c5983aff2169217277d17bb538cd945a397ddec541f1ce41af2c1b74c",
        "TurboSHAKE128(M=\"\", D=1F)",
    );
    expect_hex(
        &turbo_shake_128(&ptn(17), 32, 0x1f).unwrap(),
        "9c97d036a3bac819db70ede0ca554ec6e4c2a1a4ffbfd9ec269ca6a111161233",
        "TurboSHAKE128(M=ptn(17), D=1F)",
    );
    expect_hex(
        &turbo_shake_128(&[0xff], 32, 0x06).unwrap(),
        "8ec9c66465ed0d4a6c35d13506718d687a25cb05c74cca1e42501abd83874a67",
        "TurboSHAKE128(M=ff, D=06)",
    );
    expect_hex(
        &turbo_shake_128(&[0xff, 0xff, 0xff], 32, 0x07).unwrap(),
        "b658576001cad9b1e5f399a9f77723bba05458042d68206f7252682dba3663ed",
        "TurboSHAKE128(M=ffffff, D=07)",
    );
    expect_hex(
        &turbo_shake_256(b"", 64, 0x1f).unwrap(),
        "367a329dafea871c7802ec67f905ae13c57695dc2c6663c61035f59a18f8e7db11edc0e12e91ea60eb6b32df06dd7f002fbafabb6e13ec1cc20d995547600db0",
        "TurboSHAKE256(M=\"\", D=1F)",
    );
}

#[test]
fn turbo_shake_rejects_out_of_range_domain() {
    for domain in [0x00, 0x80, 0xff] {
        assert!(
            matches!(turbo_shake_128(b"", 32, domain), Err(Error::InvalidParameter(_))),
            "domain {domain:#04x} should be rejected"
        );
    }
    assert!(turbo_shake_256(b"", 32, 0x7f).is_ok());
    assert!(turbo_shake_256(b"", 32, 0x01).is_ok());
}
