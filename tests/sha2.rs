use cryptocore::hash::{
    HashFunction, Hmac, Sha224, Sha256, Sha384, Sha512, hmac_sha256, hmac_sha384, hmac_sha512,
    sha224, sha256, sha384, sha512,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::Digest;

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

fn expect_eq(got: &[u8], expected: &str, what: &str) {
    assert_eq!(
        hex::encode(got),
        expected,
        "{what} mismatch\nExpected {expected}\nGot      {}",
        hex::encode(got),
    );
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS (FIPS 180-4 examples)
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_eq(
        &sha256(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        "SHA-256(\"\")",
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_eq(
        &sha256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        "SHA-256 two-block message",
    );
}

#[test]
fn sha256_million_a() {
    let mut hasher = Sha256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk);
    }

    expect_eq(
        &hasher.finalize(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        "SHA-256 of one million 'a'",
    );
}

#[test]
fn sha224_vectors() {
    expect_eq(
        &sha224(b""),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
        "SHA-224(\"\")",
    );
    expect_eq(
        &sha224(b"abc"),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        "SHA-224(\"abc\")",
    );
    expect_eq(
        &sha224(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
        "SHA-224 two-block message",
    );
}

#[test]
fn sha384_empty_vector() {
    expect_eq(
        &sha384(b""),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
        "SHA-384(\"\")",
    );
}

#[test]
fn sha512_abc_vector() {
    expect_eq(
        &sha512(b"abc"),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        "SHA-512(\"abc\")",
    );
}

// -------------------------------------------------------
// 2. PADDING BOUNDARIES
// -------------------------------------------------------

#[test]
fn sha2_padding_boundaries_match_reference() {
    // Lengths around the point where the length field no longer fits.
    for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 111, 112, 113, 127, 128, 129, 255, 256] {
        let input: Vec<u8> = (0..len).map(|i| i as u8).collect();

        assert_eq!(
            sha256(&input).as_slice(),
            sha2::Sha256::digest(&input).as_slice(),
            "SHA-256 mismatch for length {len}",
        );
        assert_eq!(
            sha224(&input).as_slice(),
            sha2::Sha224::digest(&input).as_slice(),
            "SHA-224 mismatch for length {len}",
        );
        assert_eq!(
            sha384(&input).as_slice(),
            sha2::Sha384::digest(&input).as_slice(),
            "SHA-384 mismatch for length {len}",
        );
        assert_eq!(
            sha512(&input).as_slice(),
            sha2::Sha512::digest(&input).as_slice(),
            "SHA-512 mismatch for length {len}",
        );
    }
}

// -------------------------------------------------------
// 3. INCREMENTAL API
// -------------------------------------------------------

#[test]
fn sha2_incremental_matches_one_shot_for_random_splits() {
    let mut rng = StdRng::seed_from_u64(0x5a5a);

    for _ in 0..50 {
        let len = rng.gen_range(0..600);
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);
        let split = rng.gen_range(0..=len);

        let mut h256 = Sha256::new();
        h256.update(&data[..split]);
        h256.update(&data[split..]);
        assert_eq!(h256.finalize(), sha256(&data).to_vec(), "SHA-256 split at {split}/{len}");

        let mut h512 = Sha512::new();
        for byte in &data {
            h512.update(core::slice::from_ref(byte));
        }
        assert_eq!(h512.finalize(), sha512(&data).to_vec(), "SHA-512 byte-wise, length {len}");

        let mut h384 = Sha384::new();
        h384.update(&data[..split]);
        h384.update(&data[split..]);
        assert_eq!(h384.finalize(), sha384(&data).to_vec(), "SHA-384 split at {split}/{len}");

        let mut h224 = Sha224::new();
        h224.update(&data[..split]);
        h224.update(&data[split..]);
        assert_eq!(h224.finalize(), sha224(&data).to_vec(), "SHA-224 split at {split}/{len}");
    }
}

#[test]
fn sha2_trait_constants() {
    assert_eq!(Sha256::BLOCK_SIZE, 64);
    assert_eq!(Sha256::OUTPUT_SIZE, 32);
    assert_eq!(Sha224::BLOCK_SIZE, 64);
    assert_eq!(Sha224::OUTPUT_SIZE, 28);
    assert_eq!(Sha384::BLOCK_SIZE, 128);
    assert_eq!(Sha384::OUTPUT_SIZE, 48);
    assert_eq!(Sha512::BLOCK_SIZE, 128);
    assert_eq!(Sha512::OUTPUT_SIZE, 64);
    assert_eq!(Sha256::digest(b"abc"), sha256(b"abc").to_vec());
}

// -------------------------------------------------------
// 4. HMAC (RFC 4231)
// -------------------------------------------------------

#[test]
fn hmac_rfc4231_case_1() {
    let key = [0x0b; 20];

    expect_eq(
        &hmac_sha256(&key, b"Hi There"),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
        "HMAC-SHA-256",
    );
    expect_eq(
        &hmac_sha384(&key, b"Hi There"),
        "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6",
        "HMAC-SHA-384",
    );
    expect_eq(
        &hmac_sha512(&key, b"Hi There"),
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        "HMAC-SHA-512",
    );
}

#[test]
fn hmac_long_key_is_hashed_first() {
    let key = [0xaa; 131];
    let data = b"Test Using Larger Than Block-Size Key - Hash Key First";

    expect_eq(
        &hmac_sha256(&key, data),
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
        "HMAC-SHA-256 with a 131-byte key",
    );
}

#[test]
fn hmac_incremental_matches_one_shot() {
    let key = unhex("000102030405060708090a0b0c0d0e0f");

    let mut mac = Hmac::<Sha256>::new(&key);
    mac.update(b"split ");
    mac.update(b"message");

    assert_eq!(mac.finalize(), hmac_sha256(&key, b"split message"));
}
