use cryptocore::Error;
use cryptocore::hash::{
    Hmac, Md5, Sha1, Sha256, pbkdf2, pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512,
};

fn expect_eq(got: &[u8], expected: &str, what: &str) {
    assert_eq!(hex::encode(got), expected, "{what} mismatch");
}

// -------------------------------------------------------
// 1. PBKDF2-HMAC-SHA1 (RFC 6070)
// -------------------------------------------------------

#[test]
fn pbkdf2_sha1_rfc6070_vectors() {
    expect_eq(
        &pbkdf2_hmac_sha1(b"password", b"salt", 1, 20).unwrap(),
        "0c60c80f961f0e71f3a9b524af6012062fe037a6",
        "c=1",
    );
    expect_eq(
        &pbkdf2_hmac_sha1(b"password", b"salt", 2, 20).unwrap(),
        "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957",
        "c=2",
    );
    expect_eq(
        &pbkdf2_hmac_sha1(b"password", b"salt", 4096, 20).unwrap(),
        "4b007901b765489abead49d926f721d065a429c1",
        "c=4096",
    );
}

#[test]
fn pbkdf2_sha1_rfc6070_multi_block_and_nul_bytes() {
    expect_eq(
        &pbkdf2_hmac_sha1(
            b"passwordPASSWORDpassword",
            b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
            4096,
            25,
        )
        .unwrap(),
        "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038",
        "25-byte output",
    );
    expect_eq(
        &pbkdf2_hmac_sha1(b"pass\0word", b"sa\0lt", 4096, 16).unwrap(),
        "56fa6aa75548099dcc37d7f03425e0c3",
        "embedded NUL bytes",
    );
}

// -------------------------------------------------------
// 2. PBKDF2-HMAC-SHA256 (RFC 7914, section 11)
// -------------------------------------------------------

#[test]
fn pbkdf2_sha256_rfc7914_vectors() {
    expect_eq(
        &pbkdf2_hmac_sha256(b"passwd", b"salt", 1, 64).unwrap(),
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
        "P=passwd, c=1",
    );
    expect_eq(
        &pbkdf2_hmac_sha256(b"Password", b"NaCl", 80000, 64).unwrap(),
        "4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56\
         a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d",
        "P=Password, c=80000",
    );
}

#[test]
fn pbkdf2_sha256_long_password_is_hashed_as_hmac_key() {
    let password: Vec<u8> = (0..200).map(|i| i as u8).collect();
    expect_eq(
        &pbkdf2_hmac_sha256(&password, b"salt", 3, 40).unwrap(),
        "334fa713824d237661364cd0b5da8746ea4763b9f6dccd917ab3f7de41bbc6f1d7a6ba66d64e4c13",
        "200-byte password",
    );
}

// -------------------------------------------------------
// 3. PBKDF2-HMAC-SHA512
// -------------------------------------------------------

#[test]
fn pbkdf2_sha512_vectors() {
    expect_eq(
        &pbkdf2_hmac_sha512(b"password", b"salt", 1, 64).unwrap(),
        "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
         c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce",
        "c=1",
    );

    // Two blocks, the second one truncated.
    expect_eq(
        &pbkdf2_hmac_sha512(b"password", b"salt", 2, 100).unwrap(),
        "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53c\
         f76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e\
         473e311ad827b68945f4e2dddb204c78e40e2495141e411cd272d020640d673c\
         d34aa29f",
        "c=2, 100 bytes",
    );
}

#[test]
fn pbkdf2_output_prefixes_agree() {
    let long = pbkdf2::<Sha256>(b"pw", b"salt", 5, 70).unwrap();
    for len in [1, 31, 32, 33, 64] {
        assert_eq!(pbkdf2::<Sha256>(b"pw", b"salt", 5, len).unwrap(), long[..len], "length {len}");
    }
}

// -------------------------------------------------------
// 4. PARAMETER ERRORS
// -------------------------------------------------------

#[test]
fn pbkdf2_rejects_degenerate_parameters() {
    assert!(matches!(
        pbkdf2_hmac_sha256(b"pw", b"salt", 0, 32),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        pbkdf2_hmac_sha256(b"pw", b"salt", 1, 0),
        Err(Error::InvalidParameter(_))
    ));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn pbkdf2_rejects_more_than_u32_max_blocks() {
    let too_long = (u32::MAX as usize + 1) * 20;
    assert!(matches!(
        pbkdf2_hmac_sha1(b"pw", b"salt", 1, too_long),
        Err(Error::InvalidParameter(_))
    ));
}

// -------------------------------------------------------
// 5. HMAC OVER THE LEGACY HASHES (RFC 2202 style)
// -------------------------------------------------------

#[test]
fn hmac_sha1_and_md5() {
    let msg = b"The quick brown fox jumps over the lazy dog";

    let mut mac = Hmac::<Sha1>::new(b"key");
    mac.update(msg);
    expect_eq(&mac.finalize(), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9", "HMAC-SHA1");

    let mut mac = Hmac::<Md5>::new(b"key");
    mac.update(msg);
    expect_eq(&mac.finalize(), "80070713463e7749b90c2dc24911e275", "HMAC-MD5");
}
