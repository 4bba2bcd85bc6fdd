//! PBKDF2 (RFC 8018, section 5.2) over [`Hmac`].

use super::{HashFunction, Hmac, Sha1, Sha256, Sha512};

use crate::error::{Error, Result};

use zeroize::Zeroize;

/// Derives `output_length` bytes from `password` and `salt` with
/// PBKDF2-HMAC-`H`.
///
/// # Arguments
///
/// * `password` - The password, used as the HMAC key
/// * `salt` - The salt
/// * `iterations` - PRF applications per output block, at least 1
/// * `output_length` - Derived key length in bytes
///
/// # Errors
///
/// [`Error::InvalidParameter`] when `iterations` or `output_length` is zero,
/// or when `output_length` exceeds `(2³² − 1) · H::OUTPUT_SIZE`.
///
/// # Security
///
/// - The password is keyed into HMAC once and the keyed state is cloned
///   for each PRF call.
/// - Intermediate blocks are zeroized before returning.
pub fn pbkdf2<H: HashFunction>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_length: usize,
) -> Result<Vec<u8>> {
    if iterations == 0 {
        return Err(Error::InvalidParameter("PBKDF2 needs at least one iteration"));
    }
    if output_length == 0 {
        return Err(Error::InvalidParameter("PBKDF2 output length must be positive"));
    }

    let blocks = output_length.div_ceil(H::OUTPUT_SIZE);
    if blocks as u64 > u32::MAX as u64 {
        return Err(Error::InvalidParameter("PBKDF2 output length too large"));
    }

    let prf = Hmac::<H>::new(password);
    let mut out = Vec::with_capacity(output_length);

    for index in 1..=blocks as u32 {
        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&index.to_be_bytes());
        let mut u = mac.finalize();
        let mut t = u.clone();

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(&u);
            u.zeroize();
            u = mac.finalize();
            t.iter_mut().zip(&u).for_each(|(t, u)| *t ^= u);
        }

        let take = (output_length - out.len()).min(t.len());
        out.extend_from_slice(&t[..take]);
        u.zeroize();
        t.zeroize();
    }

    tracing::trace!(iterations, output_length, "pbkdf2 derived key");
    Ok(out)
}

/// PBKDF2-HMAC-SHA1.
pub fn pbkdf2_hmac_sha1(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_length: usize,
) -> Result<Vec<u8>> {
    pbkdf2::<Sha1>(password, salt, iterations, output_length)
}

/// PBKDF2-HMAC-SHA256.
pub fn pbkdf2_hmac_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_length: usize,
) -> Result<Vec<u8>> {
    pbkdf2::<Sha256>(password, salt, iterations, output_length)
}

/// PBKDF2-HMAC-SHA512.
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_length: usize,
) -> Result<Vec<u8>> {
    pbkdf2::<Sha512>(password, salt, iterations, output_length)
}
