//! BLAKE2b: 64-bit words, 128-byte blocks, 12 rounds, digests up to 64
//! bytes.

use super::{Blake2Params, blake2_engine};

use crate::error::Result;

blake2_engine! {
    /// Incremental BLAKE2b.
    Blake2b, word = u64, counter = u128, rounds = 12,
    rotations = (32, 24, 16, 63),
    iv = [
        0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
        0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
    ]
}

/// BLAKE2b with explicit parameters.
///
/// # Errors
/// See [`Blake2b::new`].
pub fn blake2b(data: &[u8], digest_size: usize, key: &[u8], salt: &[u8], person: &[u8]) -> Result<Vec<u8>> {
    let params = Blake2Params {
        digest_size,
        key,
        salt,
        person,
    };

    let mut h = Blake2b::new(&params)?;
    h.update(data);
    Ok(h.finalize())
}

macro_rules! fixed {
    ($($name:ident => $len:literal),*) => {
        $(
            #[doc = concat!("Unkeyed BLAKE2b with a ", stringify!($len), "-byte digest.")]
            pub fn $name(data: &[u8]) -> [u8; $len] {
                let mut out = [0u8; $len];
                if let Ok(mut h) = Blake2b::new(&Blake2Params::new($len)) {
                    h.update(data);
                    out.copy_from_slice(&h.finalize());
                }
                out
            }
        )*
    };
}

fixed!(blake2b_160 => 20, blake2b_256 => 32, blake2b_384 => 48, blake2b_512 => 64);
