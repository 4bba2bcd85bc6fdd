//! BLAKE2s: 32-bit words, 64-byte blocks, 10 rounds, digests up to 32
//! bytes.

use super::{Blake2Params, blake2_engine};

use crate::error::Result;

blake2_engine! {
    /// Incremental BLAKE2s.
    Blake2s, word = u32, counter = u64, rounds = 10,
    rotations = (16, 12, 8, 7),
    iv = [
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
    ]
}

/// BLAKE2s with explicit parameters.
///
/// # Errors
/// See [`Blake2s::new`].
pub fn blake2s(data: &[u8], digest_size: usize, key: &[u8], salt: &[u8], person: &[u8]) -> Result<Vec<u8>> {
    let params = Blake2Params {
        digest_size,
        key,
        salt,
        person,
    };

    let mut h = Blake2s::new(&params)?;
    h.update(data);
    Ok(h.finalize())
}

macro_rules! fixed {
    ($($name:ident => $len:literal),*) => {
        $(
            #[doc = concat!("Unkeyed BLAKE2s with a ", stringify!($len), "-byte digest.")]
            pub fn $name(data: &[u8]) -> [u8; $len] {
                let mut out = [0u8; $len];
                if let Ok(mut h) = Blake2s::new(&Blake2Params::new($len)) {
                    h.update(data);
                    out.copy_from_slice(&h.finalize());
                }
                out
            }
        )*
    };
}

fixed!(blake2s_128 => 16, blake2s_160 => 20, blake2s_224 => 28, blake2s_256 => 32);
