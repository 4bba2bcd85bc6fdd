//! Hash functions, extendable-output functions and MACs.
//!
//! - [`sha256`], [`sha512`]: the SHA-2 family (FIPS 180-4), used by EdDSA
//!   and by RFC 6979 nonce derivation.
//! - [`sha1`], [`md5`], [`ripemd160`]: legacy Merkle–Damgård digests kept
//!   for interoperability (`hash160` addresses, old PBKDF2 deployments).
//!   SHA-1 and MD5 are not collision resistant.
//! - [`hmac`]: HMAC over any [`HashFunction`].
//! - [`pbkdf2`]: PBKDF2 (RFC 8018) over any HMAC.
//! - [`keccak`]: the Keccak-p\[1600\] permutation and everything built on
//!   it (SHA-3, SHAKE, cSHAKE, KMAC, TupleHash, KangarooTwelve,
//!   TurboSHAKE).
//! - [`blake2`]: BLAKE2b and BLAKE2s with key, salt and personalization.
//! - [`ghash`]: the GCM universal hash over GF(2¹²⁸).
//! - [`siphash`]: SipHash-2-4 with 64- and 128-bit output.
//!
//! Incremental hashers are plain values: `update` borrows them mutably and
//! every `finalize*` method consumes them, so a finalized state cannot be
//! fed again.
//! Every [`HashFunction`] is also [`Zeroize`], so keyed wrappers such as
//! [`Hmac`] can wipe their key-dependent states.

pub mod blake2;
pub mod ghash;
pub mod hmac;
pub mod keccak;
pub mod md5;
pub mod pbkdf2;
pub mod ripemd160;
pub mod sha1;
pub mod sha256;
pub mod sha512;
pub mod siphash;

pub use blake2::{Blake2Params, Blake2b, Blake2s, blake2b, blake2s};
pub use ghash::{ghash, ghash_clmul, ghash_portable};
pub use hmac::{Hmac, hmac_sha256, hmac_sha384, hmac_sha512};
pub use keccak::*;
pub use md5::{Md5, md5};
pub use pbkdf2::{pbkdf2, pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512};
pub use ripemd160::{Ripemd160, hash160, ripemd160};
pub use sha1::{Sha1, sha1};
pub use sha256::{Sha224, Sha256, sha224, sha256};
pub use sha512::{Sha384, Sha512, sha384, sha512};
pub use siphash::{siphash_64, siphash_128};

use zeroize::Zeroize;

/// A fixed-output hash function with an incremental interface.
///
/// [`Zeroize`] resets the state to all zeros. The result is not a fresh
/// hasher; it only exists to be dropped.
pub trait HashFunction: Clone + Zeroize {
    /// Internal block length in bytes (the HMAC pad length).
    const BLOCK_SIZE: usize;

    /// Digest length in bytes.
    const OUTPUT_SIZE: usize;

    /// Fresh state.
    fn new() -> Self;

    /// Absorbs more input.
    fn update(&mut self, data: &[u8]);

    /// Writes the digest into `out`, which must be `OUTPUT_SIZE` bytes long.
    fn finalize_into(self, out: &mut [u8]);

    /// Returns the digest.
    fn finalize(self) -> Vec<u8> {
        let mut out = vec![0u8; Self::OUTPUT_SIZE];
        self.finalize_into(&mut out);
        out
    }

    /// One-shot digest.
    fn digest(data: &[u8]) -> Vec<u8> {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }
}

/// Block buffer of a Merkle–Damgård hash.
#[derive(Clone)]
pub(crate) struct BlockBuffer<const B: usize> {
    bytes: [u8; B],
    filled: usize,
}

impl<const B: usize> BlockBuffer<B> {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0u8; B],
            filled: 0,
        }
    }

    /// Buffers `data`, handing every completed block to `compress`.
    pub(crate) fn absorb(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8])) {
        if self.filled > 0 {
            let take = (B - self.filled).min(data.len());
            self.bytes[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < B {
                return;
            }
            compress(&self.bytes);
            self.filled = 0;
        }

        let mut blocks = data.chunks_exact(B);
        for block in &mut blocks {
            compress(block);
        }

        let rest = blocks.remainder();
        self.bytes[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Merkle–Damgård padding: `0x80`, zeros, then the encoded bit length
    /// `length` in the last bytes of the final block. SHA-1 and SHA-2 pass
    /// it big-endian, MD5 and RIPEMD-160 little-endian.
    pub(crate) fn pad(&mut self, length: &[u8], mut compress: impl FnMut(&[u8])) {
        self.bytes[self.filled] = 0x80;
        self.bytes[self.filled + 1..].fill(0);

        if self.filled + 1 > B - length.len() {
            compress(&self.bytes);
            self.bytes.fill(0);
        }

        self.bytes[B - length.len()..].copy_from_slice(length);
        compress(&self.bytes);
        self.filled = 0;
    }
}

impl<const B: usize> Zeroize for BlockBuffer<B> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.filled = 0;
    }
}
