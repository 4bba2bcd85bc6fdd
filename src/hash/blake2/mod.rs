//! BLAKE2b and BLAKE2s (RFC 7693).
//!
//! Both variants share the HAIFA-style compression (`G` mixing over a
//! 4×4 word matrix, message words permuted by `SIGMA`) and differ in word
//! size, round count, rotation distances and block length. The engine is
//! written once as a macro and instantiated in [`blake2b`](mod@blake2b)
//! and [`blake2s`](mod@blake2s).

mod blake2b;
mod blake2s;

pub use blake2b::{Blake2b, blake2b, blake2b_160, blake2b_256, blake2b_384, blake2b_512};
pub use blake2s::{Blake2s, blake2s, blake2s_128, blake2s_160, blake2s_224, blake2s_256};

use crate::error::{Error, Result};

/// Message word schedule for rounds `r mod 10`.
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Configuration of one BLAKE2 computation.
///
/// Salt and personalization shorter than their maximum are zero-padded.
#[derive(Clone, Debug, Default)]
pub struct Blake2Params<'a> {
    /// Digest length in bytes (1..=64 for BLAKE2b, 1..=32 for BLAKE2s).
    pub digest_size: usize,
    /// MAC key (at most 64 / 32 bytes); empty for plain hashing.
    pub key: &'a [u8],
    /// Salt (at most 16 / 8 bytes).
    pub salt: &'a [u8],
    /// Personalization (at most 16 / 8 bytes).
    pub person: &'a [u8],
}

impl<'a> Blake2Params<'a> {
    /// Unkeyed parameters with the given digest size.
    pub fn new(digest_size: usize) -> Self {
        Self {
            digest_size,
            ..Self::default()
        }
    }

    pub fn key(mut self, key: &'a [u8]) -> Self {
        self.key = key;
        self
    }

    pub fn salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = salt;
        self
    }

    pub fn person(mut self, person: &'a [u8]) -> Self {
        self.person = person;
        self
    }

    /// Checks the parameters against one variant's limits: `out_max` is
    /// also the key limit, `salt_max` the salt and personalization limit.
    pub(crate) fn validate(&self, out_max: usize, salt_max: usize) -> Result<()> {
        if self.digest_size < 1 || self.digest_size > out_max {
            return Err(Error::InvalidParameter("BLAKE2 digest size out of range"));
        }

        if self.key.len() > out_max {
            return Err(Error::length("BLAKE2 key within the variant limit", self.key.len()));
        }

        if self.salt.len() > salt_max {
            return Err(Error::length("BLAKE2 salt within the variant limit", self.salt.len()));
        }

        if self.person.len() > salt_max {
            return Err(Error::length(
                "BLAKE2 personalization within the variant limit",
                self.person.len(),
            ));
        }

        Ok(())
    }
}

/// Instantiates one BLAKE2 variant.
macro_rules! blake2_engine {
    (
        $(#[$meta:meta])*
        $name:ident, word = $word:ty, counter = $ctr:ty, rounds = $rounds:literal,
        rotations = ($r1:literal, $r2:literal, $r3:literal, $r4:literal),
        iv = $iv:expr
    ) => {
        const WORD: usize = <$word>::BITS as usize / 8;
        const BLOCK: usize = 16 * WORD;
        const OUT_MAX: usize = 8 * WORD;
        const SALT_MAX: usize = 2 * WORD;
        const IV: [$word; 8] = $iv;

        #[inline(always)]
        fn g(v: &mut [$word; 16], a: usize, b: usize, c: usize, d: usize, x: $word, y: $word) {
            v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
            v[d] = (v[d] ^ v[a]).rotate_right($r1);
            v[c] = v[c].wrapping_add(v[d]);
            v[b] = (v[b] ^ v[c]).rotate_right($r2);
            v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
            v[d] = (v[d] ^ v[a]).rotate_right($r3);
            v[c] = v[c].wrapping_add(v[d]);
            v[b] = (v[b] ^ v[c]).rotate_right($r4);
        }

        fn compress(h: &mut [$word; 8], block: &[u8; BLOCK], t: $ctr, last: bool) {
            let mut m = [0 as $word; 16];
            for (word, chunk) in m.iter_mut().zip(block.chunks_exact(WORD)) {
                let mut bytes = [0u8; WORD];
                bytes.copy_from_slice(chunk);
                *word = <$word>::from_le_bytes(bytes);
            }

            let mut v = [0 as $word; 16];
            v[..8].copy_from_slice(h);
            v[8..].copy_from_slice(&IV);
            v[12] ^= t as $word;
            v[13] ^= (t >> <$word>::BITS) as $word;
            if last {
                v[14] = !v[14];
            }

            for r in 0..$rounds {
                let s = &$crate::hash::blake2::SIGMA[r % 10];
                g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
                g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
                g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
                g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
                g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
                g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
                g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
                g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
            }

            for i in 0..8 {
                h[i] ^= v[i] ^ v[i + 8];
            }
        }

        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            h: [$word; 8],
            t: $ctr,
            buffer: [u8; BLOCK],
            filled: usize,
            digest_size: usize,
        }

        impl $name {
            /// Validates `params` and starts a new computation.
            ///
            /// # Errors
            /// [`Error::InvalidParameter`](crate::Error::InvalidParameter)
            /// for a digest size out of range,
            /// [`Error::InvalidLength`](crate::Error::InvalidLength) for an
            /// oversized key, salt or personalization.
            pub fn new(params: &$crate::hash::blake2::Blake2Params<'_>) -> $crate::error::Result<Self> {
                params.validate(OUT_MAX, SALT_MAX)?;

                // parameter block: digest length, key length, fanout 1, depth 1
                let mut p = [0u8; 8 * WORD];
                p[0] = params.digest_size as u8;
                p[1] = params.key.len() as u8;
                p[2] = 1;
                p[3] = 1;
                p[4 * WORD..4 * WORD + params.salt.len()].copy_from_slice(params.salt);
                p[6 * WORD..6 * WORD + params.person.len()].copy_from_slice(params.person);

                let mut h = IV;
                for (word, chunk) in h.iter_mut().zip(p.chunks_exact(WORD)) {
                    let mut bytes = [0u8; WORD];
                    bytes.copy_from_slice(chunk);
                    *word ^= <$word>::from_le_bytes(bytes);
                }

                let mut state = Self {
                    h,
                    t: 0,
                    buffer: [0u8; BLOCK],
                    filled: 0,
                    digest_size: params.digest_size,
                };

                if !params.key.is_empty() {
                    state.buffer[..params.key.len()].copy_from_slice(params.key);
                    state.filled = BLOCK;
                }

                Ok(state)
            }

            /// Absorbs more input. The last block is held back until
            /// [`finalize`](Self::finalize) so it can be flagged as final.
            pub fn update(&mut self, mut data: &[u8]) {
                while !data.is_empty() {
                    if self.filled == BLOCK {
                        self.t = self.t.wrapping_add(BLOCK as $ctr);
                        compress(&mut self.h, &self.buffer, self.t, false);
                        self.filled = 0;
                    }

                    let take = (BLOCK - self.filled).min(data.len());
                    self.buffer[self.filled..self.filled + take].copy_from_slice(&data[..take]);
                    self.filled += take;
                    data = &data[take..];
                }
            }

            /// Returns the `digest_size`-byte digest.
            pub fn finalize(mut self) -> Vec<u8> {
                self.t = self.t.wrapping_add(self.filled as $ctr);
                self.buffer[self.filled..].fill(0);
                compress(&mut self.h, &self.buffer, self.t, true);

                let mut out = Vec::with_capacity(OUT_MAX);
                for word in self.h {
                    out.extend_from_slice(&word.to_le_bytes());
                }
                out.truncate(self.digest_size);

                zeroize::Zeroize::zeroize(&mut self.buffer);
                out
            }
        }
    };
}

pub(crate) use blake2_engine;
