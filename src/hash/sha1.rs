//! SHA-1 (FIPS 180-4).
//!
//! Practical collisions exist; this is here for PBKDF2-HMAC-SHA1 and other
//! legacy formats, never for new signatures.

use super::{BlockBuffer, HashFunction};

use zeroize::Zeroize;

const H1_INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

fn compress(block: &[u8], state: &mut [u32; 5]) {
    let mut w = [0u32; 80];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, &wt) in w.iter().enumerate() {
        let f = match t / 20 {
            0 => (b & c) | (!b & d),
            2 => (b & c) | (b & d) | (c & d),
            _ => b ^ c ^ d,
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(wt);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (h, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *h = h.wrapping_add(v);
    }
}

/// Incremental SHA-1.
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: BlockBuffer<64>,
    length: u64,
}

impl HashFunction for Sha1 {
    const BLOCK_SIZE: usize = 64;
    const OUTPUT_SIZE: usize = 20;

    fn new() -> Self {
        Self {
            state: H1_INIT,
            buffer: BlockBuffer::new(),
            length: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);
        let state = &mut self.state;
        self.buffer.absorb(data, |block| compress(block, state));
    }

    fn finalize_into(mut self, out: &mut [u8]) {
        let bit_len = self.length.wrapping_shl(3);
        let state = &mut self.state;
        self.buffer.pad(&bit_len.to_be_bytes(), |block| compress(block, state));

        for (chunk, word) in out[..Self::OUTPUT_SIZE].chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
    }
}

impl Zeroize for Sha1 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.length = 0;
    }
}

/// One-shot SHA-1.
pub fn sha1(input: &[u8]) -> [u8; 20] {
    let mut h = Sha1::new();
    h.update(input);

    let mut out = [0u8; 20];
    h.finalize_into(&mut out);
    out
}
