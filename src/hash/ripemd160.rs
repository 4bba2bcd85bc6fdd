//! RIPEMD-160 and `hash160`.
//!
//! Two parallel lines of five 16-step rounds run over each block, with
//! different word orders, rotations, constants and boolean functions, and
//! are combined into the chaining value at the end of the block.

use super::{BlockBuffer, HashFunction, sha256};

use zeroize::Zeroize;

const INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Message word order, left line.
const R_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

/// Message word order, right line.
const R_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

/// Rotation amounts, left line.
const S_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

/// Rotation amounts, right line.
const S_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

const K_LEFT: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const K_RIGHT: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

/// Boolean function of round `round` (0..5).
#[inline(always)]
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

fn compress(block: &[u8], state: &mut [u32; 5]) {
    let mut x = [0u32; 16];
    for (slot, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut al, mut bl, mut cl, mut dl, mut el] = *state;
    let [mut ar, mut br, mut cr, mut dr, mut er] = *state;

    for j in 0..80 {
        let round = j / 16;

        let t = al
            .wrapping_add(f(round, bl, cl, dl))
            .wrapping_add(x[R_LEFT[j]])
            .wrapping_add(K_LEFT[round])
            .rotate_left(S_LEFT[j])
            .wrapping_add(el);
        al = el;
        el = dl;
        dl = cl.rotate_left(10);
        cl = bl;
        bl = t;

        // The right line walks the boolean functions backwards.
        let t = ar
            .wrapping_add(f(4 - round, br, cr, dr))
            .wrapping_add(x[R_RIGHT[j]])
            .wrapping_add(K_RIGHT[round])
            .rotate_left(S_RIGHT[j])
            .wrapping_add(er);
        ar = er;
        er = dr;
        dr = cr.rotate_left(10);
        cr = br;
        br = t;
    }

    let [h0, h1, h2, h3, h4] = *state;
    *state = [
        h1.wrapping_add(cl).wrapping_add(dr),
        h2.wrapping_add(dl).wrapping_add(er),
        h3.wrapping_add(el).wrapping_add(ar),
        h4.wrapping_add(al).wrapping_add(br),
        h0.wrapping_add(bl).wrapping_add(cr),
    ];
}

/// Incremental RIPEMD-160.
#[derive(Clone)]
pub struct Ripemd160 {
    state: [u32; 5],
    buffer: BlockBuffer<64>,
    length: u64,
}

impl HashFunction for Ripemd160 {
    const BLOCK_SIZE: usize = 64;
    const OUTPUT_SIZE: usize = 20;

    fn new() -> Self {
        Self {
            state: INIT,
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
        self.buffer.pad(&bit_len.to_le_bytes(), |block| compress(block, state));

        for (chunk, word) in out[..Self::OUTPUT_SIZE].chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }
}

impl Zeroize for Ripemd160 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.length = 0;
    }
}

/// One-shot RIPEMD-160.
pub fn ripemd160(input: &[u8]) -> [u8; 20] {
    let mut h = Ripemd160::new();
    h.update(input);

    let mut out = [0u8; 20];
    h.finalize_into(&mut out);
    out
}

/// `RIPEMD-160(SHA-256(input))`, the public-key digest behind Bitcoin-style
/// addresses.
pub fn hash160(input: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(input))
}
