//! Byte-oriented sponge over Keccak-p\[1600\].

use super::permutation::keccak_p;

use zeroize::Zeroize;

/// Sponge state: 25 lanes, a rate in bytes, a round count and the current
/// position inside the rate.
#[derive(Clone)]
pub(crate) struct Sponge {
    state: [u64; 25],
    rate: usize,
    rounds: usize,
    pos: usize,
}

impl Zeroize for Sponge {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.pos = 0;
    }
}

impl Sponge {
    pub(crate) const fn new(rate: usize, rounds: usize) -> Self {
        Self {
            state: [0u64; 25],
            rate,
            rounds,
            pos: 0,
        }
    }

    pub(crate) const fn rate(&self) -> usize {
        self.rate
    }

    #[inline(always)]
    fn xor_byte(&mut self, i: usize, b: u8) {
        self.state[i / 8] ^= u64::from(b) << (8 * (i % 8));
    }

    #[inline(always)]
    fn byte(&self, i: usize) -> u8 {
        (self.state[i / 8] >> (8 * (i % 8))) as u8
    }

    fn permute(&mut self) {
        keccak_p(&mut self.state, self.rounds);
        self.pos = 0;
    }

    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            if self.pos % 8 == 0 && data.len() >= 8 {
                // whole lanes
                let lanes = ((self.rate - self.pos) / 8).min(data.len() / 8);
                for (i, chunk) in data[..8 * lanes].chunks_exact(8).enumerate() {
                    let mut lane = [0u8; 8];
                    lane.copy_from_slice(chunk);
                    self.state[self.pos / 8 + i] ^= u64::from_le_bytes(lane);
                }
                self.pos += 8 * lanes;
                data = &data[8 * lanes..];
            } else {
                self.xor_byte(self.pos, data[0]);
                self.pos += 1;
                data = &data[1..];
            }

            if self.pos == self.rate {
                self.permute();
            }
        }
    }

    /// Zero-pads the current block to the rate boundary (used by
    /// `bytepad`-style encodings that must end on a block).
    pub(crate) fn fill_block(&mut self) {
        if self.pos != 0 {
            self.permute();
        }
    }

    /// Appends the domain-separation byte and the final `pad10*1` bit, and
    /// switches to squeezing.
    pub(crate) fn finalize(mut self, domain: u8) -> XofReader {
        let (pos, last) = (self.pos, self.rate - 1);
        self.xor_byte(pos, domain);
        self.xor_byte(last, 0x80);
        self.permute();
        XofReader { sponge: self }
    }
}

/// Squeezing side of a finalized sponge.
///
/// Successive [`read`](Self::read) calls continue the same output stream,
/// so reading `a` then `b` bytes yields the same bytes as reading `a + b`.
#[derive(Clone)]
pub struct XofReader {
    sponge: Sponge,
}

impl XofReader {
    /// Fills `out` with the next output bytes.
    pub fn read(&mut self, out: &mut [u8]) {
        for b in out {
            if self.sponge.pos == self.sponge.rate {
                self.sponge.permute();
            }
            *b = self.sponge.byte(self.sponge.pos);
            self.sponge.pos += 1;
        }
    }

    /// Reads `len` bytes into a new vector.
    pub fn read_vec(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.read(&mut out);
        out
    }
}
