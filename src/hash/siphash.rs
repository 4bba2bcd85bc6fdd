//! SipHash-2-4 with 64- and 128-bit output.

use crate::error::{Error, Result};

/// SipHash key length.
pub const KEY_LEN: usize = 16;

#[derive(Clone, Copy)]
struct State {
    v: [u64; 4],
}

impl State {
    fn new(key: &[u8], wide: bool) -> Result<Self> {
        let key: &[u8; KEY_LEN] = key
            .try_into()
            .map_err(|_| Error::length("16-byte SipHash key", key.len()))?;

        let mut half = [0u8; 8];
        half.copy_from_slice(&key[..8]);
        let k0 = u64::from_le_bytes(half);
        half.copy_from_slice(&key[8..]);
        let k1 = u64::from_le_bytes(half);

        let mut v = [
            k0 ^ 0x736f6d6570736575,
            k1 ^ 0x646f72616e646f6d,
            k0 ^ 0x6c7967656e657261,
            k1 ^ 0x7465646279746573,
        ];
        if wide {
            v[1] ^= 0xee;
        }

        Ok(Self { v })
    }

    #[inline(always)]
    fn round(&mut self) {
        let v = &mut self.v;
        v[0] = v[0].wrapping_add(v[1]);
        v[1] = v[1].rotate_left(13) ^ v[0];
        v[0] = v[0].rotate_left(32);
        v[2] = v[2].wrapping_add(v[3]);
        v[3] = v[3].rotate_left(16) ^ v[2];
        v[0] = v[0].wrapping_add(v[3]);
        v[3] = v[3].rotate_left(21) ^ v[0];
        v[2] = v[2].wrapping_add(v[1]);
        v[1] = v[1].rotate_left(17) ^ v[2];
        v[2] = v[2].rotate_left(32);
    }

    fn compress(&mut self, m: u64) {
        self.v[3] ^= m;
        self.round();
        self.round();
        self.v[0] ^= m;
    }

    fn absorb(&mut self, data: &[u8]) {
        let mut words = data.chunks_exact(8);
        for word in &mut words {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(word);
            self.compress(u64::from_le_bytes(bytes));
        }

        // final word: trailing bytes, length mod 256 in the top byte
        let rest = words.remainder();
        let mut last = [0u8; 8];
        last[..rest.len()].copy_from_slice(rest);
        last[7] = data.len() as u8;
        self.compress(u64::from_le_bytes(last));
    }

    /// Finalization: `tag` is xored into lane `lane`, then four rounds.
    fn finish(&mut self, lane: usize, tag: u64) -> u64 {
        self.v[lane] ^= tag;
        for _ in 0..4 {
            self.round();
        }
        self.v.iter().fold(0, |acc, v| acc ^ v)
    }
}

/// SipHash-2-4 with a 64-bit tag, little-endian.
///
/// # Errors
/// [`Error::InvalidLength`] when `key` is not 16 bytes.
pub fn siphash_64(key: &[u8], data: &[u8]) -> Result<[u8; 8]> {
    let mut state = State::new(key, false)?;
    state.absorb(data);
    Ok(state.finish(2, 0xff).to_le_bytes())
}

/// SipHash-2-4 with a 128-bit tag, little-endian.
pub fn siphash_128(key: &[u8], data: &[u8]) -> Result<[u8; 16]> {
    let mut state = State::new(key, true)?;
    state.absorb(data);

    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&state.finish(2, 0xee).to_le_bytes());
    out[8..].copy_from_slice(&state.finish(1, 0xdd).to_le_bytes());
    Ok(out)
}
