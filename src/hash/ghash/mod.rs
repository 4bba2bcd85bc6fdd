//! GHASH, the universal hash of GCM (SP 800-38D).
//!
//! Blocks are elements of GF(2¹²⁸) modulo `x¹²⁸ + x⁷ + x² + x + 1` in the
//! GCM bit order: the first bit of a block is the coefficient of `x⁰`.
//! Read as a big-endian `u128`, coefficient `xⁱ` is bit `127 − i`.
//!
//! Two multipliers are provided and must agree bit for bit:
//! - [`portable`](ghash_portable): the shift-and-add loop of SP 800-38D
//!   Algorithm 1, working directly in GCM bit order;
//! - [`clmul`](ghash_clmul): bit-reverse into polynomial order, carry-less
//!   multiply (the CPU's `pclmulqdq` when available, a masked software
//!   routine otherwise), reduce, reverse back.

mod clmul;
mod portable;

use crate::error::{Error, Result};

/// GHASH key and block length.
pub const BLOCK_LEN: usize = 16;

/// GHASH over `a || pad || c || pad || len(a) || len(c)` with the
/// multiplier `mul`.
fn run(h: &[u8], a: &[u8], c: &[u8], mul: fn(u128, u128) -> u128) -> Result<[u8; BLOCK_LEN]> {
    let h: [u8; BLOCK_LEN] = h
        .try_into()
        .map_err(|_| Error::length("16-byte GHASH key", h.len()))?;
    let h = u128::from_be_bytes(h);

    let mut y = 0u128;
    for data in [a, c] {
        for chunk in data.chunks(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block[..chunk.len()].copy_from_slice(chunk);
            y = mul(y ^ u128::from_be_bytes(block), h);
        }
    }

    let lengths = (((a.len() as u128) * 8) << 64) | ((c.len() as u128) * 8);
    y = mul(y ^ lengths, h);

    Ok(y.to_be_bytes())
}

/// GHASH with the portable bit-serial multiplier.
///
/// # Errors
/// [`Error::InvalidLength`] when `h` is not 16 bytes.
pub fn ghash_portable(h: &[u8], a: &[u8], c: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    run(h, a, c, portable::gf_mul)
}

/// GHASH with the carry-less multiply path.
pub fn ghash_clmul(h: &[u8], a: &[u8], c: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    run(h, a, c, clmul::gf_mul)
}

/// GHASH using the fastest available multiplier.
pub fn ghash(h: &[u8], a: &[u8], c: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    ghash_clmul(h, a, c)
}
