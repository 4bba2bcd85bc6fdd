//! Arithmetic modulo `2²⁵⁵ − 19` on 32-byte little-endian encodings.
//!
//! Inputs may be non-canonical (any 256-bit value, bit 255 included);
//! outputs are always the canonical representative.

use crate::error::{Error, Result};
use crate::field::{Fe25519, Field};

/// Element encoding length.
pub const BYTES: usize = 32;

fn decode(bytes: &[u8]) -> Result<Fe25519> {
    if bytes.len() != BYTES {
        return Err(Error::length("32-byte field element", bytes.len()));
    }
    Ok(Fe25519::from_le_bytes_reduced(bytes))
}

/// `x mod p`.
pub fn reduce(x: &[u8]) -> Result<[u8; BYTES]> {
    Ok(decode(x)?.to_bytes())
}

/// `a · b mod p`.
pub fn mul(a: &[u8], b: &[u8]) -> Result<[u8; BYTES]> {
    Ok((decode(a)? * decode(b)?).to_bytes())
}

/// `a² mod p`.
pub fn square(a: &[u8]) -> Result<[u8; BYTES]> {
    Ok(decode(a)?.square().to_bytes())
}

/// `a⁻¹ mod p`.
///
/// # Arguments
///
/// * `a` - A 32-byte little-endian integer, reduced modulo `p` first
///
/// # Returns
///
/// The canonical encoding of the inverse.
///
/// # Errors
///
/// - [`Error::InvalidLength`] when `a` is not 32 bytes.
/// - [`Error::InvalidOperand`] when `a ≡ 0`, including non-canonical
///   encodings of zero such as `p` itself.
///
/// # Security
///
/// - The inverse is computed as `a^(p − 2)` with a fixed addition chain,
///   so its timing does not depend on `a`.
/// - Only the zero check branches, and zero is not secret.
pub fn invert(a: &[u8]) -> Result<[u8; BYTES]> {
    Ok(decode(a)?.invert()?.to_bytes())
}
