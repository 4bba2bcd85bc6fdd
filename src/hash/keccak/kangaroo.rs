//! TurboSHAKE and KangarooTwelve (RFC 9861).
//!
//! Both run Keccak-p\[1600\] reduced to 12 rounds. TurboSHAKE is a SHAKE
//! with a caller-chosen domain byte; KangarooTwelve splits its input into
//! 8 KiB chunks, hashes every chunk after the first to a 32-byte chaining
//! value and absorbs those into a final node.

use super::check_output_len;
use super::sponge::{Sponge, XofReader};

use crate::error::{Error, Result};

const ROUNDS: usize = 12;
const RATE_128: usize = 168;
const RATE_256: usize = 136;

const CHUNK: usize = 8192;
const CV_LEN: usize = 32;

const DOMAIN_SINGLE: u8 = 0x07;
const DOMAIN_LEAF: u8 = 0x0B;
const DOMAIN_FINAL: u8 = 0x06;

/// Default TurboSHAKE domain byte.
pub const TURBO_SHAKE_DEFAULT_DOMAIN: u8 = 0x1F;

fn turbo_shake(rate: usize, domain: u8, parts: &[&[u8]]) -> XofReader {
    let mut sponge = Sponge::new(rate, ROUNDS);
    for part in parts {
        sponge.absorb(part);
    }
    sponge.finalize(domain)
}

fn check_domain(domain: u8) -> Result<()> {
    if !(0x01..=0x7f).contains(&domain) {
        return Err(Error::InvalidParameter("TurboSHAKE domain byte must be in 0x01..=0x7F"));
    }
    Ok(())
}

/// TurboSHAKE128 with domain separation byte `domain`
/// ([`TURBO_SHAKE_DEFAULT_DOMAIN`] when unspecified).
///
/// # Errors
/// [`Error::InvalidParameter`] for a zero `output_length` or a domain byte
/// outside `0x01..=0x7F`.
pub fn turbo_shake_128(data: &[u8], output_length: usize, domain: u8) -> Result<Vec<u8>> {
    check_output_len(output_length)?;
    check_domain(domain)?;
    Ok(turbo_shake(RATE_128, domain, &[data]).read_vec(output_length))
}

/// TurboSHAKE256.
pub fn turbo_shake_256(data: &[u8], output_length: usize, domain: u8) -> Result<Vec<u8>> {
    check_output_len(output_length)?;
    check_domain(domain)?;
    Ok(turbo_shake(RATE_256, domain, &[data]).read_vec(output_length))
}

/// `length_encode(x)`: minimal big-endian bytes of `x` followed by their
/// count; zero encodes as the single byte `00`.
fn length_encode(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = x.leading_zeros() as usize / 8;

    let mut out = bytes[skip..].to_vec();
    out.push((8 - skip) as u8);
    out
}

/// Absorbs `len` bytes starting at `start` of the concatenation of `parts`.
fn absorb_range(sponge: &mut Sponge, parts: &[&[u8]], mut start: usize, mut len: usize) {
    for part in parts {
        if len == 0 {
            break;
        }
        if start >= part.len() {
            start -= part.len();
            continue;
        }

        let take = (part.len() - start).min(len);
        sponge.absorb(&part[start..start + take]);
        start = 0;
        len -= take;
    }
}

/// KangarooTwelve (KT128) with customization string `custom`.
///
/// The input is read in place: chunks are cut from the virtual string
/// `data || custom || length_encode(custom.len())` without building it.
///
/// # Arguments
///
/// * `data` - The message
/// * `output_length` - Number of output bytes to squeeze
/// * `custom` - Customization string, may be empty
///
/// # Returns
///
/// `output_length` bytes of KT128 output. Longer outputs extend shorter
/// ones for the same `data` and `custom`.
///
/// # Errors
///
/// [`Error::InvalidParameter`] when `output_length` is zero.
pub fn kangaroo_twelve(data: &[u8], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    check_output_len(output_length)?;

    let encoded = length_encode(custom.len() as u64);
    let parts = [data, custom, encoded.as_slice()];
    let total = data.len() + custom.len() + encoded.len();

    if total <= CHUNK {
        return Ok(turbo_shake(RATE_128, DOMAIN_SINGLE, &parts).read_vec(output_length));
    }

    let mut node = Sponge::new(RATE_128, ROUNDS);
    absorb_range(&mut node, &parts, 0, CHUNK);
    node.absorb(&[0x03, 0, 0, 0, 0, 0, 0, 0]);

    let mut leaves = 0u64;
    for start in (CHUNK..total).step_by(CHUNK) {
        let mut leaf = Sponge::new(RATE_128, ROUNDS);
        absorb_range(&mut leaf, &parts, start, CHUNK.min(total - start));

        let mut cv = [0u8; CV_LEN];
        leaf.finalize(DOMAIN_LEAF).read(&mut cv);
        node.absorb(&cv);
        leaves += 1;
    }

    node.absorb(&length_encode(leaves));
    node.absorb(&[0xff, 0xff]);

    Ok(node.finalize(DOMAIN_FINAL).read_vec(output_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_encoding() {
        assert_eq!(length_encode(0), [0x00]);
        assert_eq!(length_encode(12), [0x0c, 0x01]);
        assert_eq!(length_encode(65538), [0x01, 0x00, 0x02, 0x03]);
    }

    #[test]
    fn range_absorption_crosses_parts() {
        let parts: [&[u8]; 4] = [b"abc", b"", b"defg", b"h"];

        for start in 0..8 {
            for len in 0..=(8 - start) {
                let mut split = Sponge::new(RATE_128, ROUNDS);
                absorb_range(&mut split, &parts, start, len);

                let mut whole = Sponge::new(RATE_128, ROUNDS);
                whole.absorb(&b"abcdefgh"[start..start + len]);

                assert_eq!(
                    split.finalize(DOMAIN_SINGLE).read_vec(16),
                    whole.finalize(DOMAIN_SINGLE).read_vec(16),
                    "start {start}, len {len}"
                );
            }
        }
    }
}
