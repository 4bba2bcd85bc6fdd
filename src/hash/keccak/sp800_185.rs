//! SP 800-185 encodings and the KMAC / TupleHash constructions built on
//! cSHAKE.

use super::check_output_len;
use super::sha3::CShake;

use crate::error::Result;

/// `left_encode(x)`: the minimal big-endian bytes of `x` preceded by their
/// count (at least one byte, so `left_encode(0) = 01 00`).
pub(crate) fn left_encode(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = (x.leading_zeros() as usize / 8).min(7);

    let mut out = Vec::with_capacity(9);
    out.push((8 - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
    out
}

/// `right_encode(x)`: like [`left_encode`] with the count at the end.
pub(crate) fn right_encode(x: u64) -> Vec<u8> {
    let mut out = left_encode(x);
    out.rotate_left(1);
    out
}

/// `encode_string(S) = left_encode(len(S) in bits) || S`.
pub(crate) fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode(8 * s.len() as u64);
    out.extend_from_slice(s);
    out
}

/// `bitlength` of an output request, as fed to `right_encode`.
fn bit_len(output_length: usize) -> u64 {
    8 * output_length as u64
}

fn kmac<const SECURITY: usize>(
    key: &[u8],
    data: &[u8],
    output_length: usize,
    custom: &[u8],
    xof: bool,
) -> Result<Vec<u8>> {
    check_output_len(output_length)?;

    let mut h = CShake::<SECURITY>::new(b"KMAC", custom);
    let rate = super::Shake::<SECURITY>::RATE;

    // bytepad(encode_string(K), rate)
    h.update(&left_encode(rate as u64));
    h.update(&encode_string(key));
    h.fill_block();

    h.update(data);
    h.update(&right_encode(if xof { 0 } else { bit_len(output_length) }));

    Ok(h.finalize_xof().read_vec(output_length))
}

fn tuple_hash<const SECURITY: usize>(
    parts: &[&[u8]],
    output_length: usize,
    custom: &[u8],
    xof: bool,
) -> Result<Vec<u8>> {
    check_output_len(output_length)?;

    let mut h = CShake::<SECURITY>::new(b"TupleHash", custom);
    for part in parts {
        h.update(&encode_string(part));
    }
    h.update(&right_encode(if xof { 0 } else { bit_len(output_length) }));

    Ok(h.finalize_xof().read_vec(output_length))
}

/// KMAC128 with `output_length` bytes of tag.
///
/// # Errors
/// [`Error::InvalidParameter`](crate::Error::InvalidParameter) when
/// `output_length` is zero.
pub fn kmac_128(key: &[u8], data: &[u8], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    kmac::<128>(key, data, output_length, custom, false)
}

/// KMAC256 with `output_length` bytes of tag.
pub fn kmac_256(key: &[u8], data: &[u8], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    kmac::<256>(key, data, output_length, custom, false)
}

/// KMACXOF128: the output does not depend on `output_length`, so shorter
/// requests are prefixes of longer ones.
pub fn kmac_xof_128(key: &[u8], data: &[u8], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    kmac::<128>(key, data, output_length, custom, true)
}

/// KMACXOF256.
pub fn kmac_xof_256(key: &[u8], data: &[u8], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    kmac::<256>(key, data, output_length, custom, true)
}

/// TupleHash128 over an ordered sequence of byte strings.
///
/// Each part is length-prefixed, so `["ab", "c"]` and `["a", "bc"]` hash
/// differently.
pub fn tuple_hash_128(parts: &[&[u8]], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    tuple_hash::<128>(parts, output_length, custom, false)
}

/// TupleHash256.
pub fn tuple_hash_256(parts: &[&[u8]], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    tuple_hash::<256>(parts, output_length, custom, false)
}

/// TupleHashXOF128.
pub fn tuple_hash_xof_128(parts: &[&[u8]], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    tuple_hash::<128>(parts, output_length, custom, true)
}

/// TupleHashXOF256.
pub fn tuple_hash_xof_256(parts: &[&[u8]], output_length: usize, custom: &[u8]) -> Result<Vec<u8>> {
    tuple_hash::<256>(parts, output_length, custom, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_encodings() {
        assert_eq!(left_encode(0), [0x01, 0x00]);
        assert_eq!(left_encode(168), [0x01, 0xa8]);
        assert_eq!(left_encode(256), [0x02, 0x01, 0x00]);
        assert_eq!(right_encode(0), [0x00, 0x01]);
        assert_eq!(right_encode(256), [0x01, 0x00, 0x02]);
        assert_eq!(left_encode(u64::MAX)[0], 8);
    }

    #[test]
    fn string_encoding() {
        assert_eq!(encode_string(b""), [0x01, 0x00]);
        assert_eq!(encode_string(b"KMAC"), [0x01, 0x20, b'K', b'M', b'A', b'C']);
    }
}
