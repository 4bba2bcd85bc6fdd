//! Byte-level conversions for `Uint<N>`.
//!
//! Fields and curves encode their elements in either byte order and at
//! byte widths that are not always a multiple of the limb size (P-521 uses
//! 66 bytes, Ed448 57). These helpers therefore work on slices: reading
//! accepts any length up to `8 · N`, writing fills exactly the slice given.

use super::Uint;

impl<const N: usize> Uint<N> {
    /// Reads a big-endian byte string.
    ///
    /// Returns `None` when `bytes` is longer than `8 · N`.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > 8 * N {
            return None;
        }

        let mut limbs = [0u64; N];
        for (i, &b) in bytes.iter().rev().enumerate() {
            limbs[i / 8] |= (b as u64) << ((i % 8) * 8);
        }

        Some(Self { limbs })
    }

    /// Reads a little-endian byte string.
    ///
    /// Returns `None` when `bytes` is longer than `8 · N`.
    pub fn from_le_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > 8 * N {
            return None;
        }

        let mut limbs = [0u64; N];
        for (i, &b) in bytes.iter().enumerate() {
            limbs[i / 8] |= (b as u64) << ((i % 8) * 8);
        }

        Some(Self { limbs })
    }

    /// Writes the low `out.len()` bytes of the value, big-endian.
    ///
    /// Bytes beyond the value's width are written as zero.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        for (i, o) in out.iter_mut().rev().enumerate() {
            *o = self.byte(i);
        }
    }

    /// Writes the low `out.len()` bytes of the value, little-endian.
    pub fn write_le_bytes(&self, out: &mut [u8]) {
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.byte(i);
        }
    }

    /// Returns byte `i` in little-endian order, or zero past the top.
    #[inline(always)]
    fn byte(&self, i: usize) -> u8 {
        if i < 8 * N {
            (self.limbs[i / 8] >> ((i % 8) * 8)) as u8
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_and_le_agree() {
        let be = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
        let mut le = be;
        le.reverse();

        let a = Uint::<2>::from_be_slice(&be).unwrap();
        let b = Uint::<2>::from_le_slice(&le).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.limbs, [0x0203040506070809, 0x01]);

        let mut out = [0u8; 9];
        a.write_be_bytes(&mut out);
        assert_eq!(out, be);
    }

    #[test]
    fn oversized_input_is_rejected() {
        assert!(Uint::<1>::from_be_slice(&[0u8; 9]).is_none());
        assert!(Uint::<1>::from_le_slice(&[0u8; 8]).is_some());
    }

    #[test]
    fn hex_constants() {
        let x = Uint::<2>::from_be_hex("0102030405060708090a0b0c0d0e0f10");
        assert_eq!(x.limbs, [0x090a0b0c0d0e0f10, 0x0102030405060708]);
        assert_eq!(x.bits_vartime(), 121);
        assert_eq!(x.shr(64).limbs, [0x0102030405060708, 0]);
        assert_eq!(x.shr(4).limbs[1], 0x0010203040506070);
    }
}
