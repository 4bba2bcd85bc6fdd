//! Fixed-width unsigned integer primitive.
//!
//! The value is stored as `N` 64-bit limbs in **little-endian** limb order
//! (`limbs[0]` is least significant). All arithmetic is wrapping and
//! reports carries/borrows explicitly, leaving reduction policy to the
//! caller.
//!
//! Every operation here runs in time that depends only on `N`, never on the
//! limb values, except the `*_vartime` helpers which are documented as such
//! and only ever applied to public data.

use crate::ct::{ConditionallySelectable, ConstantTimeEq, is_zero_u64};

use std::fmt::{Debug, Formatter, Result};

/// Computes `a + b + carry`, returning the sum and the outgoing carry.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Computes `a - b - borrow`, returning the difference and the outgoing
/// borrow (`0` or `1`).
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, ((t >> 64) as u64) & 1)
}

/// Computes `a + b * c + carry`, returning the low and high words.
///
/// The result always fits in 128 bits:
/// `(2⁶⁴−1) + (2⁶⁴−1)² + (2⁶⁴−1) = 2¹²⁸ − 1`.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Fixed-size unsigned integer of `64 · N` bits.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Uint<const N: usize> {
    pub(crate) limbs: [u64; N],
}

impl<const N: usize> Uint<N> {
    /// The value zero.
    pub const ZERO: Self = Self { limbs: [0u64; N] };

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// Total width in bits.
    pub const BITS: usize = 64 * N;

    /// Creates a value from its raw little-endian limbs.
    pub const fn from_limbs(limbs: [u64; N]) -> Self {
        Self { limbs }
    }

    /// Returns the raw little-endian limbs.
    pub const fn limbs(&self) -> &[u64; N] {
        &self.limbs
    }

    /// Embeds a `u64` in the least significant limb.
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = value;
        Self { limbs }
    }

    /// Parses a big-endian hexadecimal literal.
    ///
    /// Intended for compile-time curve constants: malformed input or a
    /// value wider than `64 · N` bits aborts constant evaluation.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        let len = bytes.len();
        let mut limbs = [0u64; N];

        let mut i = 0;
        while i < len {
            let c = bytes[len - 1 - i];
            let digit = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("invalid hex digit"),
            };

            let limb = i / 16;
            if limb >= N {
                if digit != 0 {
                    panic!("hex literal does not fit");
                }
            } else {
                limbs[limb] |= (digit as u64) << ((i % 16) * 4);
            }

            i += 1;
        }

        Self { limbs }
    }

    /// Computes `self + rhs`, returning the wrapped sum and the carry bit.
    pub const fn adc(&self, rhs: &Self) -> (Self, u64) {
        let mut limbs = [0u64; N];
        let mut carry = 0;

        let mut i = 0;
        while i < N {
            let (s, c) = adc(self.limbs[i], rhs.limbs[i], carry);
            limbs[i] = s;
            carry = c;
            i += 1;
        }

        (Self { limbs }, carry)
    }

    /// Computes `self - rhs`, returning the wrapped difference and the
    /// borrow bit.
    pub const fn sbb(&self, rhs: &Self) -> (Self, u64) {
        let mut limbs = [0u64; N];
        let mut borrow = 0;

        let mut i = 0;
        while i < N {
            let (d, b) = sbb(self.limbs[i], rhs.limbs[i], borrow);
            limbs[i] = d;
            borrow = b;
            i += 1;
        }

        (Self { limbs }, borrow)
    }

    /// Wrapping addition.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.adc(rhs).0
    }

    /// Wrapping subtraction.
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.sbb(rhs).0
    }

    /// Shifts left by one bit, returning the shifted value and the bit that
    /// fell off the top.
    pub const fn shl1(&self) -> (Self, u64) {
        let mut limbs = [0u64; N];
        let mut carry = 0;

        let mut i = 0;
        while i < N {
            limbs[i] = (self.limbs[i] << 1) | carry;
            carry = self.limbs[i] >> 63;
            i += 1;
        }

        (Self { limbs }, carry)
    }

    /// Logical right shift by `shift < 64 · N` bits.
    ///
    /// The shift amount is public.
    pub const fn shr(&self, shift: usize) -> Self {
        let mut limbs = [0u64; N];
        let limb_shift = shift / 64;
        let bit_shift = shift % 64;

        let mut i = 0;
        while i + limb_shift < N {
            let lo = self.limbs[i + limb_shift] >> bit_shift;
            let hi = if bit_shift > 0 && i + limb_shift + 1 < N {
                self.limbs[i + limb_shift + 1] << (64 - bit_shift)
            } else {
                0
            };
            limbs[i] = lo | hi;
            i += 1;
        }

        Self { limbs }
    }

    /// Returns bit `index` (little-endian bit order) as `0` or `1`.
    #[inline(always)]
    pub const fn bit(&self, index: usize) -> u8 {
        ((self.limbs[index / 64] >> (index % 64)) & 1) as u8
    }

    /// Number of significant bits (public values only).
    pub const fn bits_vartime(&self) -> usize {
        let mut i = N;
        while i > 0 {
            i -= 1;
            if self.limbs[i] != 0 {
                return 64 * i + (64 - self.limbs[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Returns `1` when the value is zero.
    pub fn is_zero(&self) -> u8 {
        let acc = self.limbs.iter().fold(0u64, |acc, &l| acc | l);
        is_zero_u64(acc)
    }

    /// Returns `1` when the value is odd.
    #[inline(always)]
    pub const fn is_odd(&self) -> u8 {
        (self.limbs[0] & 1) as u8
    }

    /// Returns `1` when `self < rhs`.
    pub fn ct_lt(&self, rhs: &Self) -> u8 {
        self.sbb(rhs).1 as u8
    }
}

impl<const N: usize> Default for Uint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> ConstantTimeEq for Uint<N> {
    fn ct_eq(&self, other: &Self) -> u8 {
        let diff = self
            .limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(0u64, |acc, (a, b)| acc | (a ^ b));
        is_zero_u64(diff)
    }
}

impl<const N: usize> ConditionallySelectable for Uint<N> {
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self {
        let mut limbs = [0u64; N];
        for (out, (x, y)) in limbs.iter_mut().zip(a.limbs.iter().zip(b.limbs.iter())) {
            *out = u64::conditional_select(x, y, condition);
        }
        Self { limbs }
    }
}

impl<const N: usize> Debug for Uint<N> {
    /// Formats the value as a big-endian hexadecimal string.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("Uint(0x")?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        f.write_str(")")
    }
}
