//! Constant-time utilities.
//!
//! Secret-dependent decisions in this crate are expressed as a `u8`
//! condition that is either `0` or `1`, expanded into an all-zeros or
//! all-ones mask and applied with bitwise operations. Nothing here branches
//! on the condition.
//!
//! The traits mirror each other:
//! - [`ConstantTimeEq`] produces conditions,
//! - [`ConditionallySelectable`] consumes them.

use core::hint::black_box;

/// Expands a `0`/`1` condition into a 64-bit mask.
#[inline(always)]
pub(crate) fn mask64(condition: u8) -> u64 {
    0u64.wrapping_sub(black_box(condition & 1) as u64)
}

/// Expands a `0`/`1` condition into a 32-bit mask.
#[inline(always)]
pub(crate) fn mask32(condition: u8) -> u32 {
    0u32.wrapping_sub(black_box(condition & 1) as u32)
}

/// Returns `1` when `x == 0`, `0` otherwise.
#[inline(always)]
pub(crate) fn is_zero_u64(x: u64) -> u8 {
    // (x | -x) has its top bit set iff x != 0
    (((x | x.wrapping_neg()) >> 63) ^ 1) as u8
}

/// Constant-time equality.
///
/// Implementations must not exit early or branch on the compared data.
/// The result is `1` for equal values and `0` otherwise, so that it can be
/// fed straight into [`ConditionallySelectable`].
pub trait ConstantTimeEq {
    /// Returns `1` if `self == other`, `0` otherwise.
    fn ct_eq(&self, other: &Self) -> u8;
}

/// Branch-free selection between two values.
pub trait ConditionallySelectable: Copy {
    /// Returns `a` when `condition == 0` and `b` when `condition == 1`.
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self;

    /// Replaces `self` with `other` when `condition == 1`.
    #[inline]
    fn conditional_assign(&mut self, other: &Self, condition: u8) {
        *self = Self::conditional_select(self, other, condition);
    }

    /// Swaps `a` and `b` when `condition == 1`.
    #[inline]
    fn conditional_swap(a: &mut Self, b: &mut Self, condition: u8) {
        let t = *a;
        a.conditional_assign(b, condition);
        b.conditional_assign(&t, condition);
    }
}

impl ConstantTimeEq for [u8] {
    /// All bytes are XORed and accumulated before the final comparison, so
    /// the running time does not depend on where the first difference is.
    /// Slices of different lengths compare unequal; length is public.
    fn ct_eq(&self, other: &Self) -> u8 {
        if self.len() != other.len() {
            return 0;
        }

        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, v| acc | v);

        is_zero_u64(diff as u64)
    }
}

impl ConstantTimeEq for u8 {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> u8 {
        is_zero_u64((self ^ other) as u64)
    }
}

impl ConditionallySelectable for u64 {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self {
        let mask = mask64(condition);
        a ^ ((a ^ b) & mask)
    }
}

impl ConditionallySelectable for u32 {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self {
        let mask = mask32(condition);
        a ^ ((a ^ b) & mask)
    }
}
