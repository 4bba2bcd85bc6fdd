//! Arithmetic in `𝔽ₚ`, `p = 2²⁵⁵ − 19`.
//!
//! ## Representation
//!
//! Elements are 10 signed limbs in radix 2²⁵·⁵, alternating 26 and 25 bits:
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! This is the layout of the Ed25519 reference code. Products are
//! accumulated in `i64` and folded back with `2²⁵⁵ ≡ 19`.
//!
//! Unlike the reference code, additions and subtractions carry immediately,
//! so any chain of [`Field`] operations written by generic curve code stays
//! within the limb bounds that `mul` and `square` assume.
//!
//! ## Canonical form
//!
//! The limbs of a value are not unique. Equality, parity and encoding all
//! go through [`Fe25519::to_bytes`], which fully reduces.

use super::Field;

use crate::ct::{ConditionallySelectable, ConstantTimeEq, is_zero_u64, mask32};
use crate::error::{Error, Result};
use crate::primitives::Uint;

use std::array;
use std::fmt::{Debug, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

/// Multiplies two limbs with promotion to `i64`.
macro_rules! mul {
    ($a:expr, $b:expr) => {
        ($a as i64) * ($b as i64)
    };
}

/// Limb widths.
const LIMB_BITS: [u32; 10] = [26, 25, 26, 25, 26, 25, 26, 25, 26, 25];

/// Loads 3 little-endian bytes.
#[inline(always)]
fn load_3(input: &[u8]) -> u64 {
    (input[0] as u64) | ((input[1] as u64) << 8) | ((input[2] as u64) << 16)
}

/// Loads 4 little-endian bytes.
#[inline(always)]
fn load_4(input: &[u8]) -> u64 {
    (input[0] as u64)
        | ((input[1] as u64) << 8)
        | ((input[2] as u64) << 16)
        | ((input[3] as u64) << 24)
}

/// Schoolbook product over the 10 limbs.
///
/// `fᵢ · gⱼ` lands in limb `i + j`. Terms past limb 9 wrap around with a
/// factor 19, and terms where two odd (25-bit) limbs meet are doubled since
/// their weights overshoot the target limb by one bit. With carried inputs
/// every accumulator stays below 2⁶².
#[inline(always)]
fn product(f: &[i32; 10], g: &[i32; 10]) -> Fe25519 {
    let mut h = [0i64; 10];

    for i in 0..10 {
        for j in 0..10 {
            let mut term = mul!(f[i], g[j]);
            if i & j & 1 == 1 {
                term *= 2;
            }
            if i + j >= 10 {
                h[i + j - 10] += 19 * term;
            } else {
                h[i + j] += term;
            }
        }
    }

    reduce(h)
}

/// Carries a wide limb vector back into the 26/25-bit layout.
///
/// The carry order `0,4 1,5 2,6 3,7 4,8 9,0` keeps every intermediate below
/// 2⁶³ for inputs produced by `mul` and `square`.
#[inline(always)]
fn reduce(mut h: [i64; 10]) -> Fe25519 {
    for index in [0, 4, 1, 5, 2, 6, 3, 7, 4, 8] {
        let bits = LIMB_BITS[index];
        let carry = (h[index] + (1i64 << (bits - 1))) >> bits;
        h[index + 1] += carry;
        h[index] -= carry << bits;
    }

    let carry9 = (h[9] + (1i64 << 24)) >> 25;
    h[0] += carry9 * 19;
    h[9] -= carry9 << 25;

    let carry0 = (h[0] + (1i64 << 25)) >> 26;
    h[1] += carry0;
    h[0] -= carry0 << 26;

    Fe25519(h.map(|x| x as i32))
}

/// Element of `𝔽ₚ` for `p = 2²⁵⁵ − 19`.
#[derive(Clone, Copy)]
pub struct Fe25519(pub(crate) [i32; 10]);

impl Fe25519 {
    /// Builds a constant from already-reduced limbs.
    pub(crate) const fn from_limbs(limbs: [i32; 10]) -> Self {
        Fe25519(limbs)
    }

    /// Decodes 32 little-endian bytes, ignoring bit 255.
    ///
    /// Values in `[p, 2²⁵⁵)` are accepted and represent `x − p`.
    pub fn from_bytes(input: &[u8; 32]) -> Fe25519 {
        // (byte_offset, load_size, left_shift)
        let load_configs = [
            (0, 4, 0),
            (4, 3, 6),
            (7, 3, 5),
            (10, 3, 3),
            (13, 3, 2),
            (16, 4, 0),
            (20, 3, 7),
            (23, 3, 5),
            (26, 3, 4),
            (29, 3, 2),
        ];

        let mut output = [0i64; 10];
        for (index, &(offset, size, shift)) in load_configs.iter().enumerate() {
            let mut value = if size == 4 {
                load_4(&input[offset..])
            } else {
                load_3(&input[offset..])
            };

            if index == 9 {
                // drop bit 255
                value &= 0x7f_ffff;
            }

            output[index] = (value << shift) as i64;
        }

        reduce(output)
    }

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut h = self.0.map(|x| x as i64);

        // q = floor(h / p), either 0 or 1 after the limb bounds of `reduce`
        let mut q = (19 * h[9] + (1i64 << 24)) >> 25;
        for (limb, bits) in h.iter().zip(LIMB_BITS) {
            q = (limb + q) >> bits;
        }

        h[0] += 19 * q;

        // h - q·p, with the 2²⁵⁵ term dropped from the top limb
        for index in 0..9 {
            let carry = h[index] >> LIMB_BITS[index];
            h[index] -= carry << LIMB_BITS[index];
            h[index + 1] += carry;
        }
        let carry9 = h[9] >> 25;
        h[9] -= carry9 << 25;

        // (output_byte_index, limb_index, right_shift, optional (next_limb, left_shift))
        let encode_configs = [
            (0, 0, 0, None),
            (1, 0, 8, None),
            (2, 0, 16, None),
            (3, 0, 24, Some((1, 2))),
            (4, 1, 6, None),
            (5, 1, 14, None),
            (6, 1, 22, Some((2, 3))),
            (7, 2, 5, None),
            (8, 2, 13, None),
            (9, 2, 21, Some((3, 5))),
            (10, 3, 3, None),
            (11, 3, 11, None),
            (12, 3, 19, Some((4, 6))),
            (13, 4, 2, None),
            (14, 4, 10, None),
            (15, 4, 18, None),
            (16, 5, 0, None),
            (17, 5, 8, None),
            (18, 5, 16, None),
            (19, 5, 24, Some((6, 1))),
            (20, 6, 7, None),
            (21, 6, 15, None),
            (22, 6, 23, Some((7, 3))),
            (23, 7, 5, None),
            (24, 7, 13, None),
            (25, 7, 21, Some((8, 4))),
            (26, 8, 4, None),
            (27, 8, 12, None),
            (28, 8, 20, Some((9, 6))),
            (29, 9, 2, None),
            (30, 9, 10, None),
            (31, 9, 18, None),
        ];

        let mut output = [0u8; 32];
        for &(index, limb, shift, next) in &encode_configs {
            output[index] = match next {
                Some((next_limb, next_shift)) => {
                    ((h[limb] >> shift) | (h[next_limb] << next_shift)) as u8
                }
                None => (h[limb] >> shift) as u8,
            };
        }

        output
    }

    /// Multiplies by `121666 = (486662 + 2) / 4`, the ladder constant of
    /// Curve25519.
    pub(crate) fn mul121666(&self) -> Self {
        reduce(self.0.map(|x| x as i64 * 121_666))
    }

    /// Squares `n` times.
    fn n_square(self, n: usize) -> Fe25519 {
        (0..n).fold(self, |acc, _| acc.square_limbs())
    }

    fn square_limbs(self) -> Fe25519 {
        product(&self.0, &self.0)
    }

    /// Raises to `2²⁵² − 3 = (p − 5) / 8`, the exponent behind square roots.
    fn pow22523(&self) -> Self {
        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        t0 = t0.square();
        t0 = t1 * t0;

        t1 = t0.n_square(5);
        t0 = t1 * t0;

        t1 = t0.n_square(10);
        t1 = t1 * t0;

        let mut t2 = t1.n_square(20);
        t1 = t2 * t1;

        t1 = t1.n_square(10);
        t0 = t1 * t0;

        t1 = t0.n_square(50);
        t1 = t1 * t0;

        t2 = t1.n_square(100);
        t1 = t2 * t1;

        t1 = t1.n_square(50);
        t0 = t1 * t0;

        t0 = t0.n_square(2);

        t0 * *self
    }

    /// Fermat inversion `self^(p − 2)` via the reference addition chain.
    /// Zero maps to zero.
    fn invert_or_zero(&self) -> Self {
        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        let mut t2 = t0.square();
        t1 = t1 * t2;

        t2 = t1.n_square(5);
        t1 = t2 * t1;

        t2 = t1.n_square(10);
        t2 = t2 * t1;

        let mut t3 = t2.n_square(20);
        t2 = t3 * t2;

        t2 = t2.n_square(10);
        t1 = t2 * t1;

        t2 = t1.n_square(50);
        t2 = t2 * t1;

        t3 = t2.n_square(100);
        t2 = t3 * t2;

        t2 = t2.n_square(50);
        t1 = t2 * t1;

        t1 = t1.n_square(5);

        t1 * t0
    }
}

impl Mul for Fe25519 {
    type Output = Fe25519;

    fn mul(self, rhs: Self) -> Self::Output {
        product(&self.0, &rhs.0)
    }
}

impl Add for Fe25519 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        reduce(array::from_fn(|index| self.0[index] as i64 + rhs.0[index] as i64))
    }
}

impl Sub for Fe25519 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        reduce(array::from_fn(|index| self.0[index] as i64 - rhs.0[index] as i64))
    }
}

impl Neg for Fe25519 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        reduce(self.0.map(|x| -(x as i64)))
    }
}

impl ConstantTimeEq for Fe25519 {
    fn ct_eq(&self, other: &Self) -> u8 {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl ConditionallySelectable for Fe25519 {
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self {
        let mask = mask32(condition) as i32;
        Fe25519(array::from_fn(|index| {
            a.0[index] ^ ((a.0[index] ^ b.0[index]) & mask)
        }))
    }
}

impl PartialEq for Fe25519 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other) == 1
    }
}

impl Eq for Fe25519 {}

impl Debug for Fe25519 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Fe25519(0x")?;
        for byte in self.to_bytes().iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(")")
    }
}

/// `(p − 1) / 2`.
const HALF_P: Uint<4> =
    Uint::from_be_hex("3ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff6");

/// `√−1 = 2^((p − 1) / 4)`.
const SQRT_M1: Fe25519 = Fe25519([
    34513072, 25610706, 9377949, 3500415, 12389472, 33281959, 41962654, 31548777, 326685, 11406482,
]);

impl Field for Fe25519 {
    const BYTES: usize = 32;
    const MODULUS_BITS: usize = 255;
    const ZERO: Self = Fe25519([0i32; 10]);
    const ONE: Self = Fe25519([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self::from_bytes(&bytes)
    }

    fn is_zero(&self) -> u8 {
        let acc = self.to_bytes().iter().fold(0u8, |acc, &b| acc | b);
        is_zero_u64(acc as u64)
    }

    /// The "sign" of RFC 8032: bit 0 of the canonical encoding.
    fn is_odd(&self) -> u8 {
        self.to_bytes()[0] & 1
    }

    fn is_high(&self) -> u8 {
        let bytes = self.to_bytes();
        let value = Uint::<4>::from_limbs(array::from_fn(|i| {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(&bytes[8 * i..8 * i + 8]);
            u64::from_le_bytes(limb)
        }));
        HALF_P.ct_lt(&value)
    }

    fn square(&self) -> Self {
        self.square_limbs()
    }

    /// Inverse by Fermat's little theorem, `self^(p − 2)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperand`] when `self` is zero.
    ///
    /// # Security
    ///
    /// The exponentiation runs the same 254 squarings and 11 multiplications
    /// for every input.
    fn invert(&self) -> Result<Self> {
        if self.is_zero() == 1 {
            return Err(Error::InvalidOperand);
        }
        Ok(self.invert_or_zero())
    }

    /// Since `p ≡ 5 (mod 8)`, `c = a^((p + 3) / 8)` satisfies `c² = ±a`;
    /// the `−a` case is fixed up by `√−1`.
    fn sqrt(&self) -> Option<Self> {
        let candidate = *self * self.pow22523();
        let check = candidate.square();

        let correct = check.ct_eq(self);
        let flipped = check.ct_eq(&-*self);
        let root = Self::conditional_select(&candidate, &(candidate * SQRT_M1), flipped);

        if (correct | flipped) == 1 {
            Some(root)
        } else {
            None
        }
    }

    fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; 32] = bytes.try_into().ok()?;
        let value = Self::from_bytes(bytes);

        if value.to_bytes()[..].ct_eq(&bytes[..]) == 1 {
            Some(value)
        } else {
            None
        }
    }

    /// Folds 32-byte chunks from the top using `2²⁵⁶ ≡ 38`.
    fn from_le_bytes_reduced(bytes: &[u8]) -> Self {
        let mut acc = Self::ZERO;

        for chunk in bytes.chunks(32).rev() {
            let mut buf = [0u8; 32];
            buf[..chunk.len()].copy_from_slice(chunk);

            let top = Self::from_u64(19 * (buf[31] >> 7) as u64);
            acc = acc * Self::from_u64(38) + Self::from_bytes(&buf) + top;
        }

        acc
    }

    fn write_le_bytes(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }
}
