//! Generic Montgomery-form prime field.
//!
//! An element `a` is stored as `a · R mod p` with `R = 2^(64·N)`. Products
//! are computed with the CIOS (coarsely integrated operand scanning)
//! Montgomery multiplication, which interleaves the schoolbook product with
//! the reduction and finishes with a single masked subtraction.
//!
//! The Montgomery constants `R`, `R²` and `−p⁻¹ mod 2⁶⁴` are derived from the
//! modulus at compile time, so a new field only has to name its modulus:
//!
//! ```ignore
//! field_params!(
//!     /// Base field of secp256k1.
//!     Secp256k1Base, 4, 32,
//!     "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
//! );
//! pub type FieldElement = Fp<Secp256k1Base, 4>;
//! ```

use super::Field;

use crate::ct::{ConditionallySelectable, ConstantTimeEq};
use crate::error::{Error, Result};
use crate::primitives::{Uint, adc, mac, sbb};

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

/// Compile-time description of a prime modulus.
///
/// Only [`MODULUS`](Self::MODULUS) and [`BYTES`](Self::BYTES) must be
/// provided. The modulus must be an odd prime; it may use every bit of its
/// top limb.
pub trait FieldParams<const N: usize>: Copy + Debug + Default + 'static {
    /// The prime `p`.
    const MODULUS: Uint<N>;

    /// Canonical encoding length in bytes.
    const BYTES: usize;

    /// `−p⁻¹ mod 2⁶⁴`.
    const INV: u64 = neg_inverse(Self::MODULUS.limbs[0]);

    /// `R mod p`, the Montgomery form of one.
    const R: Uint<N> = pow2_mod(&Self::MODULUS, 64 * N);

    /// `R² mod p`, used to enter Montgomery form.
    const R2: Uint<N> = pow2_mod(&Self::MODULUS, 128 * N);
}

/// Declares a zero-sized [`FieldParams`] type.
macro_rules! field_params {
    ($(#[$meta:meta])* $name:ident, $limbs:expr, $bytes:expr, $modulus:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::field::FieldParams<$limbs> for $name {
            const MODULUS: $crate::primitives::Uint<$limbs> =
                $crate::primitives::Uint::from_be_hex($modulus);
            const BYTES: usize = $bytes;
        }
    };
}

pub(crate) use field_params;

/// Newton iteration for `−x⁻¹ mod 2⁶⁴` (`x` odd).
///
/// `x · x ≡ 1 (mod 8)` gives three correct bits to start from; each step
/// doubles them, so five steps cover 64 bits.
const fn neg_inverse(x: u64) -> u64 {
    let mut inv = x;
    let mut i = 0;
    while i < 5 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(x.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

/// Computes `2^k mod p` by repeated modular doubling.
const fn pow2_mod<const N: usize>(p: &Uint<N>, k: usize) -> Uint<N> {
    let mut x = Uint::<N>::ONE;
    let mut i = 0;
    while i < k {
        let (d, carry) = x.shl1();
        let (r, borrow) = d.sbb(p);
        x = if carry == 1 || borrow == 0 { r } else { d };
        i += 1;
    }
    x
}

/// Element of the prime field described by `P`, in Montgomery form.
pub struct Fp<P, const N: usize> {
    mont: Uint<N>,
    _params: PhantomData<P>,
}

impl<P, const N: usize> Clone for Fp<P, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, const N: usize> Copy for Fp<P, N> {}

impl<P: FieldParams<N>, const N: usize> Fp<P, N> {
    /// Additive identity.
    pub const ZERO: Self = Self::from_mont(Uint::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_mont(P::R);

    const P_MINUS_2: Uint<N> = P::MODULUS.wrapping_sub(&Uint::from_u64(2));

    /// `(p + 1) / 4`.
    const SQRT_EXP: Uint<N> = P::MODULUS.wrapping_add(&Uint::ONE).shr(2);

    /// `(p − 1) / 2` for odd `p`.
    const HALF_MODULUS: Uint<N> = P::MODULUS.shr(1);

    const fn from_mont(mont: Uint<N>) -> Self {
        Self {
            mont,
            _params: PhantomData,
        }
    }

    /// Montgomery product `a · b · R⁻¹ mod p`.
    ///
    /// Correct whenever `a · b < R · p`, in particular for any `a < R` when
    /// `b < p`.
    const fn mont_mul(a: &Uint<N>, b: &Uint<N>) -> Uint<N> {
        let p = &P::MODULUS.limbs;
        let a = &a.limbs;
        let b = &b.limbs;

        let mut t = [0u64; N];
        let mut t_hi = 0u64;

        let mut i = 0;
        while i < N {
            let mut carry = 0;
            let mut j = 0;
            while j < N {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
                j += 1;
            }
            let (s, top) = adc(t_hi, carry, 0);

            let m = t[0].wrapping_mul(P::INV);
            let (_, mut carry) = mac(t[0], m, p[0], 0);
            let mut j = 1;
            while j < N {
                let (lo, hi) = mac(t[j], m, p[j], carry);
                t[j - 1] = lo;
                carry = hi;
                j += 1;
            }
            let (lo, c) = adc(s, carry, 0);
            t[N - 1] = lo;
            t_hi = top + c;

            i += 1;
        }

        // t < 2p: subtract p unless that borrows out of (t_hi : t)
        let mut r = [0u64; N];
        let mut borrow = 0;
        let mut j = 0;
        while j < N {
            let (d, b) = sbb(t[j], p[j], borrow);
            r[j] = d;
            borrow = b;
            j += 1;
        }
        let (_, borrow) = sbb(t_hi, 0, borrow);

        let keep_t = 0u64.wrapping_sub(borrow);
        let mut j = 0;
        while j < N {
            r[j] = (t[j] & keep_t) | (r[j] & !keep_t);
            j += 1;
        }

        Uint::from_limbs(r)
    }

    /// Maps any `x < 2^(64·N)` to `x mod p`.
    pub const fn from_uint_reduced(x: &Uint<N>) -> Self {
        Self::from_mont(Self::mont_mul(x, &P::R2))
    }

    /// Field constant from a big-endian hex literal (reduced modulo `p`).
    pub const fn from_be_hex(hex: &str) -> Self {
        Self::from_uint_reduced(&Uint::from_be_hex(hex))
    }

    /// Accepts `x` only if it is a canonical representative.
    pub fn from_uint(x: &Uint<N>) -> Option<Self> {
        if x.ct_lt(&P::MODULUS) == 1 {
            Some(Self::from_uint_reduced(x))
        } else {
            None
        }
    }

    /// Returns the canonical integer representative.
    pub fn to_uint(&self) -> Uint<N> {
        Self::mont_mul(&self.mont, &Uint::ONE)
    }

    /// Reduces a little-endian integer of any length modulo `p`.
    ///
    /// Processes the input in `8 · N`-byte chunks from the most significant
    /// end, Horner style: `acc ← acc · 2^(64·N) + chunk`.
    pub fn reduce_le_bytes(bytes: &[u8]) -> Self {
        let mut acc = Self::ZERO;

        for chunk in bytes.chunks(8 * N).rev() {
            let mut limbs = [0u64; N];
            for (i, &b) in chunk.iter().enumerate() {
                limbs[i / 8] |= (b as u64) << ((i % 8) * 8);
            }

            // mont(acc) · R² · R⁻¹ = mont(acc · R)
            let shifted = Self::from_mont(Self::mont_mul(&acc.mont, &P::R2));
            acc = shifted + Self::from_uint_reduced(&Uint::from_limbs(limbs));
        }

        acc
    }

    /// Computes `self^exp` with a square-and-multiply-always ladder over all
    /// `64 · N` exponent bits.
    pub fn pow(&self, exp: &Uint<N>) -> Self {
        let mut acc = Self::ONE;

        for i in (0..Uint::<N>::BITS).rev() {
            acc = acc.square();
            let product = acc * *self;
            acc.conditional_assign(&product, exp.bit(i));
        }

        acc
    }

    /// Fermat inversion; maps zero to zero.
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow(&Self::P_MINUS_2)
    }
}

impl<P: FieldParams<N>, const N: usize> Field for Fp<P, N> {
    const BYTES: usize = P::BYTES;
    const MODULUS_BITS: usize = P::MODULUS.bits_vartime();
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn from_u64(value: u64) -> Self {
        Self::from_uint_reduced(&Uint::from_u64(value))
    }

    fn is_zero(&self) -> u8 {
        self.mont.is_zero()
    }

    fn is_odd(&self) -> u8 {
        self.to_uint().is_odd()
    }

    fn is_high(&self) -> u8 {
        Self::HALF_MODULUS.ct_lt(&self.to_uint())
    }

    fn square(&self) -> Self {
        Self::from_mont(Self::mont_mul(&self.mont, &self.mont))
    }

    fn invert(&self) -> Result<Self> {
        if self.is_zero() == 1 {
            return Err(Error::InvalidOperand);
        }
        Ok(self.invert_or_zero())
    }

    /// `a^((p+1)/4)`, checked by squaring. Only instantiated for moduli
    /// `p ≡ 3 (mod 4)`.
    fn sqrt(&self) -> Option<Self> {
        const { assert!(P::MODULUS.limbs[0] & 3 == 3) };

        let root = self.pow(&Self::SQRT_EXP);
        if root.square().ct_eq(self) == 1 {
            Some(root)
        } else {
            None
        }
    }

    fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != P::BYTES {
            return None;
        }
        Self::from_uint(&Uint::from_le_slice(bytes)?)
    }

    fn from_le_bytes_reduced(bytes: &[u8]) -> Self {
        Self::reduce_le_bytes(bytes)
    }

    fn write_le_bytes(&self, out: &mut [u8]) {
        self.to_uint().write_le_bytes(out);
    }
}

impl<P: FieldParams<N>, const N: usize> Add for Fp<P, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (sum, carry) = self.mont.adc(&rhs.mont);
        let (reduced, borrow) = sum.sbb(&P::MODULUS);
        let keep_sum = (borrow & (carry ^ 1)) as u8;
        Self::from_mont(Uint::conditional_select(&reduced, &sum, keep_sum))
    }
}

impl<P: FieldParams<N>, const N: usize> Sub for Fp<P, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = self.mont.sbb(&rhs.mont);
        let corrected = diff.wrapping_add(&P::MODULUS);
        Self::from_mont(Uint::conditional_select(&diff, &corrected, borrow as u8))
    }
}

impl<P: FieldParams<N>, const N: usize> Mul for Fp<P, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_mont(Self::mont_mul(&self.mont, &rhs.mont))
    }
}

impl<P: FieldParams<N>, const N: usize> Neg for Fp<P, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl<P, const N: usize> ConstantTimeEq for Fp<P, N> {
    fn ct_eq(&self, other: &Self) -> u8 {
        self.mont.ct_eq(&other.mont)
    }
}

impl<P, const N: usize> ConditionallySelectable for Fp<P, N> {
    fn conditional_select(a: &Self, b: &Self, condition: u8) -> Self {
        Self {
            mont: Uint::conditional_select(&a.mont, &b.mont, condition),
            _params: PhantomData,
        }
    }
}

impl<P, const N: usize> PartialEq for Fp<P, N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other) == 1
    }
}

impl<P, const N: usize> Eq for Fp<P, N> {}

impl<P: FieldParams<N>, const N: usize> Debug for Fp<P, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fp({:?})", self.to_uint())
    }
}
