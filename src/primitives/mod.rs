//! Primitive types
//!
//! This module defines the fixed-width integer type underlying every field
//! and scalar in the crate.
//!
//! `Uint<N>` is a plain array of `N` little-endian 64-bit limbs. It is not a
//! general big-integer library: it offers exactly the carry-propagating
//! building blocks that modular arithmetic needs (add with carry, subtract
//! with borrow, multiply-accumulate, shifts, byte conversions), all usable in
//! `const` contexts so that curve constants can be evaluated at compile time.

mod bytes;
mod uint;

pub use uint::Uint;

pub(crate) use uint::{adc, mac, sbb};
