//! Elliptic-curve, signature and sponge/hash primitives.
//!
//! This crate is a self-contained cryptographic core: modular arithmetic,
//! eight elliptic curves, constant-time scalar multiplication, ECDSA with
//! public-key recovery, EdDSA, and the Keccak, BLAKE2, GHASH and SipHash
//! families. It depends on no external cryptography library.
//!
//! The focus is on **explicit semantics and constant-time execution**:
//! every operation that touches secret material runs the same sequence of
//! field operations and memory accesses whatever the secret's value.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-width multi-limb integers ([`Uint`](primitives::Uint)) and the
//!   carry-propagating helpers the field code is built from.
//!
//! - `field`
//!   Prime fields behind one [`Field`](field::Field) trait: a generic
//!   Montgomery-form field for every Weierstrass, Curve448/Ed448 and scalar
//!   modulus, and a dedicated radix-2²⁵·⁵ field for `2²⁵⁵ − 19`.
//!
//! - `curves`
//!   Short Weierstrass (secp256k1, P-256, P-384, P-521), Montgomery
//!   (Curve25519, Curve448) and twisted Edwards (Ed25519, Ed448) groups,
//!   all exposed through [`CurveGroup`](curves::CurveGroup).
//!
//! - `signatures`
//!   Deterministic ECDSA (RFC 6979) with recovery, and EdDSA (RFC 8032).
//!
//! - `hash`
//!   SHA-2, legacy SHA-1/MD5/RIPEMD-160, HMAC and PBKDF2, the Keccak
//!   family (SHA-3, SHAKE, cSHAKE, KMAC, TupleHash, KangarooTwelve,
//!   TurboSHAKE), BLAKE2b/s, GHASH, SipHash.
//!
//! - `api`
//!   The stable entry points: [`Curve`] / [`Point`] for run-time curve
//!   selection, one module per curve with flat functions, and the
//!   [`fe25519`] helpers.
//!
//! # Conventions
//!
//! - All calls are synchronous and pure; the only mutable state is the
//!   incremental hasher a caller creates and owns.
//! - Failures are reported as [`Error`], never by panicking on caller
//!   input.
//! - Randomness is never sourced internally: key generation takes a
//!   caller-supplied [`rand_core::CryptoRng`].
//! - The crate emits `tracing` events (rejected encodings, nonce retries,
//!   failed verifications) but never installs a subscriber and never logs
//!   secret values.

pub mod ct;
mod error;

pub mod api;
pub mod curves;
pub mod field;
pub mod hash;
pub mod primitives;
pub mod signatures;

pub use api::{
    Curve, Point, curve448, curve25519, ed448, ed25519, fe25519, p256, p384, p521, secp256k1,
};
pub use error::{Error, Result};
