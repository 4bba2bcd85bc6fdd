//! Digital signature schemes.
//!
//! - [`ecdsa`]: ECDSA over the Weierstrass curves, with deterministic
//!   nonces and public-key recovery.
//! - [`eddsa`]: Ed25519 and Ed448.
//!
//! Both are stateless: every call takes the key material it needs and
//! returns a complete result or an error.

pub mod ecdsa;
pub mod eddsa;
