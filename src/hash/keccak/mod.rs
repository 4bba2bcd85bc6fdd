//! The Keccak family.
//!
//! Everything here is one sponge over Keccak-p\[1600\]; the members differ
//! in rate, round count, the domain-separation byte appended before the
//! final padding bit, and in what is absorbed ahead of the message:
//!
//! | function             | rate (bytes)  | rounds | domain byte |
//! |----------------------|---------------|--------|-------------|
//! | Keccak-n             | 200 − n/4     | 24     | `0x01`      |
//! | SHA3-n               | 200 − n/4     | 24     | `0x06`      |
//! | SHAKE128/256         | 168 / 136     | 24     | `0x1F`      |
//! | cSHAKE, KMAC, TupleHash | 168 / 136  | 24     | `0x04`      |
//! | TurboSHAKE128/256    | 168 / 136     | 12     | caller's    |
//! | KangarooTwelve       | 168           | 12     | `0x07` / `0x0B` / `0x06` |

mod kangaroo;
mod permutation;
mod sha3;
mod sp800_185;
mod sponge;

pub use kangaroo::{TURBO_SHAKE_DEFAULT_DOMAIN, kangaroo_twelve, turbo_shake_128, turbo_shake_256};
pub use sha3::{
    CShake, CShake128, CShake256, Keccak224, Keccak256, Keccak384, Keccak512, KeccakHash, Sha3_224,
    Sha3_256, Sha3_384, Sha3_512, Shake, Shake128, Shake256, cshake_128, cshake_256, keccak_224,
    keccak_256, keccak_384, keccak_512, sha3_224, sha3_256, sha3_384, sha3_512, shake_128, shake_256,
};
pub use sp800_185::{
    kmac_128, kmac_256, kmac_xof_128, kmac_xof_256, tuple_hash_128, tuple_hash_256,
    tuple_hash_xof_128, tuple_hash_xof_256,
};
pub use sponge::XofReader;

use crate::error::{Error, Result};

pub(crate) const DOMAIN_KECCAK: u8 = 0x01;
pub(crate) const DOMAIN_SHA3: u8 = 0x06;
pub(crate) const DOMAIN_SHAKE: u8 = 0x1f;
pub(crate) const DOMAIN_CSHAKE: u8 = 0x04;

/// XOF-style outputs must be at least one byte.
pub(crate) fn check_output_len(output_length: usize) -> Result<()> {
    if output_length == 0 {
        return Err(Error::InvalidParameter("output length must be non-zero"));
    }
    Ok(())
}
