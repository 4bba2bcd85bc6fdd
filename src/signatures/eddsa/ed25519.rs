use super::EddsaCurve;

use crate::curves::edwards::Ed25519;
use crate::hash::{HashFunction, Sha512};

/// PureEdDSA over edwards25519 with SHA-512; contexts are not used.
impl EddsaCurve for Ed25519 {
    const SEED_BYTES: usize = 32;

    fn hash(_context: &[u8], parts: &[&[u8]]) -> Vec<u8> {
        let mut h = Sha512::new();
        for part in parts {
            h.update(part);
        }
        h.finalize()
    }

    fn expand(seed: &[u8]) -> Vec<u8> {
        Sha512::digest(seed)
    }

    fn clamp(scalar: &mut [u8]) {
        scalar[0] &= 248;
        scalar[31] &= 127;
        scalar[31] |= 64;
    }
}
