use super::EddsaCurve;

use crate::curves::edwards::Ed448;
use crate::hash::Shake256;

/// Ed448 with SHAKE256-114 and `dom4(0, context)`.
impl EddsaCurve for Ed448 {
    const SEED_BYTES: usize = 57;

    fn hash(context: &[u8], parts: &[&[u8]]) -> Vec<u8> {
        let mut h = Shake256::new();
        h.update(b"SigEd448");
        h.update(&[0x00, context.len() as u8]);
        h.update(context);
        for part in parts {
            h.update(part);
        }
        h.finalize_xof().read_vec(114)
    }

    fn expand(seed: &[u8]) -> Vec<u8> {
        let mut h = Shake256::new();
        h.update(seed);
        h.finalize_xof().read_vec(114)
    }

    fn clamp(scalar: &mut [u8]) {
        scalar[0] &= 252;
        scalar[55] |= 128;
        scalar[56] = 0;
    }
}
