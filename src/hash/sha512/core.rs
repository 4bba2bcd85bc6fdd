//! SHA-512 block compression.

use super::computations::all_rounds;

/// Compresses a single 1024-bit message block into the state.
///
/// Input words are interpreted as big-endian; the schedule beyond the first
/// 16 words is expanded on the fly by `all_rounds`.
pub(super) fn compress(block: &[u8], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    all_rounds(state, w);
}
