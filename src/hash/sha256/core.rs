use super::computations::all_rounds;

/// Compresses one 64-byte block into the state.
#[inline(always)]
pub(super) fn compress(block: &[u8], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, w);
}
