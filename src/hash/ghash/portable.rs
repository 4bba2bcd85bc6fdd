/// `R`, the reduction constant `11100001 || 0¹²⁰`.
const R: u128 = 0xe1 << 120;

/// `x · y` in GCM bit order (SP 800-38D, Algorithm 1), with the bit tests
/// turned into masks.
pub(super) fn gf_mul(x: u128, y: u128) -> u128 {
    let mut z = 0u128;
    let mut v = y;

    for i in (0..128).rev() {
        let take = 0u128.wrapping_sub((x >> i) & 1);
        z ^= v & take;

        let carry = 0u128.wrapping_sub(v & 1);
        v = (v >> 1) ^ (R & carry);
    }

    z
}
