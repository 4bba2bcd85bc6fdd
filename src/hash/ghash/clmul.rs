//! Carry-less multiplication path.

use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Backend {
    Software,
    #[cfg(all(feature = "clmul", target_arch = "x86_64"))]
    Pclmulqdq,
}

fn backend() -> Backend {
    static BACKEND: OnceLock<Backend> = OnceLock::new();

    *BACKEND.get_or_init(|| {
        let backend = detect();
        tracing::debug!(?backend, "GHASH carry-less multiply backend");
        backend
    })
}

#[cfg(all(feature = "clmul", target_arch = "x86_64"))]
fn detect() -> Backend {
    if std::is_x86_feature_detected!("pclmulqdq") {
        Backend::Pclmulqdq
    } else {
        Backend::Software
    }
}

#[cfg(not(all(feature = "clmul", target_arch = "x86_64")))]
fn detect() -> Backend {
    Backend::Software
}

/// 64 × 64 → 128-bit carry-less product, one masked shift per bit of `b`.
fn clmul64_soft(a: u64, b: u64) -> u128 {
    let a = u128::from(a);
    let mut r = 0u128;
    for i in 0..64 {
        let mask = 0u128.wrapping_sub(u128::from((b >> i) & 1));
        r ^= (a << i) & mask;
    }
    r
}

#[cfg(all(feature = "clmul", target_arch = "x86_64"))]
#[target_feature(enable = "pclmulqdq,sse2")]
unsafe fn clmul64_hw(a: u64, b: u64) -> u128 {
    use core::arch::x86_64::{_mm_clmulepi64_si128, _mm_cvtsi64_si128};

    // SAFETY: the caller checked for pclmulqdq; __m128i and u128 have the
    // same size and x86_64 is little-endian
    unsafe {
        let x = _mm_cvtsi64_si128(a as i64);
        let y = _mm_cvtsi64_si128(b as i64);
        core::mem::transmute::<_, u128>(_mm_clmulepi64_si128::<0x00>(x, y))
    }
}

fn clmul64(a: u64, b: u64, backend: Backend) -> u128 {
    match backend {
        Backend::Software => clmul64_soft(a, b),
        #[cfg(all(feature = "clmul", target_arch = "x86_64"))]
        // SAFETY: only selected after runtime detection
        Backend::Pclmulqdq => unsafe { clmul64_hw(a, b) },
    }
}

/// Full 256-bit carry-less product of two polynomials, as `(hi, lo)`.
fn clmul128(a: u128, b: u128, backend: Backend) -> (u128, u128) {
    let (a1, a0) = ((a >> 64) as u64, a as u64);
    let (b1, b0) = ((b >> 64) as u64, b as u64);

    let lo = clmul64(a0, b0, backend);
    let hi = clmul64(a1, b1, backend);
    let mid = clmul64(a0, b1, backend) ^ clmul64(a1, b0, backend);

    (hi ^ (mid >> 64), lo ^ (mid << 64))
}

/// Folds `hi · x¹²⁸` back with `x¹²⁸ = x⁷ + x² + x + 1`.
fn reduce(hi: u128, lo: u128) -> u128 {
    let fold = |t: u128| t ^ (t << 1) ^ (t << 2) ^ (t << 7);
    let overflow = (hi >> 127) ^ (hi >> 126) ^ (hi >> 121);
    lo ^ fold(hi) ^ fold(overflow)
}

/// `x · y` for blocks in GCM bit order.
pub(super) fn gf_mul(x: u128, y: u128) -> u128 {
    let (hi, lo) = clmul128(x.reverse_bits(), y.reverse_bits(), backend());
    reduce(hi, lo).reverse_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn software_product_small_values() {
        // (x + 1)² = x² + 1 over GF(2)
        assert_eq!(clmul64_soft(0b11, 0b11), 0b101);
        assert_eq!(clmul64_soft(u64::MAX, 1), u128::from(u64::MAX));
    }

    #[test]
    fn reduction_of_x128() {
        assert_eq!(reduce(1, 0), 0x87);
    }

    #[cfg(all(feature = "clmul", target_arch = "x86_64"))]
    #[test]
    fn hardware_matches_software() {
        if !std::is_x86_feature_detected!("pclmulqdq") {
            return;
        }
        let pairs = [(0u64, 0u64), (u64::MAX, u64::MAX), (0x8000_0000_0000_0001, 0x1234_5678_9abc_def0)];
        for (a, b) in pairs {
            assert_eq!(clmul64(a, b, Backend::Pclmulqdq), clmul64_soft(a, b));
        }
    }
}
