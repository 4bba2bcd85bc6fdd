//! Deterministic nonce generation (RFC 6979, §3.2).

use crate::hash::{HashFunction, Hmac};

use zeroize::Zeroize;

/// HMAC-DRBG instance seeded with a private key and a message digest.
///
/// Every call to [`next_candidate`](Self::next_candidate) yields one
/// `bits2int(T)` candidate; the caller rejects candidates that are zero or
/// not below the group order, or that lead to `r = 0` / `s = 0`, and asks
/// for the next one.
pub(crate) struct NonceGenerator<H: HashFunction> {
    k: Vec<u8>,
    v: Vec<u8>,
    qlen: usize,
    first: bool,
    _hash: std::marker::PhantomData<H>,
}

fn hmac<H: HashFunction>(key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
    let mut mac = Hmac::<H>::new(key);
    for part in parts {
        mac.update(part);
    }
    mac.finalize()
}

/// `bits2int`: keeps the leftmost `qlen` bits of `input`, returned as
/// `ceil(qlen / 8)` big-endian bytes.
pub(crate) fn bits2int(input: &[u8], qlen: usize) -> Vec<u8> {
    let rlen = qlen.div_ceil(8);

    if 8 * input.len() <= qlen {
        let mut out = vec![0u8; rlen - input.len()];
        out.extend_from_slice(input);
        return out;
    }

    let mut out = input[..rlen].to_vec();
    let shift = 8 * rlen - qlen;
    if shift > 0 {
        for i in (0..rlen).rev() {
            let carry = if i > 0 { out[i - 1] << (8 - shift) } else { 0 };
            out[i] = (out[i] >> shift) | carry;
        }
    }
    out
}

impl<H: HashFunction> NonceGenerator<H> {
    /// Seeds the generator with `int2octets(x)` and `bits2octets(h)`, both
    /// `ceil(qlen / 8)` bytes.
    pub(crate) fn new(x: &[u8], h1: &[u8], qlen: usize) -> Self {
        let mut v = vec![0x01u8; H::OUTPUT_SIZE];
        let mut k = vec![0x00u8; H::OUTPUT_SIZE];

        k = hmac::<H>(&k, &[&v, &[0x00], x, h1]);
        v = hmac::<H>(&k, &[&v]);
        k = hmac::<H>(&k, &[&v, &[0x01], x, h1]);
        v = hmac::<H>(&k, &[&v]);

        Self {
            k,
            v,
            qlen,
            first: true,
            _hash: std::marker::PhantomData,
        }
    }

    /// Next candidate nonce, `ceil(qlen / 8)` big-endian bytes.
    pub(crate) fn next_candidate(&mut self) -> Vec<u8> {
        if !self.first {
            self.k = hmac::<H>(&self.k, &[&self.v, &[0x00]]);
            self.v = hmac::<H>(&self.k, &[&self.v]);
        }
        self.first = false;

        let mut t = Vec::with_capacity(self.qlen.div_ceil(8) + H::OUTPUT_SIZE);
        while 8 * t.len() < self.qlen {
            self.v = hmac::<H>(&self.k, &[&self.v]);
            t.extend_from_slice(&self.v);
        }

        let candidate = bits2int(&t, self.qlen);
        t.zeroize();
        candidate
    }
}

impl<H: HashFunction> Drop for NonceGenerator<H> {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}
