//! HMAC (RFC 2104) over any [`HashFunction`].

use super::{HashFunction, Sha256, Sha384, Sha512};

use zeroize::Zeroize;

/// Incremental HMAC.
#[derive(Clone)]
pub struct Hmac<H: HashFunction> {
    inner: H,
    outer: H,
}

impl<H: HashFunction> Hmac<H> {
    /// Keys a new MAC. Keys longer than the block size are hashed first.
    pub fn new(key: &[u8]) -> Self {
        let mut block = vec![0u8; H::BLOCK_SIZE];
        if key.len() > H::BLOCK_SIZE {
            let mut digest = H::digest(key);
            block[..digest.len()].copy_from_slice(&digest);
            digest.zeroize();
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut inner = H::new();
        let mut outer = H::new();

        block.iter_mut().for_each(|b| *b ^= 0x36);
        inner.update(&block);
        block.iter_mut().for_each(|b| *b ^= 0x36 ^ 0x5c);
        outer.update(&block);
        block.zeroize();

        Self { inner, outer }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Returns the tag (`H::OUTPUT_SIZE` bytes).
    pub fn finalize(mut self) -> Vec<u8> {
        let inner = core::mem::replace(&mut self.inner, H::new());
        let mut outer = core::mem::replace(&mut self.outer, H::new());

        let mut digest = inner.finalize();
        outer.update(&digest);
        digest.zeroize();
        outer.finalize()
    }
}

impl<H: HashFunction> Zeroize for Hmac<H> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
        self.outer.zeroize();
    }
}

/// The keyed inner and outer states are key material.
impl<H: HashFunction> Drop for Hmac<H> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

fn mac<H: HashFunction>(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut h = Hmac::<H>::new(key);
    h.update(data);
    h.finalize()
}

/// HMAC-SHA-256.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    mac::<Sha256>(key, data)
}

/// HMAC-SHA-384.
pub fn hmac_sha384(key: &[u8], data: &[u8]) -> Vec<u8> {
    mac::<Sha384>(key, data)
}

/// HMAC-SHA-512.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Vec<u8> {
    mac::<Sha512>(key, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroize_erases_key_state() {
        let mut a = Hmac::<Sha256>::new(b"first key");
        let mut b = Hmac::<Sha256>::new(b"second key");
        let keyed = a.clone().finalize();

        a.zeroize();
        b.zeroize();

        let wiped = a.finalize();
        assert_ne!(wiped, keyed);
        assert_eq!(wiped, b.finalize());
    }

    #[test]
    fn clone_keeps_running_state() {
        let mut h = Hmac::<Sha512>::new(b"key");
        h.update(b"what do ya want ");
        let copy = h.clone();
        h.update(b"for nothing?");

        let mut resumed = copy;
        resumed.update(b"for nothing?");
        let tag = h.finalize();
        assert_eq!(resumed.finalize(), tag);
        assert_eq!(hmac_sha512(b"key", b"what do ya want for nothing?"), tag);
    }
}
