//! Fixed-output Keccak/SHA-3 hashes and the SHAKE/cSHAKE XOFs.

use super::permutation::FULL_ROUNDS;
use super::sp800_185::{encode_string, left_encode};
use super::sponge::{Sponge, XofReader};
use super::{DOMAIN_CSHAKE, DOMAIN_KECCAK, DOMAIN_SHA3, DOMAIN_SHAKE, check_output_len};

use crate::error::Result;
use crate::hash::HashFunction;

use zeroize::Zeroize;

/// Fixed-output sponge hash producing `BITS` bits with domain byte `DOMAIN`.
///
/// Use the aliases: [`Keccak256`] and friends are the original Keccak
/// submission (domain `0x01`, as used by Ethereum), [`Sha3_256`] and
/// friends are FIPS 202 SHA-3 (domain `0x06`).
#[derive(Clone)]
pub struct KeccakHash<const BITS: usize, const DOMAIN: u8> {
    sponge: Sponge,
}

pub type Keccak224 = KeccakHash<224, DOMAIN_KECCAK>;
pub type Keccak256 = KeccakHash<256, DOMAIN_KECCAK>;
pub type Keccak384 = KeccakHash<384, DOMAIN_KECCAK>;
pub type Keccak512 = KeccakHash<512, DOMAIN_KECCAK>;
pub type Sha3_224 = KeccakHash<224, DOMAIN_SHA3>;
pub type Sha3_256 = KeccakHash<256, DOMAIN_SHA3>;
pub type Sha3_384 = KeccakHash<384, DOMAIN_SHA3>;
pub type Sha3_512 = KeccakHash<512, DOMAIN_SHA3>;

impl<const BITS: usize, const DOMAIN: u8> HashFunction for KeccakHash<BITS, DOMAIN> {
    const BLOCK_SIZE: usize = 200 - BITS / 4;
    const OUTPUT_SIZE: usize = BITS / 8;

    fn new() -> Self {
        const { assert!(matches!(BITS, 224 | 256 | 384 | 512)) };
        Self {
            sponge: Sponge::new(Self::BLOCK_SIZE, FULL_ROUNDS),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    fn finalize_into(self, out: &mut [u8]) {
        self.sponge.finalize(DOMAIN).read(&mut out[..Self::OUTPUT_SIZE]);
    }
}

impl<const BITS: usize, const DOMAIN: u8> Zeroize for KeccakHash<BITS, DOMAIN> {
    fn zeroize(&mut self) {
        self.sponge.zeroize();
    }
}

macro_rules! fixed_hash {
    ($($(#[$meta:meta])* $name:ident => $ty:ty, $len:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(data: &[u8]) -> [u8; $len] {
                let mut h = <$ty>::new();
                h.update(data);
                let mut out = [0u8; $len];
                h.finalize_into(&mut out);
                out
            }
        )*
    };
}

fixed_hash! {
    /// Keccak-224 (pre-standard padding).
    keccak_224 => Keccak224, 28;
    /// Keccak-256 (pre-standard padding).
    keccak_256 => Keccak256, 32;
    /// Keccak-384 (pre-standard padding).
    keccak_384 => Keccak384, 48;
    /// Keccak-512 (pre-standard padding).
    keccak_512 => Keccak512, 64;
    /// SHA3-224.
    sha3_224 => Sha3_224, 28;
    /// SHA3-256.
    sha3_256 => Sha3_256, 32;
    /// SHA3-384.
    sha3_384 => Sha3_384, 48;
    /// SHA3-512.
    sha3_512 => Sha3_512, 64;
}

/// Incremental SHAKE at `SECURITY` bits (128 or 256).
#[derive(Clone)]
pub struct Shake<const SECURITY: usize> {
    sponge: Sponge,
}

pub type Shake128 = Shake<128>;
pub type Shake256 = Shake<256>;

impl<const SECURITY: usize> Shake<SECURITY> {
    pub(crate) const RATE: usize = 200 - SECURITY / 4;

    pub fn new() -> Self {
        const { assert!(matches!(SECURITY, 128 | 256)) };
        Self {
            sponge: Sponge::new(Self::RATE, FULL_ROUNDS),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Ends absorption and returns the output stream.
    pub fn finalize_xof(self) -> XofReader {
        self.sponge.finalize(DOMAIN_SHAKE)
    }
}

impl<const SECURITY: usize> Default for Shake<SECURITY> {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental cSHAKE (SP 800-185 §3) at `SECURITY` bits.
///
/// With an empty function name and customization string cSHAKE is plain
/// SHAKE, including its domain byte.
#[derive(Clone)]
pub struct CShake<const SECURITY: usize> {
    sponge: Sponge,
    domain: u8,
}

pub type CShake128 = CShake<128>;
pub type CShake256 = CShake<256>;

impl<const SECURITY: usize> CShake<SECURITY> {
    /// Starts a cSHAKE instance with function name `name` and customization
    /// string `custom`.
    pub fn new(name: &[u8], custom: &[u8]) -> Self {
        let rate = Shake::<SECURITY>::RATE;
        let mut sponge = Sponge::new(rate, FULL_ROUNDS);

        if name.is_empty() && custom.is_empty() {
            return Self {
                sponge,
                domain: DOMAIN_SHAKE,
            };
        }

        // bytepad(encode_string(N) || encode_string(S), rate)
        sponge.absorb(&left_encode(rate as u64));
        sponge.absorb(&encode_string(name));
        sponge.absorb(&encode_string(custom));
        sponge.fill_block();

        Self {
            sponge,
            domain: DOMAIN_CSHAKE,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    pub(crate) fn fill_block(&mut self) {
        self.sponge.fill_block();
    }

    pub fn finalize_xof(self) -> XofReader {
        self.sponge.finalize(self.domain)
    }
}

/// SHAKE128 with `output_length` bytes of output.
///
/// # Errors
/// [`Error::InvalidParameter`](crate::Error::InvalidParameter) when
/// `output_length` is zero.
pub fn shake_128(data: &[u8], output_length: usize) -> Result<Vec<u8>> {
    check_output_len(output_length)?;
    let mut h = Shake128::new();
    h.update(data);
    Ok(h.finalize_xof().read_vec(output_length))
}

/// SHAKE256 with `output_length` bytes of output.
pub fn shake_256(data: &[u8], output_length: usize) -> Result<Vec<u8>> {
    check_output_len(output_length)?;
    let mut h = Shake256::new();
    h.update(data);
    Ok(h.finalize_xof().read_vec(output_length))
}

/// cSHAKE128 with function name `name` and customization `custom`.
pub fn cshake_128(data: &[u8], output_length: usize, name: &[u8], custom: &[u8]) -> Result<Vec<u8>> {
    check_output_len(output_length)?;
    let mut h = CShake128::new(name, custom);
    h.update(data);
    Ok(h.finalize_xof().read_vec(output_length))
}

/// cSHAKE256 with function name `name` and customization `custom`.
pub fn cshake_256(data: &[u8], output_length: usize, name: &[u8], custom: &[u8]) -> Result<Vec<u8>> {
    check_output_len(output_length)?;
    let mut h = CShake256::new(name, custom);
    h.update(data);
    Ok(h.finalize_xof().read_vec(output_length))
}
