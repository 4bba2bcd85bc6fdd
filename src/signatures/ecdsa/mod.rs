//! ECDSA over the Weierstrass curves, with public-key recovery.
//!
//! Nonces are deterministic (RFC 6979) using HMAC over the SHA-2 function
//! matched to the curve, so signing the same digest with the same key
//! always gives the same signature.
//!
//! Message digests are supplied by the caller and may have any length;
//! they are mapped to scalars with `bits2int`, i.e. truncated to the bit
//! length of the group order.
//!
//! Signatures serialize as `r || s`, each big-endian and as long as the
//! group order. The recovery identifier carries the parity of `R.y` in bit
//! 0 and whether `R.x` was not below the group order in bit 1.

mod rfc6979;

use self::rfc6979::{NonceGenerator, bits2int};

use crate::curves::CurveGroup;
use crate::curves::weierstrass::{AffinePoint, P256, P384, P521, Secp256k1, WeierstrassCurve};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::hash::{HashFunction, Sha256, Sha384, Sha512};

use zeroize::Zeroize;

/// A Weierstrass curve with the hash used for its RFC 6979 nonces.
pub trait EcdsaCurve: WeierstrassCurve {
    type Digest: HashFunction;
}

impl EcdsaCurve for Secp256k1 {
    type Digest = Sha256;
}

impl EcdsaCurve for P256 {
    type Digest = Sha256;
}

impl EcdsaCurve for P384 {
    type Digest = Sha384;
}

impl EcdsaCurve for P521 {
    type Digest = Sha512;
}

/// An ECDSA signature together with its recovery identifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecoverableSignature<C: WeierstrassCurve> {
    r: C::Scalar,
    s: C::Scalar,
    recovery_id: u8,
}

fn scalar_bytes<C: WeierstrassCurve>(x: &C::Scalar) -> Vec<u8> {
    let mut out = vec![0u8; <C::Scalar as Field>::BYTES];
    x.write_be_bytes(&mut out);
    out
}

impl<C: WeierstrassCurve> RecoverableSignature<C> {
    /// `r`, big-endian.
    pub fn r(&self) -> Vec<u8> {
        scalar_bytes::<C>(&self.r)
    }

    /// `s`, big-endian.
    pub fn s(&self) -> Vec<u8> {
        scalar_bytes::<C>(&self.s)
    }

    /// Recovery identifier in `0..=3`.
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// `r || s`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.r();
        out.extend_from_slice(&self.s());
        out
    }

    /// Returns `true` when `s ≤ n / 2`.
    pub fn is_low_s(&self) -> bool {
        self.s.is_high() == 0
    }

    /// Replaces `s` by `n − s` when `s > n / 2`, flipping the `R.y` parity
    /// bit of the recovery identifier to match.
    pub fn normalize_s(self) -> Self {
        if self.is_low_s() {
            return self;
        }
        Self {
            r: self.r,
            s: -self.s,
            recovery_id: self.recovery_id ^ 1,
        }
    }
}

/// Decodes a private key: big-endian, order-length, in `[1, n − 1]`.
fn private_scalar<C: WeierstrassCurve>(private: &[u8]) -> Result<C::Scalar> {
    if private.len() != <C::Scalar as Field>::BYTES {
        return Err(Error::length("private key of the curve order length", private.len()));
    }

    match C::Scalar::from_be_bytes(private) {
        Some(d) if d.is_zero() == 0 => Ok(d),
        _ => Err(Error::InvalidScalar),
    }
}

/// `bits2int(hash) mod n`.
fn digest_scalar<C: WeierstrassCurve>(hash: &[u8]) -> C::Scalar {
    let mut le = bits2int(hash, <C::Scalar as Field>::MODULUS_BITS);
    le.reverse();
    C::Scalar::from_le_bytes_reduced(&le)
}

/// `x mod n` for a base-field element, plus whether `x ≥ n`.
fn base_to_scalar<C: WeierstrassCurve>(x: &C::Base) -> (C::Scalar, bool) {
    let mut le = vec![0u8; <C::Base as Field>::BYTES];
    x.write_le_bytes(&mut le);

    let overflow = C::Scalar::from_le_bytes(&le).is_none();
    (C::Scalar::from_le_bytes_reduced(&le), overflow)
}

/// `u1·G + u2·Q`.
fn double_mul<C: WeierstrassCurve>(
    u1: &C::Scalar,
    u2: &C::Scalar,
    q: &AffinePoint<C>,
) -> AffinePoint<C> {
    let g = AffinePoint::<C>::generator().to_projective();
    g.mul(&scalar_bytes::<C>(u1))
        .add(&q.to_projective().mul(&scalar_bytes::<C>(u2)))
        .to_affine()
}

/// Public key `d·G` of a private key.
///
/// # Errors
/// [`Error::InvalidLength`] for a key of the wrong length,
/// [`Error::InvalidScalar`] for a key outside `[1, n − 1]`.
pub fn public_key<C: WeierstrassCurve>(private: &[u8]) -> Result<AffinePoint<C>> {
    private_scalar::<C>(private)?;
    AffinePoint::<C>::generator().multiply(private)
}

/// Signs a message digest with a deterministic RFC 6979 nonce.
///
/// # Arguments
///
/// * `private` - Big-endian private key, as long as the group order
/// * `hash` - The message digest, of any length; it is truncated to the
///   bit length of the order before use
///
/// # Returns
///
/// The signature with its recovery identifier. `s` is returned as
/// computed and may be high; call [`RecoverableSignature::normalize_s`]
/// where a low-S signature is required.
///
/// # Errors
///
/// - [`Error::InvalidLength`] for a key of the wrong length.
/// - [`Error::InvalidScalar`] for a key outside `[1, n − 1]`.
///
/// # Security
///
/// - The nonce depends only on the key and the digest, so equal inputs
///   give equal signatures and no randomness source is needed.
/// - Nonce candidates, the truncated digest and the HMAC state are
///   zeroized after use.
pub fn sign_prehash<C: EcdsaCurve>(private: &[u8], hash: &[u8]) -> Result<RecoverableSignature<C>> {
    let d = private_scalar::<C>(private)?;
    let z = digest_scalar::<C>(hash);

    let mut h1 = scalar_bytes::<C>(&z);
    let mut nonces = NonceGenerator::<C::Digest>::new(private, &h1, <C::Scalar as Field>::MODULUS_BITS);
    h1.zeroize();

    loop {
        let mut k_bytes = nonces.next_candidate();
        let k = match C::Scalar::from_be_bytes(&k_bytes) {
            Some(k) if k.is_zero() == 0 => k,
            _ => {
                tracing::debug!(curve = C::NAME, "nonce candidate out of range, retrying");
                k_bytes.zeroize();
                continue;
            }
        };

        let big_r = AffinePoint::<C>::generator().to_projective().mul(&k_bytes).to_affine();
        k_bytes.zeroize();

        let Some((x, y)) = big_r.coordinates() else {
            continue;
        };

        let (r, overflow) = base_to_scalar::<C>(&x);
        if r.is_zero() == 1 {
            tracing::debug!(curve = C::NAME, "r = 0, retrying with the next nonce");
            continue;
        }

        let s = k.invert()? * (z + r * d);
        if s.is_zero() == 1 {
            tracing::debug!(curve = C::NAME, "s = 0, retrying with the next nonce");
            continue;
        }

        return Ok(RecoverableSignature {
            r,
            s,
            recovery_id: y.is_odd() | (u8::from(overflow) << 1),
        });
    }
}

/// Splits `r || s` into scalars, `None` if either is out of `[1, n − 1]`.
fn parse_signature<C: WeierstrassCurve>(signature: &[u8]) -> Result<Option<(C::Scalar, C::Scalar)>> {
    let len = <C::Scalar as Field>::BYTES;
    if signature.len() != 2 * len {
        return Err(Error::length("ECDSA signature r || s", signature.len()));
    }

    let (r, s) = signature.split_at(len);
    let nonzero = |x: Option<C::Scalar>| x.filter(|x| x.is_zero() == 0);

    Ok(nonzero(C::Scalar::from_be_bytes(r)).zip(nonzero(C::Scalar::from_be_bytes(s))))
}

/// Verifies `r || s` over a message digest.
///
/// # Errors
/// [`Error::InvalidLength`] for a malformed signature,
/// [`Error::InvalidPoint`] for the identity as public key,
/// [`Error::VerificationFailed`] otherwise when the check does not hold
/// (including `r` or `s` outside `[1, n − 1]`).
pub fn verify_prehash<C: WeierstrassCurve>(
    public: &AffinePoint<C>,
    hash: &[u8],
    signature: &[u8],
) -> Result<()> {
    let Some((r, s)) = parse_signature::<C>(signature)? else {
        tracing::trace!(curve = C::NAME, "signature scalar out of range");
        return Err(Error::VerificationFailed);
    };

    if public.is_identity() {
        return Err(Error::InvalidPoint);
    }

    let z = digest_scalar::<C>(hash);
    let w = s.invert()?;

    let point = double_mul(&(z * w), &(r * w), public);
    let valid = point
        .coordinates()
        .is_some_and(|(x, _)| base_to_scalar::<C>(&x).0 == r);

    if !valid {
        tracing::trace!(curve = C::NAME, "ECDSA verification failed");
        return Err(Error::VerificationFailed);
    }

    Ok(())
}

/// Recovers the public key that produced `r || s` over `hash`.
///
/// # Errors
/// [`Error::InvalidParameter`] for a recovery identifier above 3,
/// [`Error::InvalidLength`] for a malformed signature,
/// [`Error::InvalidScalar`] for `r` or `s` outside `[1, n − 1]`,
/// [`Error::InvalidPoint`] when no valid `R` or public key results.
pub fn recover_prehash<C: WeierstrassCurve>(
    hash: &[u8],
    signature: &[u8],
    recovery_id: u8,
) -> Result<AffinePoint<C>> {
    if recovery_id > 3 {
        return Err(Error::InvalidParameter("recovery id must be 0, 1, 2 or 3"));
    }

    let (r, s) = parse_signature::<C>(signature)?.ok_or(Error::InvalidScalar)?;

    // R.x = r, or r + n when the x-coordinate overflowed the order
    let mut x = vec![0u8; <C::Base as Field>::BYTES];
    r.write_le_bytes(&mut x);
    let mut x = C::Base::from_le_bytes(&x).ok_or(Error::InvalidPoint)?;

    if recovery_id & 2 != 0 {
        x = x + C::ORDER_IN_BASE;
        // r + n must not wrap past p
        if !base_to_scalar::<C>(&x).1 {
            tracing::debug!(curve = C::NAME, "r + n is not a valid x-coordinate");
            return Err(Error::InvalidPoint);
        }
    }

    let big_r = AffinePoint::<C>::decompress(&x, recovery_id & 1)?;

    let z = digest_scalar::<C>(hash);
    let r_inv = r.invert()?;
    let q = double_mul(&(-z * r_inv), &(s * r_inv), &big_r);

    if q.is_identity() {
        tracing::debug!(curve = C::NAME, "recovered key is the identity");
        return Err(Error::InvalidPoint);
    }

    Ok(q)
}
