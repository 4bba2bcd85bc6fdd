//! EdDSA (RFC 8032) over Ed25519 and Ed448.
//!
//! Signing is deterministic: the nonce is a hash of the secret prefix
//! derived from the seed and the message. Verification is cofactorless,
//! `[S]B = R + [k]A`, and rejects any `S` not below the group order.

mod ed25519;
mod ed448;

use crate::curves::CurveGroup;
use crate::curves::edwards::{AffinePoint, EdwardsCurve};
use crate::error::{Error, Result};
use crate::field::Field;

use zeroize::Zeroize;

/// Longest context string accepted by `dom4`.
pub const MAX_CONTEXT_LEN: usize = 255;

/// Hash and key-expansion rules of one EdDSA instance.
pub trait EddsaCurve: EdwardsCurve {
    /// Seed (private key) length.
    const SEED_BYTES: usize;

    /// `H(dom(context) || parts…)`, `2 · ENCODED_BYTES` bytes long.
    fn hash(context: &[u8], parts: &[&[u8]]) -> Vec<u8>;

    /// `H(seed)` without domain separation, `2 · ENCODED_BYTES` bytes long.
    fn expand(seed: &[u8]) -> Vec<u8>;

    /// Prunes the first half of `H(seed)` into the secret scalar.
    fn clamp(scalar: &mut [u8]);
}

/// The secret scalar, nonce prefix and public key of one seed.
struct ExpandedKey<C: EddsaCurve> {
    scalar: Vec<u8>,
    prefix: Vec<u8>,
    public: AffinePoint<C>,
}

impl<C: EddsaCurve> ExpandedKey<C> {
    fn new(seed: &[u8]) -> Result<Self> {
        if seed.len() != C::SEED_BYTES {
            return Err(Error::length("EdDSA seed", seed.len()));
        }

        let mut h = C::expand(seed);
        let mut scalar = h[..C::ENCODED_BYTES].to_vec();
        let prefix = h[C::ENCODED_BYTES..].to_vec();
        h.zeroize();

        C::clamp(&mut scalar);
        let public = AffinePoint::<C>::generator().to_extended().mul(&scalar).to_affine();

        Ok(Self {
            scalar,
            prefix,
            public,
        })
    }
}

impl<C: EddsaCurve> Drop for ExpandedKey<C> {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

fn check_context(context: &[u8]) -> Result<()> {
    if context.len() > MAX_CONTEXT_LEN {
        return Err(Error::length("EdDSA context of at most 255 bytes", context.len()));
    }
    Ok(())
}

/// Reduces a `2b`-byte hash modulo `L`, returned little-endian.
fn hash_scalar<C: EddsaCurve>(context: &[u8], parts: &[&[u8]]) -> (C::Scalar, Vec<u8>) {
    let x = C::Scalar::from_le_bytes_reduced(&C::hash(context, parts));
    let mut le = vec![0u8; <C::Scalar as Field>::BYTES];
    x.write_le_bytes(&mut le);
    (x, le)
}

/// Public key of a seed.
///
/// # Errors
/// [`Error::InvalidLength`] for a seed of the wrong length.
pub fn public_key<C: EddsaCurve>(seed: &[u8]) -> Result<AffinePoint<C>> {
    Ok(ExpandedKey::<C>::new(seed)?.public)
}

/// Signs `message`; the result is `R || S`, `2 · ENCODED_BYTES` long.
///
/// # Errors
/// [`Error::InvalidLength`] for a seed of the wrong length or an oversized
/// context.
pub fn sign<C: EddsaCurve>(seed: &[u8], message: &[u8], context: &[u8]) -> Result<Vec<u8>> {
    check_context(context)?;
    let key = ExpandedKey::<C>::new(seed)?;
    let public = key.public.compress();

    let (r, mut r_le) = hash_scalar::<C>(context, &[&key.prefix, message]);
    let big_r = AffinePoint::<C>::generator().to_extended().mul(&r_le).to_affine().compress();
    r_le.zeroize();

    let (k, _) = hash_scalar::<C>(context, &[&big_r, &public, message]);
    let a = C::Scalar::from_le_bytes_reduced(&key.scalar);
    let s = r + k * a;

    let mut signature = big_r;
    let mut s_bytes = vec![0u8; C::ENCODED_BYTES];
    s.write_le_bytes(&mut s_bytes[..<C::Scalar as Field>::BYTES]);
    signature.extend_from_slice(&s_bytes);

    Ok(signature)
}

/// Verifies `R || S` over `message`.
///
/// # Errors
/// [`Error::InvalidLength`] for a malformed signature or oversized context,
/// [`Error::VerificationFailed`] when the group equation does not hold,
/// `R` does not decode, or `S` is not below the group order.
pub fn verify<C: EddsaCurve>(
    public: &AffinePoint<C>,
    message: &[u8],
    signature: &[u8],
    context: &[u8],
) -> Result<()> {
    check_context(context)?;
    if signature.len() != 2 * C::ENCODED_BYTES {
        return Err(Error::length("EdDSA signature R || S", signature.len()));
    }

    let (r_bytes, s_bytes) = signature.split_at(C::ENCODED_BYTES);
    let fail = |reason: &'static str| {
        tracing::trace!(curve = C::NAME, reason, "EdDSA verification failed");
        Error::VerificationFailed
    };

    let scalar_len = <C::Scalar as Field>::BYTES;
    if s_bytes[scalar_len..].iter().any(|&b| b != 0)
        || C::Scalar::from_le_bytes(&s_bytes[..scalar_len]).is_none()
    {
        return Err(fail("S is not below the group order"));
    }

    let big_r = AffinePoint::<C>::from_bytes(r_bytes).map_err(|_| fail("R does not decode"))?;
    let (_, k_le) = hash_scalar::<C>(context, &[r_bytes, &public.compress(), message]);

    let lhs = AffinePoint::<C>::generator().to_extended().mul(&s_bytes[..scalar_len]);
    let rhs = big_r.to_extended().add(&public.to_extended().mul(&k_le));

    if lhs.ct_eq_point(&rhs) != 1 {
        return Err(fail("group equation does not hold"));
    }

    Ok(())
}
