//! Crate-wide error type.
//!
//! Every fallible operation in the crate reports one of the variants below,
//! synchronously, at the point where the violation is detected. No partial
//! result is ever returned alongside an error.

/// Unified error type for field, curve, signature and hash operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input or requested output length lies outside the valid domain.
    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength {
        /// Human-readable description of the accepted length(s).
        expected: &'static str,
        /// The length actually supplied.
        got: usize,
    },

    /// Bytes that do not decode to a point on the curve, or a point that
    /// cannot be represented in the requested (affine) form.
    #[error("invalid point")]
    InvalidPoint,

    /// A private key or nonce that is zero or not below the group order.
    #[error("invalid scalar")]
    InvalidScalar,

    /// An arithmetic operand outside the operation's domain
    /// (e.g. inverting zero).
    #[error("invalid operand")]
    InvalidOperand,

    /// An unsupported parameter value (digest size, output length,
    /// recovery identifier, curve mismatch, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A signature check did not hold.
    #[error("signature verification failed")]
    VerificationFailed,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidLength`] value.
    pub(crate) const fn length(expected: &'static str, got: usize) -> Self {
        Error::InvalidLength { expected, got }
    }
}
