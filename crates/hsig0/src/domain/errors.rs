//! # SIG(0) Errors
//!
//! Error types for key decoding and message verification.
//! Every variant is terminal; a message that fails any check is unauthenticated.

use thiserror::Error;

/// Errors that can occur while decoding a key or verifying a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Sig0Error {
    /// The key identifier is not valid base-32
    #[error("Invalid base32 key identifier: {0}")]
    InvalidEncoding(String),

    /// The decoded bytes are not a secp256k1 point
    #[error("Invalid secp256k1 public key")]
    InvalidKey,

    /// Re-encoding the message for hashing failed
    #[error("Failed to encode message: {0}")]
    EncodingError(String),

    /// No SIG record in the additional section
    #[error("No SIG record found")]
    MissingSignature,

    /// Key tag, signer name or algorithm is zero / empty
    #[error("Invalid SIG record: key tag, signer name and algorithm must be set")]
    InvalidSignatureRecord,

    /// Algorithm code other than BLAKE2b-256 + secp256k1
    #[error("Unsupported SIG algorithm: {0}")]
    UnsupportedAlgorithm(u8),

    /// Bounds or decompression failure while walking the message
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// Current time outside the signature validity window
    #[error("Signature not valid at {now} (window {inception}..={expiration})")]
    ExpiredOrNotYetValid {
        now: u32,
        inception: u32,
        expiration: u32,
    },

    /// Signer name is not the root
    #[error("Signer name {0} does not match key name")]
    SignerMismatch(String),

    /// ECDSA verification failed
    #[error("Signature verification failed")]
    BadSignature,
}

impl Sig0Error {
    pub(crate) fn malformed(err: impl std::fmt::Display) -> Self {
        Self::MalformedMessage(err.to_string())
    }
}
