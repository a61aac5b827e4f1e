//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::{BatchVerification, VerifiedSig0};
use crate::domain::errors::Sig0Error;
use crate::domain::key::PublicKey;
use hns_wire::Message;

/// SIG(0) verification API.
///
/// Implementations read the current time themselves and must be `Send + Sync`.
pub trait Sig0VerificationApi: Send + Sync {
    /// Verify a decoded message against `key`.
    fn verify(&self, message: &Message, key: &PublicKey) -> Result<VerifiedSig0, Sig0Error>;

    /// Decode a wire-format message and verify it.
    ///
    /// Decoding failures are reported as [`Sig0Error::MalformedMessage`].
    fn verify_wire(&self, wire: &[u8], key: &PublicKey) -> Result<VerifiedSig0, Sig0Error>;

    /// Verify independent messages in parallel, all against the same instant.
    fn verify_batch(&self, messages: &[Message], key: &PublicKey) -> BatchVerification;
}
