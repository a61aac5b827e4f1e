//! # SIG(0) Verifier
//!
//! Checks the trailing SIG record of a decoded message against a node key.
//!
//! ## Pipeline
//!
//! 1. Re-encode the message with name compression forced on
//! 2. Find the first SIG record in the additional section
//! 3. Reject zero key tags / algorithms and non-253 algorithms
//! 4. Walk the canonical buffer to recover the signed byte ranges
//! 5. Check the validity window (inclusive, literal u32 comparison)
//! 6. Require the root as signer
//! 7. Hash, then verify the ECDSA signature over the digest
//!
//! Every failure is terminal.

use super::digest::{signing_digest, Sig0Digest};
use super::entities::{BatchVerification, VerifiedSig0, BLAKE2B_SECP256K1};
use super::errors::Sig0Error;
use super::key::PublicKey;
use super::layout::SignedLayout;
use crate::adapters::SystemClock;
use crate::ports::outbound::Clock;
use hns_wire::{Message, RData, Sig};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::Signature;
use k256::elliptic_curve::ops::Reduce;
use k256::{FieldBytes, Scalar, U256};
use rayon::prelude::*;

/// Largest signature accepted: two 32-byte scalars.
const MAX_SIGNATURE_LEN: usize = 64;

/// Verify `message` against `key` at Unix time `now`.
pub fn verify_at(message: &Message, key: &PublicKey, now: u32) -> Result<VerifiedSig0, Sig0Error> {
    let wire = message
        .pack_with(true)
        .map_err(|e| Sig0Error::EncodingError(e.to_string()))?;

    let sig = find_sig(message).ok_or(Sig0Error::MissingSignature)?;
    if sig.key_tag == 0 || sig.algorithm == 0 {
        return Err(Sig0Error::InvalidSignatureRecord);
    }
    if sig.algorithm != BLAKE2B_SECP256K1 {
        return Err(Sig0Error::UnsupportedAlgorithm(sig.algorithm));
    }

    let layout = SignedLayout::locate(&wire)?;

    if now < layout.inception || now > layout.expiration {
        return Err(Sig0Error::ExpiredOrNotYetValid {
            now,
            inception: layout.inception,
            expiration: layout.expiration,
        });
    }

    if !layout.signer.is_root() {
        return Err(Sig0Error::SignerMismatch(layout.signer.to_string()));
    }

    let digest = signing_digest(&wire, &layout);
    tracing::trace!(digest = %hex::encode(digest), "computed SIG(0) digest");

    check_signature(key, &digest, &wire[layout.sig_end..layout.rdata_end])?;

    Ok(VerifiedSig0 {
        key_tag: sig.key_tag,
        algorithm: sig.algorithm,
        inception: layout.inception,
        expiration: layout.expiration,
        signer_name: layout.signer,
        digest,
    })
}

/// Verify `message` against `key` at the current system time.
pub fn verify(message: &Message, key: &PublicKey) -> Result<VerifiedSig0, Sig0Error> {
    verify_at(message, key, SystemClock.unix_now())
}

/// Decode a wire-format message and verify it at `now`.
pub fn verify_wire(wire: &[u8], key: &PublicKey, now: u32) -> Result<VerifiedSig0, Sig0Error> {
    let message = Message::unpack(wire).map_err(Sig0Error::malformed)?;
    verify_at(&message, key, now)
}

/// Verify independent messages in parallel. Results keep input order.
pub fn verify_batch(messages: &[Message], key: &PublicKey, now: u32) -> BatchVerification {
    let results = messages
        .par_iter()
        .map(|message| verify_at(message, key, now))
        .collect();
    BatchVerification::from_results(results)
}

fn find_sig(message: &Message) -> Option<&Sig> {
    message.additional.iter().find_map(|record| match &record.rdata {
        RData::Sig(sig) => Some(sig),
        _ => None,
    })
}

fn check_signature(key: &PublicKey, digest: &Sig0Digest, raw: &[u8]) -> Result<(), Sig0Error> {
    let signature = decode_signature(raw)?;
    key.verifying_key()
        .verify_prehash(digest, &signature)
        .map_err(|_| Sig0Error::BadSignature)
}

/// Split `raw` into `r || s`, reduce each half mod n and build a low-S signature.
fn decode_signature(raw: &[u8]) -> Result<Signature, Sig0Error> {
    if raw.is_empty() || raw.len() % 2 != 0 || raw.len() > MAX_SIGNATURE_LEN {
        return Err(Sig0Error::BadSignature);
    }
    let (r, s) = raw.split_at(raw.len() / 2);
    let signature = Signature::from_scalars(reduce_scalar(r), reduce_scalar(s))
        .map_err(|_| Sig0Error::BadSignature)?;
    Ok(signature.normalize_s().unwrap_or(signature))
}

/// Big-endian integer of at most 32 bytes, reduced mod n.
fn reduce_scalar(half: &[u8]) -> FieldBytes {
    let mut bytes = FieldBytes::default();
    bytes[32 - half.len()..].copy_from_slice(half);
    <Scalar as Reduce<U256>>::reduce_bytes(&bytes).to_bytes()
}
