//! # SIG(0) Verification Service
//!
//! Application service implementing [`Sig0VerificationApi`]. Reads the time
//! from the [`Clock`] port once per call and delegates to the domain verifier.

use crate::domain::entities::{BatchVerification, VerifiedSig0};
use crate::domain::errors::Sig0Error;
use crate::domain::key::PublicKey;
use crate::domain::verifier;
use crate::ports::inbound::Sig0VerificationApi;
use crate::ports::outbound::Clock;
use hns_wire::Message;

/// SIG(0) verification service.
#[derive(Clone, Debug, Default)]
pub struct Sig0VerificationService<C: Clock> {
    clock: C,
}

impl<C: Clock> Sig0VerificationService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn log_outcome(result: &Result<VerifiedSig0, Sig0Error>, now: u32) {
    match result {
        Ok(verified) => tracing::debug!(
            key_tag = verified.key_tag,
            now,
            "SIG(0) verified"
        ),
        Err(error) => tracing::debug!(%error, now, "SIG(0) verification failed"),
    }
}

impl<C: Clock> Sig0VerificationApi for Sig0VerificationService<C> {
    fn verify(&self, message: &Message, key: &PublicKey) -> Result<VerifiedSig0, Sig0Error> {
        let now = self.clock.unix_now();
        let result = verifier::verify_at(message, key, now);
        log_outcome(&result, now);
        result
    }

    fn verify_wire(&self, wire: &[u8], key: &PublicKey) -> Result<VerifiedSig0, Sig0Error> {
        let now = self.clock.unix_now();
        let result = verifier::verify_wire(wire, key, now);
        log_outcome(&result, now);
        result
    }

    fn verify_batch(&self, messages: &[Message], key: &PublicKey) -> BatchVerification {
        let now = self.clock.unix_now();
        let batch = verifier::verify_batch(messages, key, now);
        tracing::debug!(
            valid = batch.valid_count,
            invalid = batch.invalid_count,
            now,
            "SIG(0) batch verified"
        );
        batch
    }
}
