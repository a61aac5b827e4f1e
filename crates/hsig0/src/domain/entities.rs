//! # Verification Entities
//!
//! Outcome types returned by the verifier.

use super::digest::Sig0Digest;
use super::errors::Sig0Error;
use hns_wire::Name;
use serde::{Deserialize, Serialize};

/// PRIVATEDNS algorithm code, used by hsd for BLAKE2b-256 + secp256k1.
pub const BLAKE2B_SECP256K1: u8 = 253;

/// Summary of a successfully verified SIG(0) record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedSig0 {
    pub key_tag: u16,
    pub algorithm: u8,
    /// Unix seconds
    pub inception: u32,
    /// Unix seconds
    pub expiration: u32,
    pub signer_name: Name,
    /// BLAKE2b-256 of the signed bytes
    #[serde(with = "hex::serde")]
    pub digest: Sig0Digest,
}

/// Per-message results of a batch, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchVerification {
    pub results: Vec<Result<VerifiedSig0, Sig0Error>>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl BatchVerification {
    pub fn from_results(results: Vec<Result<VerifiedSig0, Sig0Error>>) -> Self {
        let valid_count = results.iter().filter(|r| r.is_ok()).count();
        let invalid_count = results.len() - valid_count;
        Self {
            results,
            valid_count,
            invalid_count,
        }
    }

    /// True when every message verified. An empty batch is all valid.
    pub fn all_valid(&self) -> bool {
        self.invalid_count == 0
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verified() -> VerifiedSig0 {
        VerifiedSig0 {
            key_tag: 0x1234,
            algorithm: BLAKE2B_SECP256K1,
            inception: 10,
            expiration: 20,
            signer_name: Name::root(),
            digest: [0xab; 32],
        }
    }

    #[test]
    fn test_batch_counts() {
        let batch = BatchVerification::from_results(vec![
            Ok(verified()),
            Err(Sig0Error::BadSignature),
            Ok(verified()),
        ]);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.valid_count, 2);
        assert_eq!(batch.invalid_count, 1);
        assert!(!batch.all_valid());

        let empty = BatchVerification::from_results(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.all_valid());
    }

    #[test]
    fn test_verified_serializes_digest_as_hex() {
        let json = serde_json::to_value(verified()).unwrap();
        assert_eq!(json["digest"], "ab".repeat(32));
        assert_eq!(json["signer_name"], ".");
        assert_eq!(json["algorithm"], 253);

        let back: VerifiedSig0 = serde_json::from_value(json).unwrap();
        assert_eq!(back, verified());
    }
}
