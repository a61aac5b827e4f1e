//! # Node Public Keys
//!
//! Decodes the base-32 node identifiers hsd publishes (e.g.
//! `aj7bjss4ae6hd3kdxzl4f6klirzla377uifxu5mnzczzk2v7p76ek`) into secp256k1
//! verifying keys.
//!
//! ## Format
//!
//! RFC 4648 base-32, lowercase, unpadded, over the 33-byte SEC1 compressed
//! point. Uncompressed 65-byte points are accepted as well. Bits left over
//! in the final symbol are ignored on decode.

use super::errors::Sig0Error;
use data_encoding::{Encoding, BASE32, BASE32_NOPAD};
use k256::ecdsa::VerifyingKey;
use std::fmt;
use std::str::FromStr;

/// A secp256k1 public key. Construction is the only fallible operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a node identifier. Case-insensitive, no padding characters.
    pub fn parse(identifier: &str) -> Result<Self, Sig0Error> {
        let mut text = identifier.to_ascii_uppercase();
        let padding = (8 - text.len() % 8) % 8;
        text.extend(std::iter::repeat('=').take(padding));

        let bytes = decoder()?
            .decode(text.as_bytes())
            .map_err(|e| Sig0Error::InvalidEncoding(e.to_string()))?;
        Self::from_sec1_bytes(&bytes)
    }

    /// Parse a SEC1-encoded point.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, Sig0Error> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(|inner| Self { inner })
            .map_err(|_| Sig0Error::InvalidKey)
    }

    /// The identifier form: lowercase unpadded base-32 of the compressed point.
    pub fn to_identifier(&self) -> String {
        BASE32_NOPAD
            .encode(self.inner.to_encoded_point(true).as_bytes())
            .to_ascii_lowercase()
    }

    /// SEC1 compressed point (33 bytes).
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.inner.to_encoded_point(true).as_bytes().to_vec()
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

/// Standard padded base-32 that ignores non-zero trailing bits.
fn decoder() -> Result<Encoding, Sig0Error> {
    let mut spec = BASE32.specification();
    spec.check_trailing_bits = false;
    spec.encoding().map_err(|e| Sig0Error::InvalidEncoding(e.to_string()))
}

/// Parse a node identifier into a public key.
pub fn parse_public_key(identifier: &str) -> Result<PublicKey, Sig0Error> {
    PublicKey::parse(identifier)
}

impl From<VerifyingKey> for PublicKey {
    fn from(inner: VerifyingKey) -> Self {
        Self { inner }
    }
}

impl FromStr for PublicKey {
    type Err = Sig0Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_identifier())
    }
}
