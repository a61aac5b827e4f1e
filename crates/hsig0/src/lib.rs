//! # hsig0: SIG(0) Verification for Handshake
//!
//! Authenticates DNS responses from Handshake (hsd) name servers. hsd signs
//! each response with its node key using a SIG(0)-style record: algorithm 253,
//! BLAKE2b-256 over the message, secp256k1 ECDSA over the digest.
//!
//! ## Architecture
//!
//! Hexagonal layout:
//! - **Domain Layer** (`domain/`): key decoding and verification, no I/O
//! - **Ports Layer** (`ports/`): the verification API and the clock it depends on
//! - **Adapters** (`adapters/`): system and fixed clocks
//! - **Service Layer** (`service.rs`): wires the domain to the ports
//!
//! ## Example
//!
//! ```no_run
//! use hsig0::{parse_public_key, verify_wire};
//!
//! # fn main() -> Result<(), hsig0::Sig0Error> {
//! let key = parse_public_key("aj7bjss4ae6hd3kdxzl4f6klirzla377uifxu5mnzczzk2v7p76ek")?;
//! let wire: Vec<u8> = Vec::new(); // a response read from the network
//! let verified = verify_wire(&wire, &key, 1_601_300_000)?;
//! println!("key tag {}", verified.key_tag);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Notes
//!
//! - The validity window is checked with a literal u32 comparison
//! - High-S signatures are accepted (normalized before verification)
//! - Only the root may appear as signer name

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use hns_wire as wire;

// Re-export public API
pub use adapters::{FixedClock, SystemClock};
pub use domain::digest::{signing_digest, Blake2b256, Sig0Digest};
pub use domain::entities::{BatchVerification, VerifiedSig0, BLAKE2B_SECP256K1};
pub use domain::errors::Sig0Error;
pub use domain::key::{parse_public_key, PublicKey};
pub use domain::layout::SignedLayout;
pub use domain::verifier::{verify, verify_at, verify_batch, verify_wire};
pub use ports::inbound::Sig0VerificationApi;
pub use ports::outbound::Clock;
pub use service::Sig0VerificationService;
