//! # SIG(0) Digest
//!
//! BLAKE2b-256 over the bytes hsd hashes when signing a response:
//!
//! 1. the SIG rdata up to (not including) the signature,
//! 2. the header with ARCOUNT reduced by one,
//! 3. every section byte preceding the SIG record.

use super::layout::SignedLayout;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use hns_wire::HEADER_SIZE;

/// BLAKE2b with a 256-bit output.
pub type Blake2b256 = Blake2b<U32>;

/// A 32-byte message digest.
pub type Sig0Digest = [u8; 32];

/// Compute the signing digest of `wire`. `layout` must come from
/// [`SignedLayout::locate`] on the same buffer.
pub fn signing_digest(wire: &[u8], layout: &SignedLayout) -> Sig0Digest {
    let mut hasher = Blake2b256::new();
    hasher.update(&wire[layout.sig_start..layout.sig_end]);
    // ID, flags, QDCOUNT, ANCOUNT, NSCOUNT
    hasher.update(&wire[..10]);
    hasher.update(layout.additional_count.saturating_sub(1).to_be_bytes());
    hasher.update(&wire[HEADER_SIZE..layout.body_end]);
    hasher.finalize().into()
}
