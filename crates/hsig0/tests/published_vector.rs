//! The signed `google.com. DNSKEY` response published with hsd.

mod common;

use common::*;
use hsig0::wire::rcode;
use hsig0::{verify_at, verify_wire, Sig0Error};

#[test]
fn test_vector_verifies_within_window() {
    let verified = verify_at(&published_message(), &node_key(), INCEPTION + 3600).unwrap();
    assert_eq!(verified.inception, INCEPTION);
    assert_eq!(verified.expiration, EXPIRATION);
    assert_eq!(verified.algorithm, 253);
    assert!(verified.signer_name.is_root());
}

#[test]
fn test_vector_from_wire() {
    assert!(verify_wire(&published_wire(), &node_key(), EXPIRATION).is_ok());
}

#[test]
fn test_vector_nxdomain_fails() {
    let mut message = published_message();
    message.header.rcode = rcode::NXDOMAIN;
    assert_eq!(
        verify_at(&message, &node_key(), INCEPTION),
        Err(Sig0Error::BadSignature)
    );
}

#[test]
fn test_vector_without_additional() {
    let mut message = published_message();
    message.additional.clear();
    assert_eq!(
        verify_at(&message, &node_key(), INCEPTION),
        Err(Sig0Error::MissingSignature)
    );
}

#[test]
fn test_vector_boundaries() {
    let message = published_message();
    assert!(verify_at(&message, &node_key(), INCEPTION).is_ok());
    assert!(verify_at(&message, &node_key(), EXPIRATION).is_ok());
    assert!(matches!(
        verify_at(&message, &node_key(), INCEPTION - 1),
        Err(Sig0Error::ExpiredOrNotYetValid { .. })
    ));
    assert!(matches!(
        verify_at(&message, &node_key(), EXPIRATION + 1),
        Err(Sig0Error::ExpiredOrNotYetValid { .. })
    ));
}

#[test]
fn test_vector_repacks_byte_exact() {
    assert_eq!(
        published_message().pack_with(true).unwrap(),
        published_wire()
    );
}

#[test]
fn test_verified_summary_json() {
    let verified = verify_at(&published_message(), &node_key(), INCEPTION).unwrap();
    let json = serde_json::to_string(&verified).unwrap();
    assert!(json.contains("\"signer_name\":\".\""));
    assert!(json.contains("b81b341ab5a2c1c3c4067ec5fdfd2606beec4a0e16a63626312167d9ce0a75de"));
}
