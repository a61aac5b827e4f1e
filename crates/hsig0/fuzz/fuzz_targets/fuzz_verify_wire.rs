//! Fuzz target for wire decoding and SIG(0) verification.
//!
//! Arbitrary bytes must never panic the decoder, the section walk or the
//! signature check.

#![no_main]

use hsig0::{verify_wire, FixedClock, PublicKey, Sig0VerificationApi, Sig0VerificationService};
use libfuzzer_sys::fuzz_target;

const NODE_KEY: &str = "aj7bjss4ae6hd3kdxzl4f6klirzla377uifxu5mnzczzk2v7p76ek";

#[derive(Debug, arbitrary::Arbitrary)]
struct WireFuzzInput {
    wire: Vec<u8>,
    now: u32,
}

fuzz_target!(|input: WireFuzzInput| {
    let Ok(key) = NODE_KEY.parse::<PublicKey>() else {
        return;
    };

    let result = verify_wire(&input.wire, &key, input.now);

    // Deterministic for a fixed time
    let service = Sig0VerificationService::new(FixedClock(input.now));
    assert_eq!(result, service.verify_wire(&input.wire, &key));
});
