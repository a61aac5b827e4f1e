//! Fuzz target for node identifier decoding.

#![no_main]

use hsig0::parse_public_key;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|identifier: &str| {
    if let Ok(key) = parse_public_key(identifier) {
        // Whatever decodes must survive a round trip through its canonical form
        let again = parse_public_key(&key.to_identifier()).expect("canonical identifier");
        assert_eq!(key, again);
    }
});
