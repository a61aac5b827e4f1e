//! Decoder robustness against arbitrary input.

use hns_wire::{unpack_name, Message};
use proptest::prelude::*;

proptest! {
    #[test]
    fn unpack_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = Message::unpack(&bytes);
    }

    #[test]
    fn unpack_name_never_panics(
        bytes in proptest::collection::vec(any::<u8>(), 0..300),
        offset in 0usize..320,
    ) {
        if let Ok((_, next)) = unpack_name(&bytes, offset) {
            prop_assert!(next <= bytes.len());
        }
    }

    #[test]
    fn decoded_messages_repack(bytes in proptest::collection::vec(any::<u8>(), 12..256)) {
        if let Ok(msg) = Message::unpack(&bytes) {
            for compress in [false, true] {
                let wire = msg.pack_with(compress).unwrap();
                prop_assert_eq!(Message::unpack(&wire).unwrap(), msg.clone());
            }
        }
    }
}
