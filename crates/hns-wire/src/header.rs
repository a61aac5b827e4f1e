//! # Message Header
//!
//! The fixed 12-byte header: ID, flags and four section counts.
//! Counts are not stored; they are derived from the section lengths.

use crate::error::WireError;
use serde::{Deserialize, Serialize};

/// Size of the fixed header in octets.
pub const HEADER_SIZE: usize = 12;

/// Response codes (RFC 1035 Section 4.1.1).
pub mod rcode {
    pub const NOERROR: u8 = 0;
    pub const FORMERR: u8 = 1;
    pub const SERVFAIL: u8 = 2;
    pub const NXDOMAIN: u8 = 3;
    pub const NOTIMP: u8 = 4;
    pub const REFUSED: u8 = 5;
}

/// Decoded header flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub id: u16,
    pub response: bool,
    /// 4-bit operation code
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub zero: bool,
    pub authenticated_data: bool,
    pub checking_disabled: bool,
    /// 4-bit response code; extended bits live in OPT
    pub rcode: u8,
}

impl Header {
    /// Decode the flag word.
    pub fn from_flags(id: u16, flags: u16) -> Self {
        Self {
            id,
            response: flags & 0x8000 != 0,
            opcode: ((flags >> 11) & 0x0F) as u8,
            authoritative: flags & 0x0400 != 0,
            truncated: flags & 0x0200 != 0,
            recursion_desired: flags & 0x0100 != 0,
            recursion_available: flags & 0x0080 != 0,
            zero: flags & 0x0040 != 0,
            authenticated_data: flags & 0x0020 != 0,
            checking_disabled: flags & 0x0010 != 0,
            rcode: (flags & 0x000F) as u8,
        }
    }

    /// Encode the flag word.
    pub fn flags(&self) -> Result<u16, WireError> {
        if self.opcode > 0x0F {
            return Err(WireError::FieldOverflow("opcode"));
        }
        if self.rcode > 0x0F {
            return Err(WireError::FieldOverflow("rcode"));
        }

        let mut flags = (u16::from(self.opcode) << 11) | u16::from(self.rcode);
        for (set, bit) in [
            (self.response, 0x8000),
            (self.authoritative, 0x0400),
            (self.truncated, 0x0200),
            (self.recursion_desired, 0x0100),
            (self.recursion_available, 0x0080),
            (self.zero, 0x0040),
            (self.authenticated_data, 0x0020),
            (self.checking_disabled, 0x0010),
        ] {
            if set {
                flags |= bit;
            }
        }
        Ok(flags)
    }
}
