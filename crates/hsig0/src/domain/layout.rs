//! # Signed Layout
//!
//! Recovers the byte ranges the SIG(0) digest covers by replaying the wire
//! format of the canonical (compressed) message.
//!
//! ```text
//!  0        10  12                       body_end      sig_start       sig_end    rdata_end
//!  | header | AR |  QD + AN + NS + AR-1  | owner ... rdlen | fixed + signer | signature |
//! ```
//!
//! The walk assumes the SIG record is the last record of the message.

use super::cursor::WireCursor;
use super::errors::Sig0Error;
use hns_wire::{Name, HEADER_SIZE, SIG_FIXED_LEN};

/// Type covered, algorithm, labels, original TTL.
const SIG_PREFIX_LEN: usize = 2 + 1 + 1 + 4;

/// Offsets and fields recovered from the canonical buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedLayout {
    /// ARCOUNT as packed, including the SIG record
    pub additional_count: u16,
    /// First byte of the SIG record (its owner name)
    pub body_end: usize,
    /// First byte of the SIG rdata (type covered)
    pub sig_start: usize,
    /// First byte of the signature itself
    pub sig_end: usize,
    /// One past the last byte of the SIG rdata
    pub rdata_end: usize,
    pub expiration: u32,
    pub inception: u32,
    pub signer: Name,
}

impl SignedLayout {
    /// Walk `wire` up to and through the trailing SIG record.
    pub fn locate(wire: &[u8]) -> Result<Self, Sig0Error> {
        let mut cursor = WireCursor::new(wire, 4);
        let qdcount = cursor.read_u16()?;
        let ancount = cursor.read_u16()?;
        let nscount = cursor.read_u16()?;
        let additional_count = cursor.read_u16()?;
        debug_assert_eq!(cursor.position(), HEADER_SIZE);

        for _ in 0..qdcount {
            cursor.read_name()?;
            // type, class
            cursor.skip(2 + 2)?;
        }

        // every record except the trailing SIG
        let records = (u32::from(ancount) + u32::from(nscount) + u32::from(additional_count))
            .saturating_sub(1);
        for _ in 0..records {
            cursor.read_name()?;
            // type, class, ttl
            cursor.skip(2 + 2 + 4)?;
            let rdlength = cursor.read_u16()?;
            cursor.skip(rdlength as usize)?;
        }
        let body_end = cursor.position();

        // SIG owner name, normally the root
        cursor.read_name()?;
        cursor.skip(2 + 2 + 4)?;
        let rdlength = cursor.read_u16()? as usize;
        let sig_start = cursor.position();
        if rdlength > cursor.remaining() {
            return Err(Sig0Error::MalformedMessage(format!(
                "SIG rdata of {} bytes at offset {} overruns {}-byte message",
                rdlength,
                sig_start,
                wire.len()
            )));
        }
        let rdata_end = sig_start + rdlength;

        cursor.skip(SIG_PREFIX_LEN)?;
        let expiration = cursor.read_u32()?;
        let inception = cursor.read_u32()?;
        // key tag
        cursor.skip(2)?;
        debug_assert_eq!(cursor.position(), sig_start + SIG_FIXED_LEN);
        let signer = cursor.read_name()?;
        let sig_end = cursor.position();
        if sig_end > rdata_end {
            return Err(Sig0Error::MalformedMessage(format!(
                "SIG signer name ends at {sig_end}, past the rdata end {rdata_end}"
            )));
        }

        tracing::trace!(
            body_end,
            sig_start,
            sig_end,
            rdata_end,
            "located SIG record"
        );

        Ok(Self {
            additional_count,
            body_end,
            sig_start,
            sig_end,
            rdata_end,
            expiration,
            inception,
            signer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_vectors::SIGNED_RESPONSE;

    fn wire() -> Vec<u8> {
        hex::decode(SIGNED_RESPONSE).unwrap()
    }

    #[test]
    fn test_locate_signed_response() {
        let layout = SignedLayout::locate(&wire()).unwrap();
        assert_eq!(layout.additional_count, 2);
        assert_eq!(layout.body_end, 89);
        assert_eq!(layout.sig_start, 100);
        assert_eq!(layout.sig_end, 119);
        assert_eq!(layout.rdata_end, wire().len());
        assert_eq!(layout.expiration, 0x5f727e8a);
        assert_eq!(layout.inception, 0x5f71d5ca);
        assert!(layout.signer.is_root());
    }

    #[test]
    fn test_truncated_buffers_are_malformed() {
        let wire = wire();
        // cuts inside the header, each section, and the SIG framing
        for cut in [3, 11, 20, 30, 75, 88, 95, 110, 118] {
            assert!(
                matches!(
                    SignedLayout::locate(&wire[..cut]),
                    Err(Sig0Error::MalformedMessage(_))
                ),
                "cut at {cut}"
            );
        }
    }

    #[test]
    fn test_sig_rdlength_overrun() {
        let mut wire = wire();
        // SIG rdlength sits just before sig_start
        wire[98] = 0x01;
        assert!(matches!(
            SignedLayout::locate(&wire),
            Err(Sig0Error::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_forward_pointer_loop_is_malformed() {
        let mut wire = wire();
        // point the first authority owner name at itself
        wire[28] = 0xC0;
        wire[29] = 28;
        assert!(matches!(
            SignedLayout::locate(&wire),
            Err(Sig0Error::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_signer_overrunning_rdata() {
        let mut wire = wire();
        // shrink the SIG rdlength to end inside the signer name
        wire[98] = 0x00;
        wire[99] = 18;
        wire.truncate(100 + 18 + 1);
        assert!(matches!(
            SignedLayout::locate(&wire),
            Err(Sig0Error::MalformedMessage(_))
        ));
    }
}
