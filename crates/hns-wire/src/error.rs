//! # Wire Errors
//!
//! Error types for message decoding and encoding.

use thiserror::Error;

/// Errors raised while packing or unpacking wire-format messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WireError {
    /// A read ran past the end of the buffer
    #[error("buffer truncated at offset {0}")]
    Truncated(usize),

    /// A compression pointer targets a position outside the buffer
    #[error("compression pointer at offset {offset} targets {target}, outside the buffer")]
    BadPointer { offset: usize, target: usize },

    /// Too many pointer hops while decoding one name
    #[error("too many compression pointers")]
    PointerLoop,

    /// Label type 0x40 / 0x80 (reserved, RFC 6891 §5)
    #[error("reserved label type 0x{0:02x}")]
    BadLabelType(u8),

    /// A label longer than 63 octets
    #[error("label exceeds 63 octets")]
    LabelTooLong,

    /// An empty label anywhere but the root
    #[error("empty label")]
    EmptyLabel,

    /// Name longer than 255 octets in wire form
    #[error("domain name exceeds 255 octets")]
    NameTooLong,

    /// Presentation-format name could not be parsed
    #[error("invalid domain name: {0}")]
    InvalidName(String),

    /// The record data did not match its declared length
    #[error("rdata length mismatch for type {rtype}: declared {declared}, consumed {consumed}")]
    RdataLength {
        rtype: u16,
        declared: usize,
        consumed: usize,
    },

    /// Record data too large for the 16-bit length field
    #[error("rdata of {0} octets exceeds 65535")]
    RdataTooLong(usize),

    /// A section with more entries than the 16-bit count allows
    #[error("section holds {0} entries, more than 65535")]
    TooManyRecords(usize),

    /// A header or rdata field is outside its encodable range
    #[error("field {0} out of range")]
    FieldOverflow(&'static str),
}
