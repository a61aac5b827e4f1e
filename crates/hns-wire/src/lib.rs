//! # HNS Wire
//!
//! DNS wire-format codec for Handshake name-server traffic.
//!
//! ## Scope
//!
//! - **Messages** (`message`): header plus the four sections, `unpack` / `pack_with`
//! - **Names** (`name`): case-preserving labels, RFC 1035 compression
//! - **Record data** (`rdata`): typed rdata for the types hsd answers with,
//!   everything else kept verbatim
//!
//! Re-packing a decoded message with compression on reproduces the bytes a
//! compressing encoder emitted, which signature checks over the wire form
//! depend on.

mod codec;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod rdata;

// Re-export public API
pub use error::WireError;
pub use header::{rcode, Header, HEADER_SIZE};
pub use message::{Message, Question, Record};
pub use name::{unpack_name, Name};
pub use rdata::{class, EdnsOption, RData, RecordType, Sig, Soa, SIG_FIXED_LEN};
