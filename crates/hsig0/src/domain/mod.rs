//! # Domain Layer
//!
//! Key decoding and SIG(0) verification. Pure functions over byte buffers;
//! the only clock read is in [`verifier::verify`].

pub mod cursor;
pub mod digest;
pub mod entities;
pub mod errors;
pub mod key;
pub mod layout;
pub mod verifier;

#[cfg(test)]
pub(crate) mod test_vectors;
