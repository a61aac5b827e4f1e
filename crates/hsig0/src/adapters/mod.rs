//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod clock;

pub use clock::{FixedClock, SystemClock};
