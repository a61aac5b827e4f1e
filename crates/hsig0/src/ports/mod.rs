//! # Ports Layer
//!
//! - **Inbound (Driving)**: the verification API callers use
//! - **Outbound (Driven)**: the time source verification depends on

pub mod inbound;
pub mod outbound;
