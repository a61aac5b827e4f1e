//! # Outbound Ports (Driven Ports / SPI)

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch, truncated to 32 bits.
    fn unix_now(&self) -> u32;
}
