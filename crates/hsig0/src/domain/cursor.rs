//! Bounds-checked cursor over an untrusted wire buffer.
//!
//! Every read either stays inside the buffer or fails with
//! [`Sig0Error::MalformedMessage`]; the position never passes the end.

use super::errors::Sig0Error;
use hns_wire::{unpack_name, Name};

#[derive(Debug, Clone)]
pub struct WireCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), Sig0Error> {
        self.take(n).map(|_| ())
    }

    pub fn take(&mut self, n: usize) -> Result<&'a [u8], Sig0Error> {
        let (buf, pos) = (self.buf, self.pos);
        let bytes = pos
            .checked_add(n)
            .and_then(|end| buf.get(pos..end))
            .ok_or_else(|| {
                Sig0Error::MalformedMessage(format!(
                    "read of {} bytes at offset {} overruns {}-byte message",
                    n,
                    pos,
                    buf.len()
                ))
            })?;
        self.pos = pos + n;
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16, Sig0Error> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, Sig0Error> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Decode a possibly-compressed name and move past it.
    pub fn read_name(&mut self) -> Result<Name, Sig0Error> {
        let (name, next) = unpack_name(self.buf, self.pos).map_err(Sig0Error::malformed)?;
        self.pos = next;
        Ok(name)
    }
}
