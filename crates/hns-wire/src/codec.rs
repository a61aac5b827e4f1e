//! Low-level reader and writer shared by the section codecs.

use crate::error::WireError;
use crate::name::{unpack_name, Name, MAX_COMPRESSION_OFFSET};
use std::collections::HashMap;

/// Bounds-checked big-endian reader over a whole message.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos.checked_add(n).ok_or(WireError::Truncated(self.pos))?;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(WireError::Truncated(self.buf.len()))?;
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn u16(&mut self) -> Result<u16, WireError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub(crate) fn u32(&mut self) -> Result<u32, WireError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn name(&mut self) -> Result<Name, WireError> {
        let (name, next) = unpack_name(self.buf, self.pos)?;
        self.pos = next;
        Ok(name)
    }
}

/// Message writer with an optional compression table.
///
/// The table maps the uncompressed wire form of every name suffix written so
/// far to its offset. Matching is exact, so case is preserved.
pub(crate) struct Packer {
    buf: Vec<u8>,
    compression: Option<HashMap<Vec<u8>, u16>>,
}

impl Packer {
    pub(crate) fn new(compress: bool) -> Self {
        Self {
            buf: Vec::with_capacity(512),
            compression: compress.then(HashMap::new),
        }
    }

    pub(crate) fn u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub(crate) fn u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub(crate) fn u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub(crate) fn bytes(&mut self, v: &[u8]) {
        self.buf.extend_from_slice(v);
    }

    /// Write a name, reusing an earlier suffix when `compressible` is set
    /// and the packer was created with compression on.
    pub(crate) fn name(&mut self, name: &Name, compressible: bool) {
        for (i, label) in name.labels().iter().enumerate() {
            if compressible {
                if let Some(table) = self.compression.as_mut() {
                    let suffix = name.suffix_wire(i);
                    if let Some(&offset) = table.get(&suffix) {
                        self.buf.extend_from_slice(&(0xC000 | offset).to_be_bytes());
                        return;
                    }
                    if self.buf.len() <= MAX_COMPRESSION_OFFSET {
                        table.insert(suffix, self.buf.len() as u16);
                    }
                }
            }
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label);
        }
        self.buf.push(0);
    }

    /// Reserve the rdlength field; returns the marker for [`Self::end_rdata`].
    pub(crate) fn begin_rdata(&mut self) -> usize {
        self.u16(0);
        self.buf.len()
    }

    pub(crate) fn end_rdata(&mut self, mark: usize) -> Result<(), WireError> {
        let len = self.buf.len() - mark;
        let len16 = u16::try_from(len).map_err(|_| WireError::RdataTooLong(len))?;
        self.buf[mark - 2..mark].copy_from_slice(&len16.to_be_bytes());
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.buf
    }
}
