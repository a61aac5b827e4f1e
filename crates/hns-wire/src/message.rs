//! # Messages
//!
//! Whole-message pack/unpack. Section counts in the header are derived from
//! the section vectors, never stored separately.

use crate::codec::{Packer, Reader};
use crate::error::WireError;
use crate::header::{Header, HEADER_SIZE};
use crate::name::Name;
use crate::rdata::{RData, RecordType};
use serde::{Deserialize, Serialize};

/// An entry of the question section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub name: Name,
    pub qtype: RecordType,
    pub qclass: u16,
}

/// A resource record. The type is carried by the rdata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub class: u16,
    pub ttl: u32,
    pub rdata: RData,
}

impl Record {
    pub fn rtype(&self) -> RecordType {
        self.rdata.record_type()
    }

    fn unpack(r: &mut Reader<'_>, buf: &[u8]) -> Result<Self, WireError> {
        let name = r.name()?;
        let rtype = RecordType(r.u16()?);
        let class = r.u16()?;
        let ttl = r.u32()?;
        let rdlength = r.u16()? as usize;
        let start = r.pos();
        let end = start + rdlength;
        if end > buf.len() {
            return Err(WireError::Truncated(buf.len()));
        }
        let rdata = RData::unpack(rtype, buf, start, end)?;
        r.take(rdlength)?;
        Ok(Self {
            name,
            class,
            ttl,
            rdata,
        })
    }

    fn pack(&self, p: &mut Packer) -> Result<(), WireError> {
        p.name(&self.name, true);
        p.u16(self.rtype().0);
        p.u16(self.class);
        p.u32(self.ttl);
        let mark = p.begin_rdata();
        self.rdata.pack(p)?;
        p.end_rdata(mark)
    }
}

/// A decoded message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
    /// Default for [`Message::pack`]; unpacked messages start with `false`.
    pub compress: bool,
}

impl Message {
    /// Decode a wire-format message.
    ///
    /// Bytes after the last counted record are ignored.
    pub fn unpack(buf: &[u8]) -> Result<Self, WireError> {
        let mut r = Reader::new(buf, 0);
        let id = r.u16()?;
        let flags = r.u16()?;
        let qdcount = r.u16()?;
        let ancount = r.u16()?;
        let nscount = r.u16()?;
        let arcount = r.u16()?;
        debug_assert_eq!(r.pos(), HEADER_SIZE);

        let questions = (0..qdcount)
            .map(|_| -> Result<Question, WireError> {
                Ok(Question {
                    name: r.name()?,
                    qtype: RecordType(r.u16()?),
                    qclass: r.u16()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut section = |count: u16| -> Result<Vec<Record>, WireError> {
            (0..count).map(|_| Record::unpack(&mut r, buf)).collect()
        };
        let answers = section(ancount)?;
        let authority = section(nscount)?;
        let additional = section(arcount)?;

        if r.pos() < buf.len() {
            tracing::trace!(
                trailing = buf.len() - r.pos(),
                "ignoring bytes after the last record"
            );
        }

        Ok(Self {
            header: Header::from_flags(id, flags),
            questions,
            answers,
            authority,
            additional,
            compress: false,
        })
    }

    /// Encode using the message's own `compress` flag.
    pub fn pack(&self) -> Result<Vec<u8>, WireError> {
        self.pack_with(self.compress)
    }

    /// Encode with name compression forced on or off.
    pub fn pack_with(&self, compress: bool) -> Result<Vec<u8>, WireError> {
        let mut p = Packer::new(compress);
        p.u16(self.header.id);
        p.u16(self.header.flags()?);
        for count in [
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional.len(),
        ] {
            p.u16(u16::try_from(count).map_err(|_| WireError::TooManyRecords(count))?);
        }

        for q in &self.questions {
            p.name(&q.name, true);
            p.u16(q.qtype.0);
            p.u16(q.qclass);
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            record.pack(&mut p)?;
        }

        Ok(p.finish())
    }
}
