//! # Record Data
//!
//! Typed rdata for the record types a name-server response carries.
//! Anything else is kept verbatim as [`RData::Unknown`], which is safe for
//! re-packing because only the types decoded here may contain compressed names.

use crate::codec::{Packer, Reader};
use crate::error::WireError;
use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Record type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordType(pub u16);

impl RecordType {
    pub const A: Self = Self(1);
    pub const NS: Self = Self(2);
    pub const CNAME: Self = Self(5);
    pub const SOA: Self = Self(6);
    pub const PTR: Self = Self(12);
    pub const MX: Self = Self(15);
    pub const TXT: Self = Self(16);
    pub const SIG: Self = Self(24);
    pub const AAAA: Self = Self(28);
    pub const DS: Self = Self(43);
    pub const OPT: Self = Self(41);
    pub const RRSIG: Self = Self(46);
    pub const DNSKEY: Self = Self(48);
    pub const ANY: Self = Self(255);

    fn mnemonic(self) -> Option<&'static str> {
        Some(match self {
            Self::A => "A",
            Self::NS => "NS",
            Self::CNAME => "CNAME",
            Self::SOA => "SOA",
            Self::PTR => "PTR",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::SIG => "SIG",
            Self::AAAA => "AAAA",
            Self::DS => "DS",
            Self::OPT => "OPT",
            Self::RRSIG => "RRSIG",
            Self::DNSKEY => "DNSKEY",
            Self::ANY => "ANY",
            _ => return None,
        })
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(m) => f.write_str(m),
            None => write!(f, "TYPE{}", self.0),
        }
    }
}

/// Class codes.
pub mod class {
    pub const INET: u16 = 1;
    pub const ANY: u16 = 255;
}

/// Start of authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soa {
    pub mname: Name,
    pub rname: Name,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

/// A single EDNS(0) option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdnsOption {
    pub code: u16,
    pub data: Vec<u8>,
}

/// SIG record data (RFC 2535 Section 4.1, RFC 2931).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sig {
    pub type_covered: u16,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    /// Unix seconds
    pub expiration: u32,
    /// Unix seconds
    pub inception: u32,
    pub key_tag: u16,
    pub signer_name: Name,
    pub signature: Vec<u8>,
}

/// Size of the SIG fields preceding the signer name.
pub const SIG_FIXED_LEN: usize = 18;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(Name),
    Cname(Name),
    Ptr(Name),
    Mx { preference: u16, exchange: Name },
    Soa(Soa),
    Txt(Vec<Vec<u8>>),
    Opt(Vec<EdnsOption>),
    Sig(Sig),
    Unknown { rtype: RecordType, data: Vec<u8> },
}

impl RData {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::A,
            Self::Aaaa(_) => RecordType::AAAA,
            Self::Ns(_) => RecordType::NS,
            Self::Cname(_) => RecordType::CNAME,
            Self::Ptr(_) => RecordType::PTR,
            Self::Mx { .. } => RecordType::MX,
            Self::Soa(_) => RecordType::SOA,
            Self::Txt(_) => RecordType::TXT,
            Self::Opt(_) => RecordType::OPT,
            Self::Sig(_) => RecordType::SIG,
            Self::Unknown { rtype, .. } => *rtype,
        }
    }

    /// Decode the rdata occupying `buf[start..end]`.
    ///
    /// Names are resolved against the whole buffer so pointers into earlier
    /// sections work.
    pub(crate) fn unpack(
        rtype: RecordType,
        buf: &[u8],
        start: usize,
        end: usize,
    ) -> Result<Self, WireError> {
        // Empty rdata is legal for any type (RFC 2136 updates use it).
        if start == end && rtype != RecordType::OPT {
            return Ok(Self::Unknown {
                rtype,
                data: Vec::new(),
            });
        }

        let mut r = Reader::new(buf, start);
        let rdata = match rtype {
            RecordType::A => {
                let b = r.take(4)?;
                Self::A(Ipv4Addr::new(b[0], b[1], b[2], b[3]))
            }
            RecordType::AAAA => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(r.take(16)?);
                Self::Aaaa(Ipv6Addr::from(octets))
            }
            RecordType::NS => Self::Ns(r.name()?),
            RecordType::CNAME => Self::Cname(r.name()?),
            RecordType::PTR => Self::Ptr(r.name()?),
            RecordType::MX => Self::Mx {
                preference: r.u16()?,
                exchange: r.name()?,
            },
            RecordType::SOA => Self::Soa(Soa {
                mname: r.name()?,
                rname: r.name()?,
                serial: r.u32()?,
                refresh: r.u32()?,
                retry: r.u32()?,
                expire: r.u32()?,
                minimum: r.u32()?,
            }),
            RecordType::TXT => {
                let mut strings = Vec::new();
                while r.pos() < end {
                    let len = r.u8()? as usize;
                    strings.push(r.take(len)?.to_vec());
                }
                Self::Txt(strings)
            }
            RecordType::OPT => {
                let mut options = Vec::new();
                while r.pos() < end {
                    let code = r.u16()?;
                    let len = r.u16()? as usize;
                    options.push(EdnsOption {
                        code,
                        data: r.take(len)?.to_vec(),
                    });
                }
                Self::Opt(options)
            }
            RecordType::SIG => {
                let type_covered = r.u16()?;
                let algorithm = r.u8()?;
                let labels = r.u8()?;
                let original_ttl = r.u32()?;
                let expiration = r.u32()?;
                let inception = r.u32()?;
                let key_tag = r.u16()?;
                let signer_name = r.name()?;
                let signature = buf
                    .get(r.pos()..end)
                    .ok_or(WireError::RdataLength {
                        rtype: rtype.0,
                        declared: end - start,
                        consumed: r.pos() - start,
                    })?
                    .to_vec();
                r.take(signature.len())?;
                Self::Sig(Sig {
                    type_covered,
                    algorithm,
                    labels,
                    original_ttl,
                    expiration,
                    inception,
                    key_tag,
                    signer_name,
                    signature,
                })
            }
            _ => Self::Unknown {
                rtype,
                data: r.take(end - start)?.to_vec(),
            },
        };

        if r.pos() != end {
            return Err(WireError::RdataLength {
                rtype: rtype.0,
                declared: end - start,
                consumed: r.pos().saturating_sub(start),
            });
        }
        Ok(rdata)
    }

    /// Encode the rdata only; the caller frames it with the rdlength.
    pub(crate) fn pack(&self, p: &mut Packer) -> Result<(), WireError> {
        match self {
            Self::A(addr) => p.bytes(&addr.octets()),
            Self::Aaaa(addr) => p.bytes(&addr.octets()),
            Self::Ns(name) | Self::Cname(name) | Self::Ptr(name) => p.name(name, true),
            Self::Mx {
                preference,
                exchange,
            } => {
                p.u16(*preference);
                p.name(exchange, true);
            }
            Self::Soa(soa) => {
                p.name(&soa.mname, true);
                p.name(&soa.rname, true);
                p.u32(soa.serial);
                p.u32(soa.refresh);
                p.u32(soa.retry);
                p.u32(soa.expire);
                p.u32(soa.minimum);
            }
            Self::Txt(strings) => {
                for s in strings {
                    let len = u8::try_from(s.len())
                        .map_err(|_| WireError::FieldOverflow("txt string"))?;
                    p.u8(len);
                    p.bytes(s);
                }
            }
            Self::Opt(options) => {
                for option in options {
                    let len = u16::try_from(option.data.len())
                        .map_err(|_| WireError::FieldOverflow("edns option"))?;
                    p.u16(option.code);
                    p.u16(len);
                    p.bytes(&option.data);
                }
            }
            Self::Sig(sig) => {
                p.u16(sig.type_covered);
                p.u8(sig.algorithm);
                p.u8(sig.labels);
                p.u32(sig.original_ttl);
                p.u32(sig.expiration);
                p.u32(sig.inception);
                p.u16(sig.key_tag);
                // never compressed (RFC 3597 Section 4)
                p.name(&sig.signer_name, false);
                p.bytes(&sig.signature);
            }
            Self::Unknown { data, .. } => p.bytes(data),
        }
        Ok(())
    }
}
