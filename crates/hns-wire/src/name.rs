//! # Domain Names
//!
//! Wire (de)compression of domain names, RFC 1035 Section 4.1.4.
//!
//! A [`Name`] keeps its labels as raw octets and preserves case, so a name
//! that is decoded and re-encoded produces the same bytes.

use crate::error::WireError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a name in wire form, including the root label.
pub const MAX_NAME_LEN: usize = 255;

/// Upper bound on pointer hops while decoding one name.
pub const MAX_COMPRESSION_POINTERS: usize = (MAX_NAME_LEN + 1) / 2 - 2;

/// Compression pointers carry a 14-bit offset.
pub const MAX_COMPRESSION_OFFSET: usize = 0x3FFF;

/// A fully-qualified domain name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Name {
    labels: Vec<Vec<u8>>,
}

impl Name {
    /// The root name ".".
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a name from raw labels, most specific first.
    pub fn from_labels<I, L>(labels: I) -> Result<Self, WireError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let labels: Vec<Vec<u8>> = labels.into_iter().map(Into::into).collect();
        let mut wire_len = 1;
        for label in &labels {
            if label.is_empty() {
                return Err(WireError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::LabelTooLong);
            }
            wire_len += label.len() + 1;
        }
        if wire_len > MAX_NAME_LEN {
            return Err(WireError::NameTooLong);
        }
        Ok(Self { labels })
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Uncompressed wire form of the labels from `from` to the root.
    pub(crate) fn suffix_wire(&self, from: usize) -> Vec<u8> {
        let mut out = Vec::new();
        for label in &self.labels[from..] {
            out.push(label.len() as u8);
            out.extend_from_slice(label);
        }
        out.push(0);
        out
    }
}

/// Decode a possibly-compressed name starting at `offset`.
///
/// Returns the name and the offset just past it in the original byte
/// stream: after the terminating zero or after the first pointer.
pub fn unpack_name(buf: &[u8], offset: usize) -> Result<(Name, usize), WireError> {
    let mut labels = Vec::new();
    let mut pos = offset;
    let mut resume = None;
    let mut hops = 0;
    let mut wire_len = 1;

    loop {
        let len = *buf.get(pos).ok_or(WireError::Truncated(pos))? as usize;
        match len & 0xC0 {
            0x00 => {
                if len == 0 {
                    pos += 1;
                    break;
                }
                let start = pos + 1;
                let label = buf
                    .get(start..start + len)
                    .ok_or(WireError::Truncated(buf.len()))?;
                wire_len += len + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(WireError::NameTooLong);
                }
                labels.push(label.to_vec());
                pos = start + len;
            }
            0xC0 => {
                let low = *buf.get(pos + 1).ok_or(WireError::Truncated(pos + 1))? as usize;
                let target = ((len & 0x3F) << 8) | low;
                hops += 1;
                if hops > MAX_COMPRESSION_POINTERS {
                    return Err(WireError::PointerLoop);
                }
                if target >= buf.len() {
                    return Err(WireError::BadPointer {
                        offset: pos,
                        target,
                    });
                }
                if resume.is_none() {
                    resume = Some(pos + 2);
                }
                pos = target;
            }
            _ => return Err(WireError::BadLabelType(len as u8)),
        }
    }

    Ok((Name { labels }, resume.unwrap_or(pos)))
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for label in &self.labels {
            for &b in label {
                match b {
                    b'.' | b'\\' | b'"' | b'(' | b')' | b';' | b'@' | b' ' => {
                        write!(f, "\\{}", b as char)?
                    }
                    0x21..=0x7E => write!(f, "{}", b as char)?,
                    _ => write!(f, "\\{:03}", b)?,
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = WireError;

    /// Parse presentation format. The trailing dot is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Self::root());
        }
        if s.is_empty() {
            return Err(WireError::InvalidName("empty name".into()));
        }

        let bytes = s.as_bytes();
        let mut labels = Vec::new();
        let mut current = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => {
                    let rest = &bytes[i + 1..];
                    if rest.len() >= 3 && rest[..3].iter().all(u8::is_ascii_digit) {
                        let value = rest[..3]
                            .iter()
                            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
                        let byte = u8::try_from(value).map_err(|_| {
                            WireError::InvalidName(format!("escape \\{value} out of range"))
                        })?;
                        current.push(byte);
                        i += 4;
                    } else if let Some(&c) = rest.first() {
                        current.push(c);
                        i += 2;
                    } else {
                        return Err(WireError::InvalidName("dangling escape".into()));
                    }
                }
                b'.' => {
                    labels.push(std::mem::take(&mut current));
                    i += 1;
                }
                c => {
                    current.push(c);
                    i += 1;
                }
            }
        }
        if !current.is_empty() {
            labels.push(current);
        }

        Self::from_labels(labels)
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
