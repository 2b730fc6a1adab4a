use crate::{Result, TlvError};
use iso7816_tlv::ber;
use std::fmt;

/// Maximum number of bytes following a `0x1F` first tag byte.
const MAX_SUBSEQUENT_TAG_BYTES: usize = 2;

/// A BER-TLV tag of one to three bytes.
///
/// Tags are stored as they appear on the wire, packed big-endian: the two-byte
/// tag `7F 21` is `Tag::new(0x7F21)`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag(u32);

impl Tag {
    pub const BOOLEAN: Self = Tag(0x01);
    pub const INTEGER: Self = Tag(0x02);
    pub const BIT_STRING: Self = Tag(0x03);
    pub const OCTET_STRING: Self = Tag(0x04);
    pub const NULL: Self = Tag(0x05);
    pub const OID: Self = Tag(0x06);
    pub const UTF8_STRING: Self = Tag(0x0C);
    pub const PRINTABLE_STRING: Self = Tag(0x13);
    pub const SEQUENCE: Self = Tag(0x30);
    pub const SET: Self = Tag(0x31);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        Tag(raw)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Number of bytes the tag occupies on the wire.
    #[inline]
    pub const fn encoded_len(self) -> usize {
        if self.0 > 0xFFFF {
            3
        } else if self.0 > 0xFF {
            2
        } else {
            1
        }
    }

    #[inline]
    pub const fn first_byte(self) -> u8 {
        (self.0 >> (8 * (self.encoded_len() - 1))) as u8
    }

    #[inline]
    pub const fn is_constructed(self) -> bool {
        self.first_byte() & 0x20 != 0
    }

    #[inline]
    pub const fn is_application(self) -> bool {
        self.first_byte() & 0xC0 == 0x40
    }

    #[inline]
    pub const fn is_context_specific(self) -> bool {
        self.first_byte() & 0xC0 == 0x80
    }

    /// Reads the tag at the start of `bytes` and returns it with its encoded length.
    ///
    /// The tag bytes are checked by [`ber::Tag`].
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
        let len = Self::span(bytes)?;
        let raw = bytes[..len].iter().fold(0u32, |raw, &byte| (raw << 8) | u32::from(byte));
        let tag = ber::Tag::try_from(raw).map_err(|_e| {
            debug_log!("tag {:02X?} rejected: {}", &bytes[..len], _e);
            TlvError::InvalidTag
        })?;
        Ok((Self::from(&tag), len))
    }

    /// Number of tag bytes at the start of `bytes`.
    fn span(bytes: &[u8]) -> Result<usize> {
        let first = *bytes.first().ok_or(TlvError::TruncatedData)?;
        if first & 0x1F != 0x1F {
            return Ok(1);
        }

        for (i, &byte) in bytes[1..].iter().enumerate() {
            if i == MAX_SUBSEQUENT_TAG_BYTES {
                debug_log!("tag: more than {} subsequent bytes", MAX_SUBSEQUENT_TAG_BYTES);
                return Err(TlvError::InvalidTag);
            }
            if byte & 0x80 == 0 {
                return Ok(i + 2);
            }
        }

        Err(TlvError::TruncatedData)
    }

    /// Wire bytes of the tag, left aligned, with the number of bytes used.
    pub fn to_bytes(self) -> ([u8; 3], usize) {
        let len = self.encoded_len();
        let mut bytes = [0; 3];
        for (i, byte) in bytes.iter_mut().take(len).enumerate() {
            *byte = (self.0 >> (8 * (len - 1 - i))) as u8;
        }
        (bytes, len)
    }
}

impl From<u8> for Tag {
    fn from(tag: u8) -> Self {
        Self(u32::from(tag))
    }
}

impl From<u16> for Tag {
    fn from(tag: u16) -> Self {
        Self(u32::from(tag))
    }
}

impl From<&ber::Tag> for Tag {
    fn from(tag: &ber::Tag) -> Self {
        Self(tag.to_bytes().iter().fold(0, |raw, &byte| (raw << 8) | u32::from(byte)))
    }
}

impl TryFrom<Tag> for ber::Tag {
    type Error = TlvError;

    fn try_from(tag: Tag) -> Result<Self> {
        ber::Tag::try_from(tag.0).map_err(|_| TlvError::InvalidTag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::UTF8_STRING => write!(f, "UTF8String"),
            Tag::PRINTABLE_STRING => write!(f, "PrintableString"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            other => write!(f, "{:0width$X}", other.0, width = other.encoded_len() * 2),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({}[0x{:X}])", self, self.0)
    }
}
