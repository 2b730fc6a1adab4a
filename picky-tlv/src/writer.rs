use crate::integer;
use crate::length::Length;
use crate::tag::Tag;
use crate::{Result, TlvError};

/// Largest element header: three tag bytes and five length bytes.
const MAX_HEADER_LEN: usize = 8;

enum Storage<'a> {
    Fixed(&'a mut [u8]),
    Growable { buf: &'a mut Vec<u8>, base: usize },
}

/// Appends elements to an output buffer.
///
/// Offsets passed to [`Writer::encapsulate`] and returned by [`Writer::len`] are
/// relative to the first byte written by this writer.
pub struct Writer<'a> {
    storage: Storage<'a>,
    len: usize,
}

impl<'a> Writer<'a> {
    /// Creates a writer over a fixed-capacity buffer.
    pub fn new_to_bytes(buf: &'a mut [u8]) -> Self {
        Self {
            storage: Storage::Fixed(buf),
            len: 0,
        }
    }

    /// Creates a writer appending to the end of `buf`.
    pub fn new_to_byte_buf(buf: &'a mut Vec<u8>) -> Self {
        let base = buf.len();
        Self {
            storage: Storage::Growable { buf, base },
            len: 0,
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a complete element.
    pub fn append_tlv(&mut self, tag: Tag, value: &[u8]) -> Result<usize> {
        let (header, header_len) = encode_header(tag, value.len())?;
        let start = self.len;
        let total = header_len + value.len();

        let buf = self.grow(total)?;
        buf[start..start + header_len].copy_from_slice(&header[..header_len]);
        buf[start + header_len..start + total].copy_from_slice(value);
        self.len += total;

        Ok(total)
    }

    /// Appends `value`, an unsigned big-endian integer, as a canonical INTEGER-like element.
    ///
    /// Redundant leading zero bytes are dropped and a single `0x00` is prepended
    /// when the high bit of the first remaining byte is set.
    pub fn append_unsigned_integer(&mut self, tag: Tag, value: &[u8]) -> Result<usize> {
        let digits = integer::trim_leading_zeros(value);
        let pad = integer::needs_sign_byte(digits);
        let content_len = digits.len() + usize::from(pad);

        let (header, header_len) = encode_header(tag, content_len)?;
        let start = self.len;
        let total = header_len + content_len;

        let buf = self.grow(total)?;
        buf[start..start + header_len].copy_from_slice(&header[..header_len]);
        let mut pos = start + header_len;
        if pad {
            buf[pos] = 0x00;
            pos += 1;
        }
        buf[pos..start + total].copy_from_slice(digits);
        self.len += total;

        Ok(total)
    }

    /// Wraps every byte written since `from_offset` into a new element tagged `tag`.
    ///
    /// The wrapped bytes are shifted in place to make room for the header.
    pub fn encapsulate(&mut self, tag: Tag, from_offset: usize) -> Result<usize> {
        if from_offset > self.len {
            return Err(TlvError::InvalidOffset {
                offset: from_offset,
                len: self.len,
            });
        }

        let content_len = self.len - from_offset;
        let (header, header_len) = encode_header(tag, content_len)?;
        let end = self.len;

        let buf = self.grow(header_len)?;
        buf.copy_within(from_offset..end, from_offset + header_len);
        buf[from_offset..from_offset + header_len].copy_from_slice(&header[..header_len]);
        self.len += header_len;

        Ok(header_len + content_len)
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::Fixed(buf) => &buf[..self.len],
            Storage::Growable { buf, base } => &buf[*base..*base + self.len],
        }
    }

    /// Makes room for `additional` bytes and returns the written region plus the new room.
    fn grow(&mut self, additional: usize) -> Result<&mut [u8]> {
        let required = self.len.checked_add(additional).ok_or(TlvError::InvalidLength)?;
        match &mut self.storage {
            Storage::Fixed(buf) => {
                if required > buf.len() {
                    debug_log!("writer: {} bytes required, capacity is {}", required, buf.len());
                    return Err(TlvError::BufferTooSmall {
                        required,
                        capacity: buf.len(),
                    });
                }
                Ok(&mut buf[..required])
            }
            Storage::Growable { buf, base } => {
                buf.resize(*base + required, 0);
                Ok(&mut buf[*base..])
            }
        }
    }
}

fn encode_header(tag: Tag, content_len: usize) -> Result<([u8; MAX_HEADER_LEN], usize)> {
    let (tag_bytes, tag_len) = tag.to_bytes();
    let (len_bytes, len_len) = Length::encode(content_len)?;

    let mut header = [0; MAX_HEADER_LEN];
    header[..tag_len].copy_from_slice(&tag_bytes[..tag_len]);
    header[tag_len..tag_len + len_len].copy_from_slice(&len_bytes[..len_len]);

    Ok((header, tag_len + len_len))
}
