use crate::length::Length;
use crate::tag::Tag;
use crate::{Result, TlvError};

/// Deepest nesting of constructed elements accepted by [`validate`].
pub const MAX_NESTING_DEPTH: usize = 16;

/// A single element borrowed from the input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tlv<'a> {
    tag: Tag,
    value: &'a [u8],
    raw: &'a [u8],
}

impl<'a> Tlv<'a> {
    /// Parses the element at the start of `bytes` without looking into its contents.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let (tag, tag_len) = Tag::decode(bytes)?;
        let (len, len_len) = Length::decode(&bytes[tag_len..])?;

        let header_len = tag_len + len_len;
        let end = header_len.checked_add(len).ok_or(TlvError::InvalidLength)?;
        let raw = match bytes.get(..end) {
            Some(raw) => raw,
            None => {
                debug_log!(
                    "element {}: {} content bytes announced, {} available",
                    tag,
                    len,
                    bytes.len() - header_len
                );
                return Err(TlvError::TruncatedData);
            }
        };

        Ok(Self {
            tag,
            value: &raw[header_len..],
            raw,
        })
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Content bytes, header excluded.
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// The whole element, header included.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    pub fn encoded_len(&self) -> usize {
        self.raw.len()
    }
}

/// Forward-only cursor over a sequence of sibling elements.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Reads the next element and advances past it.
    ///
    /// Never reads beyond the slice the reader was created with.
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>> {
        let tlv = Tlv::parse(self.remaining())?;
        self.pos += tlv.encoded_len();
        Ok(tlv)
    }

    /// Tag of the next element, without advancing.
    ///
    /// Returns `None` at the end of the data or when the tag itself is malformed.
    pub fn peek_tag(&self) -> Option<Tag> {
        Tag::decode(self.remaining()).ok().map(|(tag, _)| tag)
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Offset of the cursor from the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The whole slice the reader walks over.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// Checks that the first element of `bytes` is well formed, recursing into
/// every constructed element, and returns its encoded length.
///
/// Bytes following the first element are not inspected, see [`validate_all`].
pub fn validate(bytes: &[u8]) -> Result<usize> {
    let tlv = Tlv::parse(bytes)?;
    validate_contents(&tlv, 1)?;
    Ok(tlv.encoded_len())
}

/// Checks that the whole of `bytes` is a sequence of well formed elements, each one
/// validated like [`validate`], and returns the number of top-level elements.
///
/// An empty buffer holds no element and is rejected.
pub fn validate_all(bytes: &[u8]) -> Result<usize> {
    let mut count = 0;
    let mut rest = bytes;
    loop {
        let len = validate(rest)?;
        count += 1;
        rest = &rest[len..];
        if rest.is_empty() {
            return Ok(count);
        }
    }
}

fn validate_contents(tlv: &Tlv<'_>, depth: usize) -> Result<()> {
    if !tlv.tag().is_constructed() {
        return Ok(());
    }

    if depth >= MAX_NESTING_DEPTH {
        debug_log!("validate: nesting deeper than {}", MAX_NESTING_DEPTH);
        return Err(TlvError::NestingTooDeep);
    }

    let mut reader = Reader::new(tlv.value());
    while !reader.is_empty() {
        let child = reader.read_tlv()?;
        validate_contents(&child, depth + 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_siblings() {
        let data = hex!("42 02 41 42 5F 20 01 43");
        let mut reader = Reader::new(&data);

        assert_eq!(reader.peek_tag(), Some(Tag::new(0x42)));
        let car = reader.read_tlv().unwrap();
        assert_eq!(car.tag(), Tag::new(0x42));
        assert_eq!(car.value(), b"AB");
        assert_eq!(car.raw(), &data[..4]);
        assert_eq!(reader.position(), 4);

        assert_eq!(reader.peek_tag(), Some(Tag::new(0x5F20)));
        let chr = reader.read_tlv().unwrap();
        assert_eq!(chr.value(), b"C");
        assert!(reader.is_empty());
        assert_eq!(reader.peek_tag(), None);
        assert_eq!(reader.read_tlv().unwrap_err(), TlvError::TruncatedData);
    }

    #[test]
    fn long_form_length() {
        let mut data = vec![0x04, 0x81, 0x80];
        data.extend_from_slice(&[0xAB; 0x80]);
        let tlv = Tlv::parse(&data).unwrap();
        assert_eq!(tlv.value().len(), 0x80);
        assert_eq!(tlv.encoded_len(), data.len());
    }

    #[test]
    fn truncated_content() {
        assert_eq!(Tlv::parse(&hex!("04 05 01 02")).unwrap_err(), TlvError::TruncatedData);
    }

    #[test]
    fn validate_nested() {
        let data = hex!("7F 21 08 7F 4E 02 42 00 5F 37 00 FF FF");
        assert_eq!(validate(&data).unwrap(), 11);
    }

    #[test]
    fn validate_rejects_broken_child() {
        // inner element claims 3 bytes but its parent only holds 2
        let data = hex!("30 04 04 03 01 02");
        assert_eq!(validate(&data).unwrap_err(), TlvError::TruncatedData);
    }

    #[test]
    fn validate_ignores_primitive_contents() {
        let data = hex!("04 02 30 05");
        assert_eq!(validate(&data).unwrap(), 4);
    }

    #[test]
    fn validate_all_walks_every_sibling() {
        let data = hex!("7F 21 08 7F 4E 02 42 00 5F 37 00 05 00 30 02 04 00");
        assert_eq!(validate(&data).unwrap(), 11);
        assert_eq!(validate_all(&data).unwrap(), 3);
    }

    #[test]
    fn validate_all_rejects_a_broken_sibling() {
        let data = hex!("05 00 04 7F 00");
        assert_eq!(validate(&data).unwrap(), 2);
        assert_eq!(validate_all(&data).unwrap_err(), TlvError::TruncatedData);
        assert_eq!(validate_all(&[]).unwrap_err(), TlvError::TruncatedData);
    }

    #[test]
    fn validate_limits_depth() {
        let mut data = vec![0x04, 0x00];
        for _ in 0..MAX_NESTING_DEPTH {
            let mut outer = vec![0x30, data.len() as u8];
            outer.extend_from_slice(&data);
            data = outer;
        }
        assert_eq!(validate(&data).unwrap_err(), TlvError::NestingTooDeep);
    }
}
