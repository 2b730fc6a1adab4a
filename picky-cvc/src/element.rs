use crate::error::{CvcError, Result};
use picky_tlv::integer::strip_sign_byte;
use picky_tlv::{debug_log, Reader, Tag, Tlv};

/// Reads the next element, failing when the reader is exhausted.
pub(crate) fn read_any<'a>(reader: &mut Reader<'a>, element: &'static str) -> Result<Tlv<'a>> {
    if reader.is_empty() {
        debug_log!("{} is missing", element);
        return Err(CvcError::MissingElement { element });
    }

    Ok(reader.read_tlv()?)
}

pub(crate) fn read_expected<'a>(reader: &mut Reader<'a>, tag: Tag, element: &'static str) -> Result<Tlv<'a>> {
    let tlv = read_any(reader, element)?;
    if tlv.tag() != tag {
        debug_log!("{}: expected {}, found {}", element, tag, tlv.tag());
        return Err(CvcError::UnexpectedTag {
            element,
            expected: tag,
            found: tlv.tag(),
        });
    }

    Ok(tlv)
}

/// Content of the next element, which must carry `tag` and at least one byte.
pub(crate) fn read_value<'a>(reader: &mut Reader<'a>, tag: Tag, element: &'static str) -> Result<&'a [u8]> {
    let tlv = read_expected(reader, tag, element)?;
    non_empty(tlv.value(), element)
}

/// Content of the next element if it carries `tag`, without consuming anything otherwise.
pub(crate) fn read_optional<'a>(reader: &mut Reader<'a>, tag: Tag, element: &'static str) -> Result<Option<&'a [u8]>> {
    if reader.peek_tag() == Some(tag) {
        read_value(reader, tag, element).map(Some)
    } else {
        Ok(None)
    }
}

/// Reads an INTEGER and returns its magnitude without the sign byte.
pub(crate) fn read_unsigned_integer<'a>(reader: &mut Reader<'a>, element: &'static str) -> Result<&'a [u8]> {
    read_value(reader, Tag::INTEGER, element).map(strip_sign_byte)
}

pub(crate) fn non_empty<'a>(value: &'a [u8], element: &'static str) -> Result<&'a [u8]> {
    if value.is_empty() {
        debug_log!("{} is empty", element);
        return Err(CvcError::EmptyElement { element });
    }

    Ok(value)
}

/// Fails unless every byte of `reader` was consumed.
pub(crate) fn expect_end(reader: &Reader<'_>, element: &'static str) -> Result<()> {
    let len = reader.remaining().len();
    if len != 0 {
        debug_log!("{} trailing bytes after {}", len, element);
        return Err(CvcError::TrailingData { element, len });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;

    #[test]
    fn optional_element_is_left_in_place() {
        let data = hex!("5F 20 01 41");
        let mut reader = Reader::new(&data);
        assert_eq!(read_optional(&mut reader, Tag::new(0x42), "authority reference"), Ok(None));
        assert_eq!(reader.position(), 0);
        assert_eq!(
            read_optional(&mut reader, Tag::new(0x5F20), "holder reference"),
            Ok(Some(&b"A"[..]))
        );
        assert_eq!(expect_end(&reader, "body"), Ok(()));
    }

    #[test]
    fn empty_and_missing() {
        let data = hex!("02 00");
        let mut reader = Reader::new(&data);
        assert_eq!(
            read_unsigned_integer(&mut reader, "order"),
            Err(CvcError::EmptyElement { element: "order" })
        );
        assert_eq!(
            read_any(&mut reader, "cofactor").unwrap_err(),
            CvcError::MissingElement { element: "cofactor" }
        );
    }

    #[test]
    fn sign_byte_is_dropped() {
        let data = hex!("02 03 00 80 01");
        let mut reader = Reader::new(&data);
        assert_eq!(read_unsigned_integer(&mut reader, "prime").unwrap(), &hex!("80 01"));
    }
}
