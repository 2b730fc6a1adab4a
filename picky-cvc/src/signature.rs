//! Conversion between raw `r || s` ECDSA signatures and the `ECDSA-Sig-Value` structure.
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }
//! ```

use crate::element::{expect_end, read_unsigned_integer};
use crate::error::{CvcError, Result};
use picky_tlv::integer::trim_leading_zeros;
use picky_tlv::{debug_log, Reader, Tag, Tlv, Writer};

/// Largest encoding of a raw signature of `raw_len` bytes.
///
/// Both integers may need a sign byte.
pub const fn max_encoded_len(raw_len: usize) -> usize {
    let integer = 1 + 3 + raw_len / 2 + 1;
    1 + 3 + 2 * integer
}

/// Wraps a raw signature, `r` and `s` of equal length concatenated, into an `ECDSA-Sig-Value`.
///
/// The encoding is written at the start of `out`; the number of bytes used is returned.
pub fn encode_ecdsa_signature(raw: &[u8], out: &mut [u8]) -> Result<usize> {
    if raw.is_empty() || raw.len() % 2 != 0 {
        debug_log!("raw signature of {} bytes can't be split", raw.len());
        return Err(CvcError::InvalidSignatureLength { len: raw.len() });
    }

    let (r, s) = raw.split_at(raw.len() / 2);
    let mut writer = Writer::new_to_bytes(out);
    writer.append_unsigned_integer(Tag::INTEGER, r)?;
    writer.append_unsigned_integer(Tag::INTEGER, s)?;
    writer.encapsulate(Tag::SEQUENCE, 0)?;

    Ok(writer.len())
}

/// Unwraps an `ECDSA-Sig-Value` into `r || s`, each left padded to `component_len` bytes.
pub fn decode_ecdsa_signature(der: &[u8], component_len: usize) -> Result<Vec<u8>> {
    let sequence = Tlv::parse(der)?;
    if sequence.tag() != Tag::SEQUENCE {
        return Err(CvcError::UnexpectedTag {
            element: "ECDSA signature",
            expected: Tag::SEQUENCE,
            found: sequence.tag(),
        });
    }

    let mut fields = Reader::new(sequence.value());
    let r = read_unsigned_integer(&mut fields, "r")?;
    let s = read_unsigned_integer(&mut fields, "s")?;
    expect_end(&fields, "ECDSA signature")?;

    let mut raw = vec![0; 2 * component_len];
    let (r_out, s_out) = raw.split_at_mut(component_len);
    copy_right_aligned(r, r_out)?;
    copy_right_aligned(s, s_out)?;

    Ok(raw)
}

fn copy_right_aligned(value: &[u8], out: &mut [u8]) -> Result<()> {
    let value = trim_leading_zeros(value);
    if value.len() > out.len() {
        debug_log!("signature component of {} bytes, {} expected", value.len(), out.len());
        return Err(CvcError::InvalidSignatureLength { len: value.len() });
    }

    let start = out.len() - value.len();
    out[start..].copy_from_slice(value);
    Ok(())
}
