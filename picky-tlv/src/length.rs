use crate::{Result, TlvError};

/// Largest number of subsequent length octets accepted (`0x84` form).
const MAX_LENGTH_OCTETS: usize = 4;

/// Definite-form length codec.
///
/// Short form covers `0..=0x7F`; long forms `0x81`..=`0x84` carry up to four
/// big-endian octets. The indefinite form (`0x80`) is rejected.
pub struct Length;

impl Length {
    /// Reads the length at the start of `bytes` and returns it with its encoded size.
    pub fn decode(bytes: &[u8]) -> Result<(usize, usize)> {
        let first = *bytes.first().ok_or(TlvError::TruncatedData)?;
        if first < 0x80 {
            return Ok((usize::from(first), 1));
        }

        let count = usize::from(first & 0x7F);
        if count == 0 || count > MAX_LENGTH_OCTETS {
            debug_log!("length: unsupported form 0x{:02X}", first);
            return Err(TlvError::InvalidLength);
        }

        let octets = bytes.get(1..=count).ok_or(TlvError::TruncatedData)?;
        let mut len: usize = 0;
        for &octet in octets {
            len = len
                .checked_mul(256)
                .and_then(|len| len.checked_add(usize::from(octet)))
                .ok_or(TlvError::InvalidLength)?;
        }

        Ok((len, count + 1))
    }

    /// Number of bytes needed to encode `len`.
    pub const fn encoded_len(len: usize) -> usize {
        if len < 0x80 {
            1
        } else if len <= 0xFF {
            2
        } else if len <= 0xFFFF {
            3
        } else if len <= 0xFF_FFFF {
            4
        } else {
            5
        }
    }

    /// Encodes `len`, returning the bytes left aligned with the number used.
    pub fn encode(len: usize) -> Result<([u8; 5], usize)> {
        if u32::try_from(len).is_err() {
            return Err(TlvError::InvalidLength);
        }

        let size = Self::encoded_len(len);
        let mut bytes = [0; 5];
        if size == 1 {
            bytes[0] = len as u8;
        } else {
            let octets = size - 1;
            bytes[0] = 0x80 | octets as u8;
            for (i, byte) in bytes[1..size].iter_mut().enumerate() {
                *byte = (len >> (8 * (octets - 1 - i))) as u8;
            }
        }

        Ok((bytes, size))
    }
}
