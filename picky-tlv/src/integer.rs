//! Helpers for unsigned big-endian integers carried in signed ASN.1 INTEGER encodings.

/// Drops the single `0x00` byte that keeps a positive INTEGER from looking negative.
///
/// Only one byte is removed, and never the last one: the INTEGER `00` stays `00`.
pub fn strip_sign_byte(value: &[u8]) -> &[u8] {
    match value {
        [0x00, rest @ ..] if !rest.is_empty() => rest,
        _ => value,
    }
}

/// Returns `value` without redundant leading zero bytes.
///
/// An all-zero value keeps its last byte; an empty slice stays empty.
pub fn trim_leading_zeros(value: &[u8]) -> &[u8] {
    let first_significant = value
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(value.len().saturating_sub(1));
    &value[first_significant..]
}

/// Whether `digits` needs a `0x00` prefix to be read back as a non-negative INTEGER.
///
/// Empty input also needs it: zero is encoded as a single `0x00` byte.
pub fn needs_sign_byte(digits: &[u8]) -> bool {
    digits.first().map_or(true, |&first| first & 0x80 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0x00, 0xFF], &[0xFF])]
    #[case(&[0x00, 0x00, 0x01], &[0x00, 0x01])]
    #[case(&[0x00], &[0x00])]
    #[case(&[0x7F], &[0x7F])]
    #[case(&[], &[])]
    fn sign_byte(#[case] value: &[u8], #[case] expected: &[u8]) {
        assert_eq!(strip_sign_byte(value), expected);
    }

    #[rstest]
    #[case(&[0x00, 0x00, 0x80], &[0x80], true)]
    #[case(&[0x00, 0x01], &[0x01], false)]
    #[case(&[0x00, 0x00], &[0x00], false)]
    #[case(&[], &[], true)]
    fn leading_zeros(#[case] value: &[u8], #[case] digits: &[u8], #[case] pad: bool) {
        let trimmed = trim_leading_zeros(value);
        assert_eq!(trimmed, digits);
        assert_eq!(needs_sign_byte(trimmed), pad);
    }
}
