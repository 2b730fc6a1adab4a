use crate::error::{CvcError, Result};
use std::fmt;

/// Number of unpacked BCD digits of a certificate date (`YYMMDD`).
pub const DATE_DIGITS: usize = 6;

/// Effective or expiration date of a certificate.
///
/// Dates are encoded as six unpacked BCD digits, one digit per byte, and always
/// fall within the 21st century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CvcDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CvcDate {
    /// Creates a date, rejecting out of range components.
    ///
    /// `year` must be within `2000..=2099`.
    pub fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if (2000..=2099).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some(Self { year, month, day })
        } else {
            None
        }
    }

    /// Decodes the content of a date element.
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        let digits: &[u8; DATE_DIGITS] = digits.try_into().map_err(|_| CvcError::InvalidDate)?;
        if digits.iter().any(|&digit| digit > 9) {
            return Err(CvcError::InvalidDate);
        }

        let pair = |i: usize| digits[i] * 10 + digits[i + 1];
        Self::new(2000 + u16::from(pair(0)), pair(2), pair(4)).ok_or(CvcError::InvalidDate)
    }

    pub fn to_digits(&self) -> [u8; DATE_DIGITS] {
        let yy = (self.year - 2000) as u8;
        [yy / 10, yy % 10, self.month / 10, self.month % 10, self.day / 10, self.day % 10]
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for CvcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn decode() {
        let date = CvcDate::from_digits(&[2, 5, 0, 1, 1, 5]).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 15));
        assert_eq!(date.to_string(), "2025-01-15");
        assert_eq!(date.to_digits(), [2, 5, 0, 1, 1, 5]);
    }

    #[test]
    fn ordering() {
        let effective = CvcDate::from_digits(&[2, 5, 0, 1, 1, 5]).unwrap();
        let expiration = CvcDate::from_digits(&[2, 8, 0, 1, 1, 4]).unwrap();
        assert!(effective < expiration);
    }

    #[rstest]
    #[case::too_short(&[2, 5, 0, 1, 1])]
    #[case::too_long(&[2, 5, 0, 1, 1, 5, 0])]
    #[case::ascii_digits(b"250115")]
    #[case::month_zero(&[2, 5, 0, 0, 1, 5])]
    #[case::month_thirteen(&[2, 5, 1, 3, 1, 5])]
    #[case::day_zero(&[2, 5, 0, 1, 0, 0])]
    #[case::day_thirty_two(&[2, 5, 0, 1, 3, 2])]
    fn rejected(#[case] digits: &[u8]) {
        assert_eq!(CvcDate::from_digits(digits), Err(CvcError::InvalidDate));
    }
}
