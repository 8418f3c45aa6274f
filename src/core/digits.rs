//! Distinct-digit number representation
//!
//! A `Digits` value is an n-digit string (1 ≤ n ≤ 10) whose digits are pairwise
//! distinct. It is the universal representation for guesses, answers and candidates.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest representable digit string (every decimal digit used once)
pub const MAX_DIGITS: usize = 10;

/// An n-digit number with pairwise distinct digits
///
/// Stores the digits as values `0..=9` plus a bitmask of the digits present, so
/// membership tests during scoring are a single AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digits {
    len: u8,
    values: [u8; MAX_DIGITS],
    mask: u16,
}

/// Error type for invalid digit strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitsError {
    #[error("number must have between 1 and {MAX_DIGITS} digits, got {0}")]
    InvalidLength(usize),
    #[error("number must have exactly {expected} digits, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("'{0}' is not a decimal digit")]
    NonDigit(char),
    #[error("digit '{0}' appears more than once")]
    DuplicateDigit(char),
}

impl Digits {
    /// Parse a digit string of any supported length
    ///
    /// # Errors
    /// Returns `DigitsError` if:
    /// - Length is 0 or greater than 10
    /// - A character is not an ASCII digit
    /// - A digit is repeated
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Digits;
    ///
    /// let number = Digits::new("0427").unwrap();
    /// assert_eq!(number.to_string(), "0427");
    ///
    /// assert!(Digits::new("1123").is_err());
    /// assert!(Digits::new("12a4").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, DigitsError> {
        let text = text.trim();
        let count = text.chars().count();
        if count == 0 || count > MAX_DIGITS {
            return Err(DigitsError::InvalidLength(count));
        }

        let mut values = [0u8; MAX_DIGITS];
        let mut mask = 0u16;
        for (i, ch) in text.chars().enumerate() {
            let value = ch.to_digit(10).ok_or(DigitsError::NonDigit(ch))? as u8;
            let bit = 1u16 << value;
            if mask & bit != 0 {
                return Err(DigitsError::DuplicateDigit(ch));
            }
            mask |= bit;
            values[i] = value;
        }

        Ok(Self {
            len: count as u8,
            values,
            mask,
        })
    }

    /// Parse a digit string that must have exactly `len` digits
    ///
    /// # Errors
    /// Returns `DigitsError::WrongLength` on a length mismatch, otherwise the
    /// same errors as [`Digits::new`].
    pub fn with_len(text: &str, len: usize) -> Result<Self, DigitsError> {
        let digits = Self::new(text)?;
        if digits.len() != len {
            return Err(DigitsError::WrongLength {
                expected: len,
                found: digits.len(),
            });
        }
        Ok(digits)
    }

    /// Build from raw digit values, returning `None` if any value is above 9,
    /// the length is unsupported, or a digit repeats
    #[must_use]
    pub fn from_values(values: &[u8]) -> Option<Self> {
        if values.is_empty() || values.len() > MAX_DIGITS {
            return None;
        }

        let mut stored = [0u8; MAX_DIGITS];
        let mut mask = 0u16;
        for (slot, &value) in stored.iter_mut().zip(values) {
            if value > 9 || mask & (1 << value) != 0 {
                return None;
            }
            mask |= 1 << value;
            *slot = value;
        }

        Some(Self {
            len: values.len() as u8,
            values: stored,
            mask,
        })
    }

    /// Number of digits
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; a `Digits` holds at least one digit
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digit values (0-9) in position order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values[..self.len()]
    }

    /// Digit value at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> u8 {
        self.values()[position]
    }

    /// Bitmask of the digits present (bit d set when digit d occurs)
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u16 {
        self.mask
    }

    /// Check whether a digit value occurs anywhere
    #[inline]
    #[must_use]
    pub const fn contains(&self, digit: u8) -> bool {
        digit < 10 && self.mask & (1 << digit) != 0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in self.values() {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl FromStr for Digits {
    type Err = DigitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_creation_valid() {
        let digits = Digits::new("1234").unwrap();
        assert_eq!(digits.len(), 4);
        assert_eq!(digits.values(), &[1, 2, 3, 4]);
        assert_eq!(digits.to_string(), "1234");
    }

    #[test]
    fn digits_keep_leading_zero() {
        let digits = Digits::new("0123").unwrap();
        assert_eq!(digits.digit_at(0), 0);
        assert_eq!(digits.to_string(), "0123");
    }

    #[test]
    fn digits_trim_surrounding_whitespace() {
        assert_eq!(Digits::new(" 5049\n").unwrap().to_string(), "5049");
    }

    #[test]
    fn digits_creation_invalid_length() {
        assert_eq!(Digits::new(""), Err(DigitsError::InvalidLength(0)));
        assert_eq!(
            Digits::new("01234567890"),
            Err(DigitsError::InvalidLength(11))
        );
    }

    #[test]
    fn digits_creation_rejects_non_digits() {
        assert_eq!(Digits::new("12a4"), Err(DigitsError::NonDigit('a')));
        assert_eq!(Digits::new("12 4"), Err(DigitsError::NonDigit(' ')));
        assert_eq!(Digits::new("1²34"), Err(DigitsError::NonDigit('²')));
    }

    #[test]
    fn digits_creation_rejects_duplicates() {
        assert_eq!(Digits::new("1231"), Err(DigitsError::DuplicateDigit('1')));
        assert_eq!(Digits::new("0990"), Err(DigitsError::DuplicateDigit('9')));
    }

    #[test]
    fn digits_with_len_checks_length() {
        assert!(Digits::with_len("1234", 4).is_ok());
        assert_eq!(
            Digits::with_len("123", 4),
            Err(DigitsError::WrongLength {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn digits_all_ten() {
        let digits = Digits::new("9876543210").unwrap();
        assert_eq!(digits.len(), MAX_DIGITS);
        assert_eq!(digits.mask(), 0b11_1111_1111);
    }

    #[test]
    fn digits_mask_and_contains() {
        let digits = Digits::new("5049").unwrap();
        assert_eq!(digits.mask(), (1 << 5) | (1 << 0) | (1 << 4) | (1 << 9));
        assert!(digits.contains(5));
        assert!(digits.contains(0));
        assert!(!digits.contains(1));
        assert!(!digits.contains(10));
    }

    #[test]
    fn digits_from_values() {
        let digits = Digits::from_values(&[0, 4, 2, 7]).unwrap();
        assert_eq!(digits, Digits::new("0427").unwrap());

        assert!(Digits::from_values(&[]).is_none());
        assert!(Digits::from_values(&[1, 1]).is_none());
        assert!(Digits::from_values(&[1, 10]).is_none());
    }

    #[test]
    fn digits_ordering_matches_numeric_order() {
        let low = Digits::new("0123").unwrap();
        let high = Digits::new("0132").unwrap();
        assert!(low < high);
    }

    #[test]
    fn digits_from_str() {
        let parsed: Digits = "8301".parse().unwrap();
        assert_eq!(parsed.to_string(), "8301");
        assert!("83".parse::<Digits>().is_ok());
        assert!("8x".parse::<Digits>().is_err());
    }
}
