//! Bulls and cows feedback calculation and representation
//!
//! A hint is the pair `(bulls, cows)`:
//! - bulls: digits correct in both value and position
//! - cows: digits present in the answer but at a different position
//!
//! On the wire a hint is always written as `"{bulls}A{cows}B"`, e.g. `"2A1B"`.

use super::{Digits, MAX_DIGITS};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hint {
    bulls: u8,
    cows: u8,
}

/// Error type for hints that cannot be accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("invalid hint '{0}': expected the form XAYB, e.g. 1A2B")]
    Malformed(String),
    #[error("invalid hint {hint}: bulls + cows cannot exceed {len}")]
    OutOfRange { hint: Hint, len: usize },
}

impl Hint {
    /// No digit in common
    pub const NONE: Self = Self { bulls: 0, cows: 0 };

    /// Create a hint from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if either count is above 10
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        debug_assert!(
            bulls as usize <= MAX_DIGITS && cows as usize <= MAX_DIGITS,
            "Hint counts cannot exceed the longest number"
        );
        Self { bulls, cows }
    }

    /// The hint that ends a game on `len` digits: `{len}A0B`
    #[inline]
    #[must_use]
    pub const fn solved(len: usize) -> Self {
        Self::new(len as u8, 0)
    }

    /// Digits in the right place
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Digits present elsewhere
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Check if this hint means the guess was the answer
    #[inline]
    #[must_use]
    pub const fn is_solved(self, len: usize) -> bool {
        self.bulls as usize == len && self.cows == 0
    }

    /// Check that this hint could come from scoring two numbers of `len` digits
    ///
    /// # Errors
    /// Returns `HintError::OutOfRange` when `bulls + cows > len`.
    pub fn check_len(self, len: usize) -> Result<Self, HintError> {
        if (self.bulls + self.cows) as usize > len {
            return Err(HintError::OutOfRange { hint: self, len });
        }
        Ok(self)
    }

    /// Parse the wire form and check it against a digit length
    ///
    /// # Errors
    /// Returns `HintError::Malformed` or `HintError::OutOfRange`.
    pub fn parse_for_len(text: &str, len: usize) -> Result<Self, HintError> {
        text.parse::<Self>()?.check_len(len)
    }

    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. Count positions where the digits agree (bulls) and remember those digits
    /// 2. Count guess digits that were not matched as bulls but occur anywhere in
    ///    the answer (cows)
    ///
    /// Both inputs are expected to have the same length. Positions past the
    /// shorter input are ignored for bulls.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Digits, Hint};
    ///
    /// let guess = Digits::new("1234").unwrap();
    /// let answer = Digits::new("1243").unwrap();
    /// assert_eq!(Hint::score(&guess, &answer).to_string(), "2A2B");
    /// ```
    #[must_use]
    pub fn score(guess: &Digits, answer: &Digits) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "scored numbers differ in length");

        let mut bulls = 0u8;
        let mut matched = 0u16;
        for (&g, &a) in guess.values().iter().zip(answer.values()) {
            if g == a {
                bulls += 1;
                matched |= 1 << g;
            }
        }

        let cows = guess
            .values()
            .iter()
            .filter(|&&g| matched & (1 << g) == 0 && answer.contains(g))
            .count() as u8;

        Self { bulls, cows }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.bulls, self.cows)
    }
}

impl FromStr for Hint {
    type Err = HintError;

    /// Strict parse of `^[0-9]A[0-9]B$`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[bulls @ b'0'..=b'9', b'A', cows @ b'0'..=b'9', b'B'] => {
                Ok(Self::new(bulls - b'0', cows - b'0'))
            }
            _ => Err(HintError::Malformed(s.to_string())),
        }
    }
}

/// Score `guess` against `answer`; shorthand for [`Hint::score`]
#[inline]
#[must_use]
pub fn score(guess: &Digits, answer: &Digits) -> Hint {
    Hint::score(guess, answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(text: &str) -> Digits {
        Digits::new(text).unwrap()
    }

    #[test]
    fn score_swapped_pair() {
        let hint = score(&digits("1234"), &digits("1243"));
        assert_eq!(hint, Hint::new(2, 2));
        assert_eq!(hint.to_string(), "2A2B");
    }

    #[test]
    fn score_disjoint() {
        assert_eq!(score(&digits("1234"), &digits("5678")), Hint::NONE);
        assert_eq!(Hint::NONE.to_string(), "0A0B");
    }

    #[test]
    fn score_identical() {
        let hint = score(&digits("1234"), &digits("1234"));
        assert_eq!(hint.to_string(), "4A0B");
        assert!(hint.is_solved(4));
        assert_eq!(hint, Hint::solved(4));
    }

    #[test]
    fn score_known_examples() {
        // Secret 5049
        let answer = digits("5049");
        assert_eq!(score(&digits("1234"), &answer).to_string(), "0A1B");
        assert_eq!(score(&digits("4567"), &answer).to_string(), "0A2B");
        assert_eq!(score(&digits("9054"), &answer).to_string(), "1A3B");
        assert_eq!(score(&digits("9405"), &answer).to_string(), "0A4B");
        assert_eq!(score(&digits("1234"), &digits("4321")).to_string(), "0A4B");
    }

    #[test]
    fn score_three_digit_game() {
        let answer = digits("527");
        assert_eq!(score(&digits("527"), &answer), Hint::new(3, 0));
        assert_eq!(score(&digits("752"), &answer), Hint::new(0, 3));
        assert_eq!(score(&digits("572"), &answer), Hint::new(1, 2));
        assert_eq!(score(&digits("134"), &answer), Hint::new(0, 0));
        assert_eq!(score(&digits("751"), &answer), Hint::new(0, 2));
    }

    #[test]
    fn hint_parse_valid() {
        let hint: Hint = "1A2B".parse().unwrap();
        assert_eq!(hint.bulls(), 1);
        assert_eq!(hint.cows(), 2);
        assert_eq!("0A0B".parse::<Hint>().unwrap(), Hint::NONE);
        assert_eq!("9A9B".parse::<Hint>().unwrap(), Hint::new(9, 9));
    }

    #[test]
    fn hint_parse_malformed() {
        for text in ["", "1A2", "A2B", "1a2b", "10A0B", "1A-1B", " 1A2B", "1B2A", "xAyB"] {
            assert_eq!(
                text.parse::<Hint>(),
                Err(HintError::Malformed(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn hint_parse_for_len_checks_range() {
        assert_eq!(Hint::parse_for_len("2A2B", 4), Ok(Hint::new(2, 2)));
        assert_eq!(
            Hint::parse_for_len("3A2B", 4),
            Err(HintError::OutOfRange {
                hint: Hint::new(3, 2),
                len: 4
            })
        );
        assert!(matches!(
            Hint::parse_for_len("nope", 4),
            Err(HintError::Malformed(_))
        ));
    }

    #[test]
    fn hint_display_round_trip() {
        let hint = Hint::new(1, 3);
        assert_eq!(hint.to_string().parse::<Hint>().unwrap(), hint);
    }

    #[test]
    fn hint_solved_depends_on_length() {
        let hint = Hint::new(3, 0);
        assert!(hint.is_solved(3));
        assert!(!hint.is_solved(4));
    }
}
