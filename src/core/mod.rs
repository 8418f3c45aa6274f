//! Core domain types for Bulls and Cows
//!
//! Digit strings and the hint they produce when scored against each other.
//! Everything here is pure and allocation free.

mod digits;
mod hint;

pub use digits::{Digits, DigitsError, MAX_DIGITS};
pub use hint::{Hint, HintError, score};
