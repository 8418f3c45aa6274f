//! Secret holder: the answering side of the game

use super::pool::{PoolError, generate_all};
use crate::core::{Digits, Hint};
use log::info;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Error type for scoring guesses against a secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("guess must have {expected} digits, got {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Holds a fixed answer and scores guesses against it
///
/// The answer is only exposed through [`answer`](Self::answer), which drivers
/// call when the player gives up or wins.
#[derive(Debug, Clone)]
pub struct SecretHolder {
    answer: Digits,
    round: usize,
}

impl SecretHolder {
    #[must_use]
    pub const fn new(answer: Digits) -> Self {
        Self { answer, round: 0 }
    }

    /// Hold a secret drawn uniformly from every `len`-digit candidate
    ///
    /// # Errors
    /// Returns `PoolError::InvalidDigitCount` unless `1 <= len <= 10`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, PoolError> {
        let all = generate_all(len)?;
        let answer = *all
            .choose(rng)
            .ok_or(PoolError::InvalidDigitCount(len))?;
        info!("new {len}-digit secret chosen");
        Ok(Self::new(answer))
    }

    /// Score a guess against the secret and count the round
    ///
    /// # Errors
    /// Returns `SecretError::LengthMismatch` if the guess has a different number
    /// of digits; the round counter is left unchanged.
    pub fn get_hint(&mut self, guess: &Digits) -> Result<Hint, SecretError> {
        if guess.len() != self.answer.len() {
            return Err(SecretError::LengthMismatch {
                expected: self.answer.len(),
                found: guess.len(),
            });
        }

        let hint = Hint::score(guess, &self.answer);
        self.round += 1;
        Ok(hint)
    }

    /// Number of hints given so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Reveal the secret
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Digits {
        &self.answer
    }

    /// Digit count of the secret
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.answer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn holder(text: &str) -> SecretHolder {
        SecretHolder::new(Digits::new(text).unwrap())
    }

    #[test]
    fn get_hint_scores_and_counts_rounds() {
        let mut secret = holder("5049");
        assert_eq!(secret.round(), 0);

        let hint = secret.get_hint(&Digits::new("1234").unwrap()).unwrap();
        assert_eq!(hint.to_string(), "0A1B");
        assert_eq!(secret.round(), 1);

        let hint = secret.get_hint(&Digits::new("5049").unwrap()).unwrap();
        assert!(hint.is_solved(4));
        assert_eq!(secret.round(), 2);
    }

    #[test]
    fn get_hint_rejects_wrong_length() {
        let mut secret = holder("5049");
        let result = secret.get_hint(&Digits::new("123").unwrap());
        assert_eq!(
            result,
            Err(SecretError::LengthMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(secret.round(), 0);
    }

    #[test]
    fn answer_is_unchanged_by_scoring() {
        let mut secret = holder("8301");
        secret.get_hint(&Digits::new("1038").unwrap()).unwrap();
        assert_eq!(secret.answer().to_string(), "8301");
        assert_eq!(secret.digits(), 4);
    }

    #[test]
    fn random_secret_is_valid_and_reproducible() {
        let a = SecretHolder::random(4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = SecretHolder::random(4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.answer(), b.answer());
        assert_eq!(a.digits(), 4);
        assert_eq!(a.round(), 0);
    }

    #[test]
    fn random_secret_rejects_bad_length() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            SecretHolder::random(0, &mut rng),
            Err(PoolError::InvalidDigitCount(0))
        ));
    }
}
