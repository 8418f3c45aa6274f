//! Player guesses the bot's number

use super::SessionError;
use crate::core::{Digits, Hint};
use crate::solver::{PoolError, SecretHolder};
use log::info;
use rand::Rng;

/// Outcome of one guess in a [`PlayerSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTurn {
    Hint { hint: Hint, round: usize },
    Solved { rounds: usize },
}

/// A game where the player tries to find the bot's secret
#[derive(Debug)]
pub struct PlayerSession {
    secret: SecretHolder,
    finished: bool,
}

impl PlayerSession {
    #[must_use]
    pub const fn new(secret: SecretHolder) -> Self {
        Self {
            secret,
            finished: false,
        }
    }

    /// Start a game against a random `len`-digit secret
    ///
    /// # Errors
    /// Returns `PoolError::InvalidDigitCount` unless `1 <= len <= 10`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, PoolError> {
        Ok(Self::new(SecretHolder::random(len, rng)?))
    }

    /// Score a guess
    ///
    /// # Errors
    /// - `SessionError::Finished` once the game is over
    /// - `SessionError::Secret` if the guess has the wrong number of digits
    pub fn guess(&mut self, guess: &Digits) -> Result<PlayerTurn, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }

        let hint = self.secret.get_hint(guess)?;
        let round = self.secret.round();
        if hint.is_solved(self.secret.digits()) {
            self.finished = true;
            info!("player found the secret in {round} rounds");
            return Ok(PlayerTurn::Solved { rounds: round });
        }

        Ok(PlayerTurn::Hint { hint, round })
    }

    /// Give up: end the game and show the secret with the rounds used
    pub fn reveal(&mut self) -> (Digits, usize) {
        if !self.finished {
            info!("player gave up after {} rounds", self.secret.round());
        }
        self.finished = true;
        (*self.secret.answer(), self.secret.round())
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.secret.round()
    }

    #[must_use]
    pub const fn digits(&self) -> usize {
        self.secret.digits()
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}
