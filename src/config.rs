//! Game configuration shared by every command
//!
//! Built from the command line (`--digits`, `--seed`) or the
//! `BULLS_COWS_DIGITS` environment variable.

use crate::core::MAX_DIGITS;
use crate::solver::{CandidatePool, PoolError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Digit count of the classic game
pub const DEFAULT_DIGITS: usize = 4;

/// Round cap for automated games; random guessing needs far fewer
pub const DEFAULT_MAX_ROUNDS: usize = 32;

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("digits must be between 1 and {MAX_DIGITS}, got {0}")]
    InvalidDigits(usize),
    #[error("max rounds must be at least 1")]
    InvalidMaxRounds,
}

/// Settings for one or more games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub digits: usize,
    pub seed: Option<u64>,
    pub max_rounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            seed: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl GameConfig {
    /// Validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDigits` unless `1 <= digits <= 10`.
    pub fn new(digits: usize, seed: Option<u64>) -> Result<Self, ConfigError> {
        Self {
            digits,
            seed,
            ..Self::default()
        }
        .validate()
    }

    /// Check the settings, returning them unchanged when valid
    ///
    /// # Errors
    /// Returns `ConfigError` describing the first invalid field.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.digits == 0 || self.digits > MAX_DIGITS {
            return Err(ConfigError::InvalidDigits(self.digits));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::InvalidMaxRounds);
        }
        Ok(self)
    }

    /// Random source for a game: seeded when a seed is configured
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Random source for the `index`-th game of a batch
    ///
    /// With a seed, each index gets its own reproducible stream.
    #[must_use]
    pub fn rng_for(&self, index: usize) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, |seed| {
            StdRng::seed_from_u64(seed.wrapping_add(index as u64))
        })
    }

    /// A fresh candidate pool for these settings
    ///
    /// # Errors
    /// Returns `PoolError::InvalidDigitCount` if the digit count was never validated.
    pub fn pool(&self) -> Result<CandidatePool, PoolError> {
        CandidatePool::with_rng(self.digits, self.rng())
    }

    /// A candidate pool for the `index`-th game, see [`rng_for`](Self::rng_for)
    ///
    /// # Errors
    /// Returns `PoolError::InvalidDigitCount` if the digit count was never validated.
    pub fn pool_for(&self, index: usize) -> Result<CandidatePool, PoolError> {
        CandidatePool::with_rng(self.digits, self.rng_for(index))
    }
}
