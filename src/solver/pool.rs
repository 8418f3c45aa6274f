//! Candidate pool: the guessing side of the game
//!
//! Holds every number still consistent with the hints received so far and
//! guesses uniformly at random among them.

use crate::core::{Digits, Hint, HintError, MAX_DIGITS};
use log::{debug, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

/// Pools at least this large are filtered in parallel
const PARALLEL_THRESHOLD: usize = 50_000;

/// Error type for candidate pool operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("digit count must be between 1 and {MAX_DIGITS}, got {0}")]
    InvalidDigitCount(usize),
    #[error("cannot eliminate before a guess has been made")]
    NoPreviousGuess,
    #[error(transparent)]
    Hint(#[from] HintError),
}

/// Number of n-digit numbers with distinct digits: 10 × 9 × … × (10 - n + 1)
#[must_use]
pub fn candidate_count(len: usize) -> usize {
    (0..len.min(MAX_DIGITS)).map(|i| 10 - i).product()
}

/// Generate every n-digit number with pairwise distinct digits
///
/// The result lists the numbers of `[0, 10^n)` (left-padded to width n) that
/// use n distinct digits, in ascending order. Only distinct-digit prefixes are
/// ever extended, so the cost is proportional to the output size rather than 10^n.
///
/// # Errors
/// Returns `PoolError::InvalidDigitCount` unless `1 <= len <= 10`.
///
/// # Examples
/// ```
/// use bulls_cows::solver::generate_all;
///
/// let all = generate_all(2).unwrap();
/// assert_eq!(all.len(), 90);
/// assert_eq!(all[0].to_string(), "01");
/// assert_eq!(all[89].to_string(), "98");
/// ```
pub fn generate_all(len: usize) -> Result<Vec<Digits>, PoolError> {
    if len == 0 || len > MAX_DIGITS {
        return Err(PoolError::InvalidDigitCount(len));
    }

    let mut numbers = Vec::with_capacity(candidate_count(len));
    let mut prefix = Vec::with_capacity(len);
    extend_prefix(&mut prefix, 0, len, &mut numbers);
    Ok(numbers)
}

fn extend_prefix(prefix: &mut Vec<u8>, used: u16, len: usize, out: &mut Vec<Digits>) {
    if prefix.len() == len {
        out.extend(Digits::from_values(prefix));
        return;
    }

    for digit in 0..10u8 {
        if used & (1 << digit) == 0 {
            prefix.push(digit);
            extend_prefix(prefix, used | (1 << digit), len, out);
            prefix.pop();
        }
    }
}

/// The guessing side of a game
///
/// Generic over the random source; a seeded source replays the same guesses.
#[derive(Debug, Clone)]
pub struct CandidatePool<R: Rng = StdRng> {
    len: usize,
    candidates: Vec<Digits>,
    round: usize,
    previous_guess: Option<Digits>,
    rng: R,
}

impl CandidatePool<StdRng> {
    /// Create a pool for `len`-digit numbers seeded from the operating system
    ///
    /// # Errors
    /// Returns `PoolError::InvalidDigitCount` unless `1 <= len <= 10`.
    pub fn new(len: usize) -> Result<Self, PoolError> {
        Self::with_rng(len, StdRng::from_os_rng())
    }

    /// Create a pool whose guesses are reproducible from `seed`
    ///
    /// # Errors
    /// Returns `PoolError::InvalidDigitCount` unless `1 <= len <= 10`.
    pub fn seeded(len: usize, seed: u64) -> Result<Self, PoolError> {
        Self::with_rng(len, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CandidatePool<R> {
    /// Create a pool drawing its guesses from `rng`
    ///
    /// # Errors
    /// Returns `PoolError::InvalidDigitCount` unless `1 <= len <= 10`.
    pub fn with_rng(len: usize, rng: R) -> Result<Self, PoolError> {
        let candidates = generate_all(len)?;
        debug!("generated {} candidates of {len} digits", candidates.len());

        Ok(Self {
            len,
            candidates,
            round: 0,
            previous_guess: None,
            rng,
        })
    }

    /// Pick a guess uniformly at random from the remaining candidates
    ///
    /// Returns `None` when no candidate is left, meaning the hints received so
    /// far contradict each other. The round counter only advances when a guess
    /// is returned.
    pub fn guess(&mut self) -> Option<Digits> {
        let guess = self.candidates.choose(&mut self.rng).copied()?;
        self.previous_guess = Some(guess);
        self.round += 1;
        debug!("round {}: guessing {guess}", self.round);
        Some(guess)
    }

    /// Keep only the candidates that would have produced `hint` for the previous guess
    ///
    /// Each remaining candidate is put in the answer role and scored against the
    /// previous guess. A hint no candidate can produce empties the pool.
    ///
    /// Returns the number of candidates left.
    ///
    /// # Errors
    /// Returns `PoolError::NoPreviousGuess` if called before [`guess`](Self::guess).
    pub fn eliminate(&mut self, hint: Hint) -> Result<usize, PoolError> {
        let guess = self.previous_guess.ok_or(PoolError::NoPreviousGuess)?;
        let before = self.candidates.len();

        let consistent = |candidate: &&Digits| Hint::score(&guess, candidate) == hint;
        let remaining: Vec<Digits> = if before >= PARALLEL_THRESHOLD {
            self.candidates.par_iter().filter(consistent).copied().collect()
        } else {
            self.candidates.iter().filter(consistent).copied().collect()
        };
        self.candidates = remaining;

        let after = self.candidates.len();
        debug!("{guess} scored {hint}: {before} -> {after} candidates");
        if after == 0 {
            warn!("no candidate is consistent with {hint} for {guess}");
        }

        Ok(after)
    }

    /// Parse a hint in wire form and [`eliminate`](Self::eliminate) with it
    ///
    /// # Errors
    /// Returns `PoolError::Hint` for malformed input and
    /// `PoolError::NoPreviousGuess` before the first guess.
    pub fn eliminate_str(&mut self, hint: &str) -> Result<usize, PoolError> {
        let hint = hint.parse::<Hint>()?;
        self.eliminate(hint)
    }

    /// Numbers still consistent with every hint
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Digits] {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when the hints contradict each other
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True when exactly one candidate is left
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// The answer, once it is uniquely determined
    #[must_use]
    pub fn solution(&self) -> Option<&Digits> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Number of guesses issued so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// The most recent guess
    #[inline]
    #[must_use]
    pub const fn previous_guess(&self) -> Option<Digits> {
        self.previous_guess
    }

    /// Digit count of the numbers in play
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.len
    }
}
