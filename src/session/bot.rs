//! Bot guesses the player's number

use super::SessionError;
use crate::core::{Digits, Hint};
use crate::solver::CandidatePool;
use log::{info, warn};
use rand::Rng;
use rand::rngs::StdRng;

/// Outcome of one exchange in a [`BotSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotTurn {
    /// The bot's next guess
    Guess {
        guess: Digits,
        round: usize,
        remaining: usize,
    },
    /// The last guess was the player's number
    Solved { answer: Digits, rounds: usize },
    /// No number is consistent with the hints given
    Contradiction { rounds: usize },
}

/// A game where the bot narrows down the player's secret
#[derive(Debug)]
pub struct BotSession<R: Rng = StdRng> {
    pool: CandidatePool<R>,
    current: Option<Digits>,
    finished: bool,
}

impl<R: Rng> BotSession<R> {
    #[must_use]
    pub const fn new(pool: CandidatePool<R>) -> Self {
        Self {
            pool,
            current: None,
            finished: false,
        }
    }

    /// Issue the first guess
    ///
    /// # Errors
    /// Returns `SessionError::AlreadyStarted` if a guess is already pending or
    /// the game has ended.
    pub fn start(&mut self) -> Result<BotTurn, SessionError> {
        if self.current.is_some() || self.finished {
            return Err(SessionError::AlreadyStarted);
        }
        info!(
            "bot game started over {} candidates",
            self.pool.candidates().len()
        );
        Ok(self.next_guess())
    }

    /// Feed the player's hint for the pending guess
    ///
    /// # Errors
    /// - `SessionError::NotStarted` before [`start`](Self::start)
    /// - `SessionError::Finished` once the game is over
    /// - `SessionError::Hint` if the hint cannot occur for this digit count
    pub fn submit_hint(&mut self, hint: Hint) -> Result<BotTurn, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        let guess = self.current.ok_or(SessionError::NotStarted)?;
        let hint = hint.check_len(self.pool.digits())?;

        self.pool.eliminate(hint)?;

        if hint.is_solved(self.pool.digits()) {
            self.finish();
            info!("bot found {guess} in {} rounds", self.pool.round());
            return Ok(BotTurn::Solved {
                answer: guess,
                rounds: self.pool.round(),
            });
        }

        Ok(self.next_guess())
    }

    fn next_guess(&mut self) -> BotTurn {
        if let Some(guess) = self.pool.guess() {
            self.current = Some(guess);
            BotTurn::Guess {
                guess,
                round: self.pool.round(),
                remaining: self.pool.len(),
            }
        } else {
            self.finish();
            warn!("hints contradict each other after {} rounds", self.pool.round());
            BotTurn::Contradiction {
                rounds: self.pool.round(),
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.current = None;
    }

    /// The guess awaiting a hint
    #[must_use]
    pub const fn current_guess(&self) -> Option<Digits> {
        self.current
    }

    /// Exactly one candidate is left, so the pending guess must be right
    #[must_use]
    pub fn is_certain(&self) -> bool {
        self.pool.is_solved()
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool<R> {
        &self.pool
    }
}
