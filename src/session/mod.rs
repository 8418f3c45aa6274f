//! Game sessions
//!
//! A session owns the core objects for one game and enforces the order of
//! calls a driver may make. Replaying means dropping the session and building
//! a new one.

mod bot;
mod player;

pub use bot::{BotSession, BotTurn};
pub use player::{PlayerSession, PlayerTurn};

use crate::core::HintError;
use crate::solver::{PoolError, SecretError};
use thiserror::Error;

/// Error type for calls a session cannot accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the game has not started yet")]
    NotStarted,
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the game is over")]
    Finished,
    #[error(transparent)]
    Hint(#[from] HintError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Secret(#[from] SecretError),
}
