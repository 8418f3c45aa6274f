//! Bulls and Cows
//!
//! A number-guessing game engine: the bot guesses a secret of distinct digits
//! from bulls/cows hints by keeping every number consistent with the hints so
//! far, or holds a secret of its own and scores the player's guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Digits, Hint};
//! use bulls_cows::solver::CandidatePool;
//!
//! let secret = Digits::new("5049").unwrap();
//! let mut pool = CandidatePool::seeded(4, 7).unwrap();
//!
//! while let Some(guess) = pool.guess() {
//!     let hint = Hint::score(&guess, &secret);
//!     pool.eliminate(hint).unwrap();
//!     if hint.is_solved(4) {
//!         break;
//!     }
//! }
//! assert_eq!(pool.solution(), Some(&secret));
//! ```

// Core domain types
pub mod core;

// Candidate pool and secret holder
pub mod solver;

// Per-game state for both modes
pub mod session;

// Shared game settings
pub mod config;

// Stderr logger for the binary
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
