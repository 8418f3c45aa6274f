//! Self-play command
//!
//! The bot plays against a known secret, receiving truthful hints, and
//! records every step until it hits the secret.

use crate::config::GameConfig;
use crate::core::{Digits, Hint};
use crate::solver::{CandidatePool, SecretHolder};
use anyhow::{Context, Result, bail};
use rand::Rng;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, game: GameConfig) -> Self {
        Self { secret, game }
    }
}

/// Result of a self-play game
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub secret: Digits,
    pub steps: Vec<GuessStep>,
    /// Round after which exactly one candidate was left
    pub determined_at: Option<usize>,
}

impl SolveResult {
    /// Guesses used, the winning one included
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess in a self-play game
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub guess: Digits,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve the configured secret
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a number with `config.game.digits` distinct digits
/// - The candidate pool cannot be built for that digit count
pub fn solve_secret(config: &SolveConfig) -> Result<SolveResult> {
    let game = config.game.validate()?;
    let secret = Digits::with_len(&config.secret, game.digits)
        .with_context(|| format!("invalid secret '{}'", config.secret))?;

    play_out(game.pool()?, secret, game.max_rounds)
}

/// Play a pool against a secret until the secret is guessed or `max_rounds` run out
///
/// # Errors
///
/// Returns an error if the pool and secret disagree on the digit count.
pub fn play_out<R: Rng>(
    mut pool: CandidatePool<R>,
    secret: Digits,
    max_rounds: usize,
) -> Result<SolveResult> {
    if pool.digits() != secret.len() {
        bail!(
            "pool plays {} digits but the secret has {}",
            pool.digits(),
            secret.len()
        );
    }

    let mut holder = SecretHolder::new(secret);
    let mut steps = Vec::new();
    let mut determined_at = None;
    let mut success = false;

    while steps.len() < max_rounds {
        let candidates_before = pool.len();
        let Some(guess) = pool.guess() else {
            break;
        };

        let hint = holder.get_hint(&guess)?;
        let candidates_after = pool.eliminate(hint)?;

        steps.push(GuessStep {
            guess,
            hint,
            candidates_before,
            candidates_after,
        });

        if candidates_after == 1 && determined_at.is_none() {
            determined_at = Some(pool.round());
        }
        if hint.is_solved(secret.len()) {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        secret,
        steps,
        determined_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, seed: u64) -> SolveConfig {
        SolveConfig::new(
            secret.to_string(),
            GameConfig::new(4, Some(seed)).unwrap(),
        )
    }

    #[test]
    fn solve_secret_succeeds() {
        let result = solve_secret(&config("5049", 1)).unwrap();

        assert!(result.success);
        assert_eq!(result.secret.to_string(), "5049");
        let last = result.steps.last().unwrap();
        assert_eq!(last.guess, result.secret);
        assert_eq!(last.hint.to_string(), "4A0B");
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let result = solve_secret(&config("0918", 2)).unwrap();

        assert_eq!(result.steps[0].candidates_before, 5040);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert_eq!(Hint::score(&step.guess, &result.secret), step.hint);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn determined_round_is_not_after_the_win() {
        let result = solve_secret(&config("7362", 3)).unwrap();
        let determined = result.determined_at.unwrap();
        assert!(determined <= result.rounds());
    }

    #[test]
    fn same_seed_same_game() {
        let a = solve_secret(&config("2481", 9)).unwrap();
        let b = solve_secret(&config("2481", 9)).unwrap();
        let guesses_a: Vec<_> = a.steps.iter().map(|s| s.guess).collect();
        let guesses_b: Vec<_> = b.steps.iter().map(|s| s.guess).collect();
        assert_eq!(guesses_a, guesses_b);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        assert!(solve_secret(&config("1123", 1)).is_err());
        assert!(solve_secret(&config("123", 1)).is_err());
        assert!(solve_secret(&config("12a4", 1)).is_err());
    }

    #[test]
    fn solve_respects_round_cap() {
        let mut config = config("9876", 4);
        config.game.max_rounds = 1;

        let result = solve_secret(&config).unwrap();
        assert_eq!(result.rounds(), 1);
    }

    #[test]
    fn play_out_rejects_length_mismatch() {
        let pool = CandidatePool::seeded(3, 0).unwrap();
        let secret = Digits::new("1234").unwrap();
        assert!(play_out(pool, secret, 10).is_err());
    }
}
