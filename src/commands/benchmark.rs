//! Benchmark command
//!
//! Plays the bot against random secrets and measures rounds and throughput.

use super::solve::play_out;
use crate::config::GameConfig;
use crate::core::Digits;
use crate::solver::generate_all;
use anyhow::Result;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` games against secrets drawn at random
///
/// Games run in parallel; with a seed, secrets and guesses are reproducible.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_benchmark(config: &GameConfig, count: usize) -> Result<BenchmarkResult> {
    let config = config.validate()?;
    let all = generate_all(config.digits)?;
    let mut rng = config.rng();
    let secrets: Vec<Digits> = (0..count)
        .filter_map(|_| all.choose(&mut rng).copied())
        .collect();

    benchmark_secrets(&config, &secrets)
}

/// Play one game per secret and aggregate the rounds used
///
/// # Errors
///
/// Returns an error if a secret does not match the configured digit count.
pub fn benchmark_secrets(config: &GameConfig, secrets: &[Digits]) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let rounds: Vec<Option<usize>> = secrets
        .par_iter()
        .enumerate()
        .map(|(i, &secret)| -> Result<Option<usize>> {
            let pool = config.pool_for(i)?;
            let result = play_out(pool, secret, config.max_rounds)?;
            Ok(result.success.then(|| result.rounds()))
        })
        .collect::<Result<_>>()?;

    let duration = start.elapsed();
    let solved: Vec<usize> = rounds.into_iter().flatten().collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &r in &solved {
        *distribution.entry(r).or_insert(0) += 1;
    }

    let total_games = secrets.len();
    let total_rounds: usize = solved.iter().sum();
    let average_rounds = if solved.is_empty() {
        0.0
    } else {
        total_rounds as f64 / solved.len() as f64
    };

    Ok(BenchmarkResult {
        total_games,
        solved: solved.len(),
        total_rounds,
        average_rounds,
        min_rounds: solved.iter().copied().min().unwrap_or(0),
        max_rounds: solved.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(digits: usize, seed: u64) -> GameConfig {
        GameConfig::new(digits, Some(seed)).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&config(4, 1), 20).unwrap();

        assert_eq!(result.total_games, 20);
        assert_eq!(result.solved, 20);
        assert!(result.average_rounds >= 1.0);
        assert!(result.min_rounds >= 1);
        assert!(result.max_rounds <= 11);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&config(3, 2), 30).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        let weighted: usize = result.distribution.iter().map(|(r, n)| r * n).sum();
        assert_eq!(weighted, result.total_rounds);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let a = run_benchmark(&config(4, 7), 10).unwrap();
        let b = run_benchmark(&config(4, 7), 10).unwrap();
        assert_eq!(a.total_rounds, b.total_rounds);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_empty() {
        let result = run_benchmark(&config(4, 1), 0).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_rounds, 0);
        assert!(result.average_rounds.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(&config(4, 3), 25).unwrap();

        assert!(result.average_rounds >= result.min_rounds as f64);
        assert!(result.average_rounds <= result.max_rounds as f64);
    }

    #[test]
    fn benchmark_rejects_mismatched_secret() {
        let secrets = [Digits::new("123").unwrap()];
        assert!(benchmark_secrets(&config(4, 1), &secrets).is_err());
    }
}
