//! Test all secrets - exhaustive solver evaluation
//!
//! Plays the bot against every possible secret and collects statistics.

use super::solve::play_out;
use crate::config::GameConfig;
use crate::core::Digits;
use crate::solver::generate_all;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from playing against a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Digits,
    pub rounds: usize,
    pub determined_at: Option<usize>,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub digits: usize,
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: Vec<Digits>,
    pub round_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Worst-case round after which the secret was the only candidate
    pub max_determined_at: usize,
    pub hardest: Vec<(Digits, usize)>,
}

impl TestAllStatistics {
    /// Every game found its secret
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Play one game against every secret (or the first `limit`)
///
/// Each game uses its own random stream derived from the configured seed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_test_all(config: &GameConfig, limit: Option<usize>) -> Result<TestAllStatistics> {
    let config = config.validate()?;
    let mut secrets = generate_all(config.digits)?;
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results = test_secrets(&config, &secrets, &pb)?;
    pb.finish_with_message("Complete!");

    let stats = summarize(config.digits, results, start.elapsed());
    info!(
        "tested {} secrets, {} solved, worst case {} rounds",
        stats.total_secrets, stats.solved, stats.max_rounds
    );
    Ok(stats)
}

fn test_secrets(
    config: &GameConfig,
    secrets: &[Digits],
    pb: &ProgressBar,
) -> Result<Vec<SecretTestResult>> {
    secrets
        .par_iter()
        .enumerate()
        .map(|(i, &secret)| -> Result<SecretTestResult> {
            let pool = config.pool_for(i)?;
            let result = play_out(pool, secret, config.max_rounds)?;
            pb.inc(1);
            Ok(SecretTestResult {
                secret,
                rounds: result.rounds(),
                determined_at: result.determined_at,
                success: result.success,
            })
        })
        .collect()
}

fn summarize(digits: usize, results: Vec<SecretTestResult>, total_time: Duration) -> TestAllStatistics {
    let total_secrets = results.len();
    let (solved, failed): (Vec<_>, Vec<_>) = results.into_iter().partition(|r| r.success);

    let mut round_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in &solved {
        *round_distribution.entry(result.rounds).or_insert(0) += 1;
    }

    let total_rounds: usize = solved.iter().map(|r| r.rounds).sum();
    let average_rounds = if solved.is_empty() {
        0.0
    } else {
        total_rounds as f64 / solved.len() as f64
    };

    let mut hardest: Vec<(Digits, usize)> = solved.iter().map(|r| (r.secret, r.rounds)).collect();
    hardest.sort_by_key(|&(secret, rounds)| (std::cmp::Reverse(rounds), secret));
    hardest.truncate(10);

    TestAllStatistics {
        digits,
        total_secrets,
        solved: solved.len(),
        failed: failed.iter().map(|r| r.secret).collect(),
        round_distribution,
        total_time,
        average_rounds,
        min_rounds: solved.iter().map(|r| r.rounds).min().unwrap_or(0),
        max_rounds: solved.iter().map(|r| r.rounds).max().unwrap_or(0),
        max_determined_at: solved
            .iter()
            .filter_map(|r| r.determined_at)
            .max()
            .unwrap_or(0),
        hardest,
    }
}

/// Print the statistics from an exhaustive run
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({} digits) ", stats.digits);
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_secrets);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.all_solved() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
        for secret in stats.failed.iter().take(10) {
            println!("    {}", secret.to_string().red());
        }
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_rounds.to_string().green(),
        stats.max_rounds.to_string().yellow()
    );
    println!(
        "  Determined by round: {} (worst case)",
        stats.max_determined_at
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:     {:.3}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.round_distribution.values().copied().max().unwrap_or(1);
    for rounds in stats.min_rounds..=stats.max_rounds {
        let count = stats.round_distribution.get(&rounds).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {rounds:2} rounds: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, rounds) in stats.hardest.iter().take(5) {
            println!("  {} ({rounds} rounds)", secret.to_string().yellow());
        }
    }

    println!("\n{}", "═".repeat(70));
}
