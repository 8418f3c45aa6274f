//! Display functions for command results

use super::formatters::{create_progress_bar, elimination_progress, hint_to_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::candidate_count;
use colored::Colorize;

/// Print the result of a self-play game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let digits = result.secret.len();
    let total = candidate_count(digits);

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let round = i + 1;
        println!(
            "\nRound {}: {} → {} {}",
            round,
            step.guess,
            step.hint.to_string().bright_cyan().bold(),
            hint_to_pegs(step.hint, digits)
        );

        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );

        if verbose {
            let progress = elimination_progress(step.candidates_after, total);
            println!(
                "  Search:     [{}] {:.0}%",
                create_progress_bar(progress, 1.0, 30).green(),
                progress * 100.0
            );
            if step.candidates_after > 0 {
                let factor = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({factor:.1}x reduction)",
                    factor.log2()
                );
            }
        }
    }

    println!();
    if let Some(round) = result.determined_at {
        println!("Only one candidate left after round {round}");
    }
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.rounds())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Games solved:     {}", result.solved);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rounds in result.min_rounds..=result.max_rounds {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rounds:2}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }
}
