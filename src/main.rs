//! Bulls and Cows - CLI
//!
//! Play against the bot in a TUI or plain text, or let it play itself.

use anyhow::{Result, bail};
use bulls_cows::{
    commands::{
        SolveConfig, print_test_all_statistics, run_benchmark, run_bot_mode, run_guess_mode,
        run_test_all, solve_secret,
    },
    config::{DEFAULT_DIGITS, GameConfig},
    interactive::{App, GameMode, run_tui},
    logging,
    output::{print_benchmark_result, print_solve_result},
};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows: guess a number of distinct digits from A/B hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in the secret (1-10)
    #[arg(
        short,
        long,
        global = true,
        env = "BULLS_COWS_DIGITS",
        default_value_t = DEFAULT_DIGITS
    )]
    digits: usize,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start with you guessing the bot's number
        #[arg(long)]
        you_guess: bool,
    },

    /// Think of a number and let the bot guess it (plain text)
    Bot,

    /// Guess the bot's number (plain text)
    Guess,

    /// Let the bot solve a given secret
    Solve {
        /// The secret to solve
        secret: String,

        /// Round cap for the game
        #[arg(long)]
        max_rounds: Option<usize>,
    },

    /// Benchmark the bot against random secrets
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },

    /// Play against every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.digits, cli.seed)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { you_guess: false });

    // No logger while the TUI owns the screen
    if matches!(command, Commands::Play { .. }) {
        log::set_max_level(LevelFilter::Off);
    } else {
        logging::init(logging::level_for(cli.verbose));
    }

    match command {
        Commands::Play { you_guess } => {
            let mode = if you_guess {
                GameMode::YouGuess
            } else {
                GameMode::BotGuesses
            };
            run_tui(App::new(config, mode)?)
        }
        Commands::Bot => run_bot_mode(&config, &mut io::stdin().lock(), &mut io::stdout()),
        Commands::Guess => run_guess_mode(&config, &mut io::stdin().lock(), &mut io::stdout()),
        Commands::Solve { secret, max_rounds } => {
            run_solve_command(config, secret, max_rounds, cli.verbose > 0)
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {count} random {}-digit secrets...",
                config.digits
            );
            let result = run_benchmark(&config, count)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => run_test_all_command(&config, limit),
    }
}

fn run_solve_command(
    mut game: GameConfig,
    secret: String,
    max_rounds: Option<usize>,
    verbose: bool,
) -> Result<()> {
    if let Some(max_rounds) = max_rounds {
        game.max_rounds = max_rounds;
    }
    let result = solve_secret(&SolveConfig::new(secret, game))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_test_all_command(config: &GameConfig, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Bulls and Cows Test ");
    println!("{}", "═".repeat(70));
    println!("\nDigits: {}", config.digits);
    if let Some(seed) = config.seed {
        println!("Seed:   {seed}");
    }
    println!();

    let stats = run_test_all(config, limit)?;
    print_test_all_statistics(&stats);

    if !stats.all_solved() {
        bail!(
            "{} of {} games did not find the secret",
            stats.failed.len(),
            stats.total_secrets
        );
    }
    Ok(())
}
