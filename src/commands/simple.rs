//! Simple interactive CLI modes
//!
//! Text-based front-ends without the TUI:
//! - bot mode: think of a number, the bot guesses it from your hints
//! - guess mode: the bot holds a number, you guess it from its hints
//!
//! Both read from any `BufRead` and write to any `Write` so they can be scripted.

use crate::config::GameConfig;
use crate::core::{Digits, Hint, HintError, MAX_DIGITS};
use crate::output::formatters::hint_to_pegs;
use crate::session::{BotSession, BotTurn, PlayerSession, PlayerTurn};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a result (win, contradiction, or reveal)
    Finished,
    /// The player asked for a fresh game
    NewGame,
    /// The player asked to leave, or input ran out
    Quit,
}

/// Parse a hint typed by a player
///
/// Accepts the wire form (`1A2B`, any case) or the two counts separated by
/// spaces or a comma (`1 2`, `1,2`). A lone count means no cows and an empty
/// count beside a comma means zero. Counts of 10 are only expressible in the
/// numeric form.
///
/// # Errors
/// Returns `HintError::Malformed` for unreadable input and
/// `HintError::OutOfRange` when the counts exceed the digit length.
pub fn parse_hint_input(input: &str, digits: usize) -> Result<Hint, HintError> {
    let trimmed = input.trim();
    let upper = trimmed.to_ascii_uppercase();
    if upper.ends_with('B') {
        return Hint::parse_for_len(&upper, digits);
    }

    let counts: Vec<&str> = if trimmed.contains(',') {
        trimmed.split(',').map(str::trim).collect()
    } else {
        trimmed.split_whitespace().collect()
    };
    let count = |part: &str| match part {
        "" => Ok(0),
        _ => part
            .parse::<u8>()
            .ok()
            .filter(|&c| usize::from(c) <= MAX_DIGITS)
            .ok_or_else(|| HintError::Malformed(trimmed.to_string())),
    };

    let hint = match counts.as_slice() {
        &[bulls] => Hint::new(count(bulls)?, 0),
        &[bulls, cows] => Hint::new(count(bulls)?, count(cows)?),
        _ => return Err(HintError::Malformed(trimmed.to_string())),
    };
    hint.check_len(digits)
}

/// Run bot mode: the bot guesses a number the player keeps in mind
///
/// # Errors
///
/// Returns an error on I/O failure or an invalid configuration.
pub fn run_bot_mode<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let config = config.validate()?;
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "  Bulls and Cows: the bot guesses your number")?;
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "\nThink of a {}-digit number with no repeated digits.",
        config.digits
    )?;
    writeln!(
        out,
        "After each guess, answer with a hint such as 1A2B (or '1 2'):"
    )?;
    writeln!(out, "  A = right digit, right place   B = right digit, wrong place")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    for game in 0.. {
        let mut session = BotSession::new(config.pool_for(game)?);

        match play_bot_game(&mut session, input, out)? {
            GameEnd::Quit => break,
            GameEnd::NewGame => writeln!(out, "\n🔄 New game started!\n")?,
            GameEnd::Finished => {
                if !ask_play_again(input, out)? {
                    break;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Play one bot-mode game to its end
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_bot_game<G: rand::Rng, R: BufRead, W: Write>(
    session: &mut BotSession<G>,
    input: &mut R,
    out: &mut W,
) -> Result<GameEnd> {
    let digits = session.pool().digits();
    let mut turn = session.start()?;

    loop {
        match turn {
            BotTurn::Guess {
                guess,
                round,
                remaining,
            } => {
                let note = if session.is_certain() {
                    " (it has to be this one!)".to_string()
                } else {
                    format!(" ({remaining} candidates left)")
                };
                writeln!(
                    out,
                    "Attempt {round}: {}{}",
                    guess.to_string().bright_yellow().bold(),
                    note.bright_black()
                )?;
            }
            BotTurn::Solved { rounds, .. } => {
                writeln!(
                    out,
                    "{}",
                    format!("🎉 Bot used {rounds} attempt(s) to guess the number")
                        .green()
                        .bold()
                )?;
                return Ok(GameEnd::Finished);
            }
            BotTurn::Contradiction { .. } => {
                writeln!(
                    out,
                    "{}",
                    "❌ Error: your hints were wrong, no number fits them all.".red()
                )?;
                return Ok(GameEnd::Finished);
            }
        }

        turn = loop {
            let Some(line) = read_line(input, out, "Hint")? else {
                return Ok(GameEnd::Quit);
            };
            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(GameEnd::Quit),
                "new" | "n" => return Ok(GameEnd::NewGame),
                _ => {}
            }

            match parse_hint_input(&line, digits) {
                Ok(hint) => break session.submit_hint(hint)?,
                Err(e) => writeln!(out, "⚠️  {e}")?,
            }
        };
    }
}

/// Run guess mode: the player guesses a number the bot holds
///
/// # Errors
///
/// Returns an error on I/O failure or an invalid configuration.
pub fn run_guess_mode<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let config = config.validate()?;
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "  Bulls and Cows: guess the bot's number")?;
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "\nI'm thinking of a {}-digit number with no repeated digits.",
        config.digits
    )?;
    writeln!(out, "Each hint XAYB means X digits in place, Y digits elsewhere.")?;
    writeln!(
        out,
        "Commands: 'reveal' to give up, 'new' for a new game, 'quit' to exit\n"
    )?;

    for game in 0.. {
        let mut session = PlayerSession::random(config.digits, &mut config.rng_for(game))?;

        match play_guess_game(&mut session, input, out)? {
            GameEnd::Quit => break,
            GameEnd::NewGame => writeln!(out, "\n🔄 New game started!\n")?,
            GameEnd::Finished => {
                if !ask_play_again(input, out)? {
                    break;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Play one guess-mode game to its end
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_guess_game<R: BufRead, W: Write>(
    session: &mut PlayerSession,
    input: &mut R,
    out: &mut W,
) -> Result<GameEnd> {
    let digits = session.digits();

    loop {
        let Some(line) = read_line(input, out, "Your guess")? else {
            return Ok(GameEnd::Quit);
        };
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(GameEnd::Quit),
            "new" | "n" => return Ok(GameEnd::NewGame),
            "reveal" | "give up" | "answer" => {
                let (answer, rounds) = session.reveal();
                writeln!(out, "Answer: {}", answer.to_string().bright_yellow().bold())?;
                writeln!(
                    out,
                    "{}",
                    format!("You failed to guess the number using {rounds} attempt(s)").red()
                )?;
                return Ok(GameEnd::Finished);
            }
            _ => {}
        }

        let guess = match Digits::with_len(&line, digits) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(out, "⚠️  {e}")?;
                continue;
            }
        };

        match session.guess(&guess)? {
            PlayerTurn::Hint { hint, round } => {
                writeln!(
                    out,
                    "Attempt {round}: {guess} → {} {}",
                    hint.to_string().bright_cyan().bold(),
                    hint_to_pegs(hint, digits)
                )?;
            }
            PlayerTurn::Solved { rounds } => {
                writeln!(out, "Attempt {rounds}: {guess} → {}", Hint::solved(digits))?;
                writeln!(
                    out,
                    "{}",
                    format!("🎉 You used {rounds} attempt(s) to guess the number")
                        .green()
                        .bold()
                )?;
                return Ok(GameEnd::Finished);
            }
        }
    }
}

fn ask_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    let answer = read_line(input, out, "Play again? (yes/no)")?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y")
    ))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
