//! TUI application state and logic

use crate::commands::simple::parse_hint_input;
use crate::config::GameConfig;
use crate::core::{Digits, Hint};
use crate::session::{BotSession, BotTurn, PlayerSession, PlayerTurn};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest hint a player can type, e.g. `10, 0`
const MAX_HINT_INPUT: usize = 8;

/// Which side is guessing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// The player keeps a number in mind and answers the bot's guesses
    BotGuesses,
    /// The bot holds a number and the player guesses it
    YouGuess,
}

impl GameMode {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::BotGuesses => Self::YouGuess,
            Self::YouGuess => Self::BotGuesses,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BotGuesses => "Bot guesses",
            Self::YouGuess => "You guess",
        }
    }
}

/// The session behind the current game
#[derive(Debug)]
pub enum Game {
    Bot(BotSession),
    Player(PlayerSession),
}

/// Application state
pub struct App {
    pub config: GameConfig,
    pub mode: GameMode,
    pub game: Game,
    pub games_started: usize,
    pub history: Vec<HistoryEntry>,
    pub pending_guess: Option<Digits>,
    pub revealed: Option<Digits>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry {
    pub guess: Digits,
    pub hint: Hint,
    /// Candidates left after the hint; only tracked while the bot guesses
    pub remaining: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_rounds: usize,
}

impl Statistics {
    fn record_win(&mut self, rounds: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.total_rounds += rounds;
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
    }

    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.games_won as f64
        }
    }
}

impl App {
    /// Build the app and start a first game in `mode`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GameConfig, mode: GameMode) -> Result<Self> {
        let config = config.validate()?;
        let game = Self::build_game(&config, mode, 0)?;

        let mut app = Self {
            config,
            mode,
            game,
            games_started: 1,
            history: Vec::new(),
            pending_guess: None,
            revealed: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.begin_game();
        Ok(app)
    }

    fn build_game(config: &GameConfig, mode: GameMode, index: usize) -> Result<Game> {
        Ok(match mode {
            GameMode::BotGuesses => Game::Bot(BotSession::new(config.pool_for(index)?)),
            GameMode::YouGuess => Game::Player(PlayerSession::random(
                config.digits,
                &mut config.rng_for(index),
            )?),
        })
    }

    fn begin_game(&mut self) {
        match self.mode {
            GameMode::BotGuesses => self.add_message(
                &format!(
                    "Think of a {}-digit number with no repeated digits.",
                    self.config.digits
                ),
                MessageStyle::Info,
            ),
            GameMode::YouGuess => self.add_message(
                &format!(
                    "I'm thinking of a {}-digit number. Type your guess.",
                    self.config.digits
                ),
                MessageStyle::Info,
            ),
        }

        let Game::Bot(session) = &mut self.game else {
            return;
        };
        match session.start() {
            Ok(BotTurn::Guess { guess, .. }) => {
                self.pending_guess = Some(guess);
                self.add_message(
                    "Answer each guess with a hint like 1A2B or '1 2'.",
                    MessageStyle::Info,
                );
            }
            Ok(_) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Abandon the current game and start a fresh one in the same mode
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built.
    pub fn new_game(&mut self) -> Result<()> {
        if !self.is_finished() && !self.history.is_empty() {
            self.stats.record_loss();
        }

        self.game = Self::build_game(&self.config, self.mode, self.games_started)?;
        self.games_started += 1;
        self.history.clear();
        self.pending_guess = None;
        self.revealed = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.begin_game();
        Ok(())
    }

    /// Flip between the two modes, starting a new game
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built.
    pub fn switch_mode(&mut self) -> Result<()> {
        self.mode = self.mode.toggle();
        self.new_game()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        match &self.game {
            Game::Bot(session) => session.is_finished(),
            Game::Player(session) => session.is_finished(),
        }
    }

    /// Candidates the bot still considers, when the bot is guessing
    #[must_use]
    pub fn candidates_remaining(&self) -> Option<usize> {
        match &self.game {
            Game::Bot(session) => Some(session.pool().len()),
            Game::Player(_) => None,
        }
    }

    /// Remaining candidates, if there are few enough to list
    #[must_use]
    pub fn candidate_preview(&self, limit: usize) -> Option<&[Digits]> {
        match &self.game {
            Game::Bot(session) if session.pool().len() <= limit => {
                Some(session.pool().candidates())
            }
            _ => None,
        }
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if self.is_finished() {
            self.add_message("Game over. Press 'n' for a new game.", MessageStyle::Info);
            return;
        }
        if input.trim().is_empty() {
            return;
        }

        match self.mode {
            GameMode::BotGuesses => self.submit_hint(&input),
            GameMode::YouGuess => self.submit_guess(&input),
        }
    }

    fn submit_hint(&mut self, input: &str) {
        let hint = match parse_hint_input(input, self.config.digits) {
            Ok(hint) => hint,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let Game::Bot(session) = &mut self.game else {
            return;
        };
        let Some(guess) = session.current_guess() else {
            return;
        };
        let turn = match session.submit_hint(hint) {
            Ok(turn) => turn,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        let remaining = session.pool().len();
        let certain = session.is_certain();

        self.history.push(HistoryEntry {
            guess,
            hint,
            remaining: Some(remaining),
        });

        match turn {
            BotTurn::Guess { guess, .. } => {
                self.pending_guess = Some(guess);
                if certain {
                    self.add_message(
                        &format!("It has to be {guess}!"),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!("{remaining} candidates remaining"),
                        MessageStyle::Info,
                    );
                }
            }
            BotTurn::Solved { answer, rounds } => {
                self.pending_guess = None;
                self.stats.record_win(rounds);
                self.add_message(
                    &format!("🎉 Bot guessed {answer} in {rounds} attempt(s)"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            BotTurn::Contradiction { .. } => {
                self.pending_guess = None;
                self.stats.record_loss();
                self.add_message(
                    "Your hints were wrong: no number fits them all.",
                    MessageStyle::Error,
                );
            }
        }
    }

    fn submit_guess(&mut self, input: &str) {
        let guess = match Digits::with_len(input, self.config.digits) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let Game::Player(session) = &mut self.game else {
            return;
        };
        let turn = match session.guess(&guess) {
            Ok(turn) => turn,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match turn {
            PlayerTurn::Hint { hint, round } => {
                self.history.push(HistoryEntry {
                    guess,
                    hint,
                    remaining: None,
                });
                self.add_message(&format!("Attempt {round}: {hint}"), MessageStyle::Info);
            }
            PlayerTurn::Solved { rounds } => {
                self.history.push(HistoryEntry {
                    guess,
                    hint: Hint::solved(self.config.digits),
                    remaining: None,
                });
                self.stats.record_win(rounds);
                self.add_message(
                    &format!("🎉 You used {rounds} attempt(s) to guess the number"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Give up on the bot's number
    pub fn reveal(&mut self) {
        let Game::Player(session) = &mut self.game else {
            self.add_message("Nothing to reveal: the bot is guessing.", MessageStyle::Error);
            return;
        };
        if session.is_finished() {
            return;
        }

        let (answer, rounds) = session.reveal();
        self.revealed = Some(answer);
        self.stats.record_loss();
        self.add_message(
            &format!("Answer: {answer}. You failed to guess it using {rounds} attempt(s)"),
            MessageStyle::Error,
        );
    }

    fn accepts(&self, c: char) -> bool {
        if self.is_finished() {
            return false;
        }
        match self.mode {
            GameMode::YouGuess => {
                c.is_ascii_digit() && self.input_buffer.len() < self.config.digits
            }
            GameMode::BotGuesses => {
                matches!(c, '0'..='9' | 'a' | 'A' | 'b' | 'B' | ' ' | ',')
                    && self.input_buffer.len() < MAX_HINT_INPUT
            }
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new session cannot be built.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game()?,
            KeyCode::Char('r') => self.reveal(),
            KeyCode::Tab => self.switch_mode()?,
            KeyCode::Char(c) => {
                if self.accepts(c) {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
