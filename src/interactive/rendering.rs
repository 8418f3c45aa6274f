//! TUI rendering with ratatui
//!
//! Layout and widgets for both game modes.

use super::app::{App, GameMode, MessageStyle};
use crate::output::formatters::{elimination_progress, hint_to_pegs};
use crate::solver::candidate_count;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates are listed individually below this count
const PREVIEW_LIMIT: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🐂 BULLS AND COWS - {} ({} digits)",
        app.mode.label(),
        app.config.digits
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Current guess
            Constraint::Percentage(25), // Candidates or rules
            Constraint::Percentage(40), // History
        ])
        .split(area);

    render_current(f, app, chunks[0]);
    match app.mode {
        GameMode::BotGuesses => render_candidates(f, app, chunks[1]),
        GameMode::YouGuess => render_rules(f, app, chunks[1]),
    }
    render_history(f, app, chunks[2]);
}

fn render_current(f: &mut Frame, app: &App, area: Rect) {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let content = match app.mode {
        GameMode::BotGuesses => match app.pending_guess {
            Some(guess) => vec![
                Line::from(vec![
                    Span::raw(format!("Attempt {}: ", app.history.len() + 1)),
                    Span::styled(guess.to_string(), highlight),
                ]),
                Line::from(""),
                Line::from("How many bulls (A) and cows (B)?"),
            ],
            None => vec![Line::from("Game over")],
        },
        GameMode::YouGuess => match app.revealed {
            Some(answer) => vec![Line::from(vec![
                Span::raw("The number was "),
                Span::styled(answer.to_string(), highlight),
            ])],
            None if app.is_finished() => vec![Line::from(Span::styled(
                "You found it!",
                Style::default().fg(Color::Green),
            ))],
            None => vec![
                Line::from(format!("Attempt {}", app.history.len() + 1)),
                Line::from(""),
                Line::from(format!(
                    "Guess a {}-digit number with distinct digits",
                    app.config.digits
                )),
            ],
        },
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.candidates_remaining().unwrap_or(0);

    let content = if remaining == 0 {
        vec![Line::from("No candidates left")]
    } else if let Some(candidates) = app.candidate_preview(PREVIEW_LIMIT) {
        let listed = candidates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        vec![
            Line::from(format!("Remaining ({remaining}):")),
            Line::from(Span::styled(listed, Style::default().fg(Color::Green))),
        ]
    } else {
        vec![
            Line::from(format!("{remaining} candidates remaining")),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (remaining as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_rules(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from("A = right digit, right place"),
        Line::from("B = right digit, wrong place"),
        Line::from(format!("{}A0B wins", app.config.digits)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Rules ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let digits = app.config.digits;
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let mut content = format!(
                "{:2}: {} {} {}",
                i + 1,
                entry.guess,
                entry.hint,
                hint_to_pegs(entry.hint, digits)
            );
            if let Some(remaining) = entry.remaining {
                content.push_str(&format!(" → {remaining}"));
            }
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let gauge = match app.candidates_remaining() {
        Some(remaining) => {
            let total = candidate_count(app.config.digits);
            let progress = elimination_progress(remaining, total);
            Gauge::default()
                .block(
                    Block::default()
                        .title(" Search Space ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                )
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(progress)
                .label(format!("{remaining}/{total} candidates"))
        }
        None => {
            let best = app
                .history
                .iter()
                .map(|entry| usize::from(entry.hint.bulls()))
                .max()
                .unwrap_or(0);
            let digits = app.config.digits.max(1);
            Gauge::default()
                .block(
                    Block::default()
                        .title(" Best Guess ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                )
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(best as f64 / digits as f64)
                .label(format!("{best}/{digits} bulls"))
        }
    };

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.is_finished() {
        (" Game over | Press 'n' for new game or 'q' to quit ", Color::Green)
    } else {
        match app.mode {
            GameMode::BotGuesses => (" Enter Hint (e.g. 1A2B or 1 2) ", Color::Yellow),
            GameMode::YouGuess => (" Enter Guess | 'r' to reveal ", Color::Cyan),
        }
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode.label())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Avg: {:.1}",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.average_rounds()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New | Tab: Switch Mode | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
