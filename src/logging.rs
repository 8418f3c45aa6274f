//! Minimal stderr logger for the `log` facade
//!
//! The library only emits records; the binary decides where they go.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".green(),
            Level::Debug => "debug".cyan(),
            Level::Trace => "trace".bright_black(),
        };
        eprintln!("[{tag}] {}", record.args());
    }

    fn flush(&self) {}
}

/// Map a `-v` count to a level filter: warnings by default, then info, debug, trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger
///
/// Calling this more than once only updates the level.
pub fn init(level: LevelFilter) {
    // A logger may already be installed (tests, repeated init); the level still applies
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
