//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, GameMode, run_tui};
