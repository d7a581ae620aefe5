//! Interactive TUI game

mod app;
pub mod board;
mod rendering;
mod terminal;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use terminal::TerminalGuard;
