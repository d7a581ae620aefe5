//! Command implementations

pub mod setup;
pub mod simple;
pub mod today;

pub use setup::{GameSetup, Puzzle};
pub use simple::run_simple;
pub use today::run_today;
