//! Zombordle
//!
//! A daily word-guessing game for the terminal: type a guess into a row of
//! letter tiles, submit it, and read the colored feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use zombordle::core::{reduce, Action, GameStatus, GuessState};
//!
//! let state = GuessState::new("crane");
//! let state = reduce(state, Action::SetGuess("crane".to_string()));
//! let state = reduce(state, Action::RegisterGuess);
//!
//! assert_eq!(state.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Tiled guess input
pub mod input;

// Word lists and the word of the day
pub mod wordlists;

// Settings file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
