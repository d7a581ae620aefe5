//! Formatting utilities for terminal output

use crate::commands::setup::Puzzle;
use crate::core::{GameStatus, GuessState, TileState, to_emoji};
use colored::{ColoredString, Colorize};

/// Color one letter the way its tile would look on the board
#[must_use]
pub fn colored_tile(letter: char, state: TileState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black().bold(),
        TileState::Pending | TileState::Empty => text.bold(),
    }
}

/// A scored guess as a row of colored letters
#[must_use]
pub fn colored_row(guess: &str, tiles: &[TileState]) -> String {
    guess
        .chars()
        .zip(tiles)
        .map(|(letter, &state)| colored_tile(letter, state).to_string())
        .collect()
}

/// Spoiler-free result grid, e.g. "Zombordle Daily #12 3/6" followed by one
/// emoji row per guess
#[must_use]
pub fn share_text(puzzle: Puzzle, state: &GuessState) -> String {
    let score = match state.status() {
        GameStatus::Won => state.guesses.len().to_string(),
        GameStatus::Lost | GameStatus::Playing => "X".to_string(),
    };

    let mut text = format!("Zombordle {} {score}/{}\n", puzzle.label(), state.max_attempts);
    for tiles in state.scored_guesses() {
        text.push('\n');
        text.push_str(&to_emoji(&tiles));
    }
    text
}
