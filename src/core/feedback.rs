//! Per-tile feedback for a submitted guess
//!
//! Scoring follows the usual rules: exact matches are marked first and
//! consume their letter, then remaining letters are marked present while the
//! answer still has unconsumed copies of them.

use super::Word;

/// State of a single tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Not yet typed
    Empty,
    /// Typed into the current row, not yet submitted
    Pending,
    /// Letter not in the answer (or all copies already used)
    Absent,
    /// Letter in the answer at another position
    Present,
    /// Letter at the correct position
    Correct,
}

impl TileState {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Empty | Self::Pending => '⬜',
        }
    }
}

/// Score `guess` against `answer`
///
/// Positions past the end of the answer are reported as `Absent`.
///
/// # Examples
/// ```
/// use zombordle::core::{score, TileState, Word};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("slate").unwrap();
/// let tiles = score(&guess, &answer);
///
/// assert_eq!(tiles[2], TileState::Correct);
/// assert_eq!(tiles[0], TileState::Absent);
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Vec<TileState> {
    let guess_chars = guess.chars();
    let answer_chars = answer.chars();
    let mut result = vec![TileState::Absent; guess_chars.len()];
    let mut answer_available = answer.char_counts();

    // First pass: greens
    for (i, &letter) in guess_chars.iter().enumerate() {
        if answer_chars.get(i) == Some(&letter) {
            result[i] = TileState::Correct;
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from what is left
    for (i, &letter) in guess_chars.iter().enumerate() {
        if result[i] == TileState::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            result[i] = TileState::Present;
            *count -= 1;
        }
    }

    result
}

/// Render tiles as an emoji string like "🟩🟨⬜🟩🟨"
#[must_use]
pub fn to_emoji(tiles: &[TileState]) -> String {
    tiles.iter().map(|t| t.emoji()).collect()
}

/// True when every tile is `Correct`
#[must_use]
pub fn is_solved(tiles: &[TileState]) -> bool {
    !tiles.is_empty() && tiles.iter().all(|&t| t == TileState::Correct)
}
