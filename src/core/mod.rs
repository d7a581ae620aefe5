//! Core domain types for the game
//!
//! Words, tile feedback and the guess reducer. Everything here is pure and
//! independent of the terminal.

mod feedback;
mod guess;
mod word;

pub use feedback::{TileState, is_solved, score, to_emoji};
pub use guess::{
    Action, GameStatus, GuessState, MAX_ATTEMPTS, NOT_ENOUGH_LETTERS, NOT_IN_WORD_LIST, reduce,
};
pub use word::{Word, WordError};
