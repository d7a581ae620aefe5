//! Keyboard-driven guess entry
//!
//! [`TiledInput`] maps a fixed number of single-letter cells to one string and
//! owns the focus cursor. It knows nothing about rendering or the game rules.

mod key;
mod tiled;

pub use key::{Key, KeyPress};
pub use tiled::{BLANK, Field, InputOutcome, TiledInput};
