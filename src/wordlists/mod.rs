//! Word lists and the word of the day
//!
//! Provides embedded word lists compiled into the binary, loading of custom
//! lists, and the date-based daily word selection.

pub mod daily;
mod embedded;
pub mod loader;

pub use daily::{DailyWord, day_index, epoch, local_today, random_word, word_of_the_day};
pub use embedded::{WORDS_5, WORDS_6, WORDS_7};

/// Word lengths with an embedded list
pub const SUPPORTED_LENGTHS: [usize; 3] = [5, 6, 7];

/// Default word length
pub const DEFAULT_LENGTH: usize = 5;

/// Embedded list for a word length, if one exists
///
/// # Examples
/// ```
/// use zombordle::wordlists::for_length;
///
/// assert!(for_length(5).is_some());
/// assert!(for_length(12).is_none());
/// ```
#[must_use]
pub fn for_length(length: usize) -> Option<&'static [&'static str]> {
    match length {
        5 => Some(WORDS_5),
        6 => Some(WORDS_6),
        7 => Some(WORDS_7),
        _ => None,
    }
}
