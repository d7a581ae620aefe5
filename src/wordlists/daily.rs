//! Word of the day
//!
//! The daily word is picked by counting whole days between a fixed epoch and
//! tomorrow's local date, then indexing the word list with the Euclidean
//! remainder. Everyone playing on the same local date gets the same word.

use chrono::{Days, Local, NaiveDate};
use rand::Rng;

/// Date the day count is measured from
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 7, 4).unwrap_or_default()
}

/// The selected word plus how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyWord<'a> {
    pub correct_word: &'a str,
    pub word_list: &'a [&'a str],
    pub index: usize,
    pub day_index: i64,
}

impl DailyWord<'_> {
    /// Number shown to players, e.g. "Daily #42"
    #[must_use]
    pub const fn puzzle_number(&self) -> i64 {
        self.day_index
    }
}

/// Whole days from the epoch to tomorrow
///
/// Grows by one each day and is zero on the day before the epoch. Dates
/// further back go negative, which the Euclidean remainder still maps into
/// the list.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use zombordle::wordlists::day_index;
///
/// let today = NaiveDate::from_ymd_opt(2023, 7, 3).unwrap();
/// assert_eq!(day_index(today), 0);
///
/// let later = NaiveDate::from_ymd_opt(2023, 7, 13).unwrap();
/// assert_eq!(day_index(later), 10);
/// ```
#[must_use]
pub fn day_index(today: NaiveDate) -> i64 {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    tomorrow.signed_duration_since(epoch()).num_days()
}

/// Pick the word for `today` from `word_list`
///
/// Returns `None` only for an empty list.
#[must_use]
pub fn word_of_the_day<'a>(word_list: &'a [&'a str], today: NaiveDate) -> Option<DailyWord<'a>> {
    if word_list.is_empty() {
        return None;
    }

    let day_index = day_index(today);
    let index = day_index.rem_euclid(word_list.len() as i64) as usize;

    Some(DailyWord {
        correct_word: word_list[index],
        word_list,
        index,
        day_index,
    })
}

/// Today's date on the local clock
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Pick a random word for practice games
#[must_use]
pub fn random_word<'a>(word_list: &[&'a str]) -> Option<&'a str> {
    if word_list.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..word_list.len());
    Some(word_list[index])
}
