//! Today's puzzle details

use super::setup::load_words;
use crate::config::Config;
use crate::output::print_today;
use crate::wordlists;
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Print the day index and puzzle number for `today`, and the word itself
/// only when `reveal` is set
///
/// # Errors
///
/// Returns an error if the settings are invalid or no word list is available.
pub fn run_today(config: &Config, today: NaiveDate, reveal: bool) -> Result<()> {
    config.validate()?;

    let owned = load_words(config)?;
    let words: Vec<&str> = owned.iter().map(String::as_str).collect();

    let daily = wordlists::word_of_the_day(&words, today).context("Word list is empty")?;
    print_today(&daily, reveal);
    Ok(())
}
