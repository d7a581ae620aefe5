//! Game setup
//!
//! Resolves the word list from the settings and picks the answer: the word of
//! the day, or a random word in practice mode.

use crate::config::Config;
use crate::core::GuessState;
use crate::wordlists::{self, loader};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

/// How the answer was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    Daily { number: i64 },
    Practice,
}

impl Puzzle {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Daily { number } => format!("Daily #{number}"),
            Self::Practice => "Practice".to_string(),
        }
    }
}

/// Everything needed to start (and restart) games
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub words: Vec<String>,
    pub correct_word: String,
    pub puzzle: Puzzle,
    pub max_attempts: usize,
}

impl GameSetup {
    /// Build the setup for `today`
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, the custom word list
    /// cannot be read, or no word of the configured length is available.
    pub fn prepare(config: &Config, today: NaiveDate) -> Result<Self> {
        config.validate()?;
        let words = load_words(config)?;
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();

        let (correct_word, puzzle) = if config.practice {
            let word = wordlists::random_word(&refs)
                .context("Word list is empty")?
                .to_string();
            (word, Puzzle::Practice)
        } else {
            let daily = wordlists::word_of_the_day(&refs, today).context("Word list is empty")?;
            (
                daily.correct_word.to_string(),
                Puzzle::Daily {
                    number: daily.puzzle_number(),
                },
            )
        };

        tracing::info!(
            puzzle = %puzzle.label(),
            length = config.word_length,
            words = words.len(),
            "game prepared"
        );

        Ok(Self {
            words,
            correct_word,
            puzzle,
            max_attempts: config.max_attempts,
        })
    }

    /// Fresh state for the current answer
    #[must_use]
    pub fn new_state(&self) -> GuessState {
        GuessState::new(self.correct_word.as_str())
            .with_max_attempts(self.max_attempts)
            .with_dictionary(self.words.iter().map(String::as_str))
    }

    /// Pick a new answer in practice mode; daily puzzles keep their word
    pub fn next_word(&mut self) {
        if self.puzzle != Puzzle::Practice {
            return;
        }
        let refs: Vec<&str> = self.words.iter().map(String::as_str).collect();
        if let Some(word) = wordlists::random_word(&refs) {
            self.correct_word = word.to_string();
        }
    }
}

pub(crate) fn load_words(config: &Config) -> Result<Vec<String>> {
    let words: Vec<String> = match &config.wordlist {
        Some(path) => loader::load_from_file(path, config.word_length)
            .with_context(|| format!("Failed to read word list {}", path.display()))?
            .into_iter()
            .map(|w| w.text().to_string())
            .collect(),
        None => wordlists::for_length(config.word_length)
            .unwrap_or_default()
            .iter()
            .map(|&w| w.to_string())
            .collect(),
    };

    if words.is_empty() {
        bail!("No {}-letter words available", config.word_length);
    }
    Ok(words)
}
