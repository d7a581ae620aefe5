//! Guess state and its reducer
//!
//! All game progress flows through [`reduce`]: a pure function from the
//! current state and an [`Action`] to the next state. Validation problems are
//! reported through [`GuessState::error`], never as `Err`.

use super::{Word, feedback};
use std::collections::HashSet;
use std::sync::Arc;

/// Default number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Shown when a guess is submitted before every tile is filled
pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters";

/// Shown when a full-length guess is not a known word
pub const NOT_IN_WORD_LIST: &str = "Not in word list";

/// Discrete state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddLetter(char),
    DeleteLetter,
    /// Replace the current guess with a string assembled by the tiled input
    SetGuess(String),
    RegisterGuess,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Everything the board needs to know about one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessState {
    pub current_guess: String,
    pub guesses: Vec<String>,
    pub correct_word: String,
    pub error: String,
    pub max_attempts: usize,
    dictionary: Option<Arc<HashSet<String>>>,
}

impl GuessState {
    /// Start a game for `correct_word` with the default attempt limit
    #[must_use]
    pub fn new(correct_word: impl Into<String>) -> Self {
        Self {
            current_guess: String::new(),
            guesses: Vec::new(),
            correct_word: correct_word.into().to_lowercase(),
            error: String::new(),
            max_attempts: MAX_ATTEMPTS,
            dictionary: None,
        }
    }

    /// Limit the number of guesses
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Only accept guesses that appear in `words`
    #[must_use]
    pub fn with_dictionary<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        let set = words.into_iter().map(str::to_lowercase).collect();
        self.dictionary = Some(Arc::new(set));
        self
    }

    /// Number of letters in the answer
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.correct_word.chars().count()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let solved = self
            .guesses
            .last()
            .is_some_and(|guess| feedback::is_solved(&self.score_guess(guess)));
        if solved {
            GameStatus::Won
        } else if self.guesses.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::Playing
    }

    /// 1-based number of the row currently being typed
    #[must_use]
    pub fn guess_number(&self) -> usize {
        (self.guesses.len() + 1).min(self.max_attempts)
    }

    /// Feedback for every submitted guess, oldest first
    ///
    /// Always one row per guess. A guess that cannot be scored as a word
    /// comes back all `Absent`.
    #[must_use]
    pub fn scored_guesses(&self) -> Vec<Vec<feedback::TileState>> {
        self.guesses.iter().map(|g| self.score_guess(g)).collect()
    }

    fn score_guess(&self, guess: &str) -> Vec<feedback::TileState> {
        match (Word::new(guess), Word::new(self.correct_word.as_str())) {
            (Ok(guess), Ok(answer)) => feedback::score(&guess, &answer),
            _ => vec![feedback::TileState::Absent; guess.chars().count()],
        }
    }

    fn is_known_word(&self, word: &str) -> bool {
        self.dictionary
            .as_ref()
            .is_none_or(|dict| dict.contains(word))
    }
}

/// Apply `action` to `state`
///
/// Every action is a no-op once the game is won or lost.
///
/// # Examples
/// ```
/// use zombordle::core::{reduce, Action, GuessState};
///
/// let state = GuessState::new("crane");
/// let state = "crane".chars().fold(state, |s, c| reduce(s, Action::AddLetter(c)));
/// let state = reduce(state, Action::RegisterGuess);
///
/// assert_eq!(state.guesses, vec!["crane".to_string()]);
/// assert!(state.current_guess.is_empty());
/// ```
#[must_use]
pub fn reduce(mut state: GuessState, action: Action) -> GuessState {
    if state.is_over() {
        return state;
    }

    let length = state.word_length();

    match action {
        Action::AddLetter(c) => {
            if c.is_ascii_alphabetic() && state.current_guess.chars().count() < length {
                state.current_guess.push(c.to_ascii_lowercase());
            }
        }
        Action::DeleteLetter => {
            state.current_guess.pop();
        }
        Action::SetGuess(value) => {
            state.current_guess = value
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .take(length)
                .collect();
            state.error.clear();
        }
        Action::RegisterGuess => {
            if state.current_guess.chars().count() != length {
                state.error = NOT_ENOUGH_LETTERS.to_string();
            } else if Word::new(state.current_guess.as_str()).is_err()
                || !state.is_known_word(&state.current_guess)
            {
                state.error = NOT_IN_WORD_LIST.to_string();
            } else {
                let guess = std::mem::take(&mut state.current_guess);
                tracing::debug!(guess = %guess, attempt = state.guesses.len() + 1, "guess registered");
                state.guesses.push(guess);
                state.error.clear();
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: GuessState, text: &str) -> GuessState {
        text.chars()
            .fold(state, |s, c| reduce(s, Action::AddLetter(c)))
    }

    #[test]
    fn add_letter_appends_until_full() {
        let state = typed(GuessState::new("crane"), "cranes");
        assert_eq!(state.current_guess, "crane");
    }

    #[test]
    fn add_letter_lowercases_and_ignores_non_letters() {
        let state = typed(GuessState::new("crane"), "C1r!");
        assert_eq!(state.current_guess, "cr");
    }

    #[test]
    fn delete_letter_on_empty_is_noop() {
        let state = GuessState::new("crane");
        let after = reduce(state.clone(), Action::DeleteLetter);
        assert_eq!(after, state);
    }

    #[test]
    fn delete_letter_removes_last() {
        let state = typed(GuessState::new("crane"), "cra");
        let state = reduce(state, Action::DeleteLetter);
        assert_eq!(state.current_guess, "cr");
    }

    #[test]
    fn register_full_guess_appends_exactly_one() {
        let state = typed(GuessState::new("crane"), "slate");
        let before = state.guesses.len();
        let state = reduce(state, Action::RegisterGuess);

        assert_eq!(state.guesses.len(), before + 1);
        assert_eq!(state.guesses.last().map(String::as_str), Some("slate"));
        assert!(state.current_guess.is_empty());
        assert!(state.error.is_empty());
    }

    #[test]
    fn register_short_guess_sets_error() {
        let state = typed(GuessState::new("crane"), "cra");
        let state = reduce(state, Action::RegisterGuess);

        assert_eq!(state.error, NOT_ENOUGH_LETTERS);
        assert!(state.guesses.is_empty());
        assert_eq!(state.current_guess, "cra");
    }

    #[test]
    fn register_unknown_word_sets_error() {
        let state = GuessState::new("crane").with_dictionary(["crane", "slate"]);
        let state = reduce(typed(state, "xxxxx"), Action::RegisterGuess);

        assert_eq!(state.error, NOT_IN_WORD_LIST);
        assert!(state.guesses.is_empty());
        assert_eq!(state.current_guess, "xxxxx");
    }

    #[test]
    fn set_guess_strips_placeholders_and_clears_error() {
        let mut state = GuessState::new("crane");
        state.error = NOT_ENOUGH_LETTERS.to_string();

        let state = reduce(state, Action::SetGuess("CR A ".to_string()));
        assert_eq!(state.current_guess, "cra");
        assert!(state.error.is_empty());

        let state = reduce(state, Action::SetGuess("cranesss".to_string()));
        assert_eq!(state.current_guess, "crane");
    }

    #[test]
    fn correct_guess_wins_and_freezes_state() {
        let state = reduce(typed(GuessState::new("crane"), "crane"), Action::RegisterGuess);
        assert_eq!(state.status(), GameStatus::Won);

        let after = reduce(state.clone(), Action::AddLetter('a'));
        assert_eq!(after, state);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let mut state = GuessState::new("crane").with_max_attempts(2);
        for _ in 0..2 {
            state = reduce(typed(state, "slate"), Action::RegisterGuess);
        }
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.guess_number(), 2);
    }

    #[test]
    fn add_letter_accepts_ascii_letters_only() {
        let state = typed(GuessState::new("crane"), "abcdİ");
        assert_eq!(state.current_guess, "abcd");

        let state = typed(state, "é");
        assert_eq!(state.current_guess, "abcd");

        let state = typed(state, "E");
        assert_eq!(state.current_guess, "abcde");
        assert!(state.current_guess.len() <= state.correct_word.len());
    }

    #[test]
    fn set_guess_keeps_only_letters() {
        let state = reduce(GuessState::new("crane"), Action::SetGuess("c-r4aÑe!".to_string()));
        assert_eq!(state.current_guess, "crae");
    }

    #[test]
    fn unscorable_guess_is_rejected() {
        let mut state = GuessState::new("crane");
        state.current_guess = "créne".to_string();
        let state = reduce(state, Action::RegisterGuess);

        assert!(state.guesses.is_empty());
        assert_eq!(state.error, NOT_IN_WORD_LIST);
    }

    #[test]
    fn every_guess_has_a_scored_row() {
        let mut state = GuessState::new("crane");
        state.guesses = vec!["slate".to_string(), "créne".to_string()];
        let scored = state.scored_guesses();

        assert_eq!(scored.len(), state.guesses.len());
        assert_eq!(scored[1], vec![feedback::TileState::Absent; 5]);
    }

    #[test]
    fn scored_guesses_follow_submissions() {
        let state = reduce(typed(GuessState::new("crane"), "slate"), Action::RegisterGuess);
        let scored = state.scored_guesses();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0][2], feedback::TileState::Correct);
    }
}
