//! TUI application state and logic

use super::board::{BoardGeometry, ordinal_suffix};
use super::rendering;
use super::terminal::TerminalGuard;
use crate::commands::setup::GameSetup;
use crate::core::{Action, GameStatus, GuessState, reduce};
use crate::input::{InputOutcome, KeyPress, TiledInput};
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::Backend, layout::Rect};

/// Number of messages kept in the log
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub setup: GameSetup,
    pub state: GuessState,
    pub input: TiledInput,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results for the current session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, status: GameStatus, guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }
}

impl App {
    #[must_use]
    pub fn new(setup: GameSetup) -> Self {
        let state = setup.new_state();
        let input = TiledInput::new(state.word_length());

        let mut app = Self {
            setup,
            state,
            input,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "{}: guess the {}-letter word in {} tries.",
                app.setup.puzzle.label(),
                app.state.word_length(),
                app.state.max_attempts
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type letters, ←/→ to move, Enter to submit, Esc to leave the row.",
            MessageStyle::Info,
        );
        app
    }

    /// Legend for the row being typed, e.g. "3rd guess of 6"
    #[must_use]
    pub fn guess_legend(&self) -> String {
        let n = self.state.guess_number();
        format!(
            "{n}{} guess of {}",
            ordinal_suffix(n),
            self.state.max_attempts
        )
    }

    pub fn new_game(&mut self) {
        self.setup.next_word();
        self.state = self.setup.new_state();
        self.input.set_length(self.state.word_length());
        self.input.reset();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        tracing::info!(puzzle = %self.setup.puzzle.label(), "new game");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Route one terminal event; `area` is the full screen
    pub fn handle_event(&mut self, event: &Event, area: Rect) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, area),
            Event::Paste(text) if !self.state.is_over() => {
                let outcome = self.input.paste(text);
                self.apply(outcome);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.new_game();
                return;
            }
            _ => {}
        }

        if self.state.is_over() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Esc {
            self.input.blur();
            return;
        }

        let outcome = self.input.handle_key(KeyPress::from(key));
        self.apply(outcome);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.state.is_over() {
            return;
        }

        let board = rendering::board_area(area);
        let geometry = BoardGeometry::new(board, self.state.word_length(), self.state.max_attempts);
        let row = self.state.guesses.len();

        match geometry.column_at(row, self.input.len(), mouse.column, mouse.row) {
            Some(col) => self.input.focus(col),
            None => self.input.blur(),
        };
    }

    fn apply(&mut self, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Changed(value) => self.dispatch(Action::SetGuess(value)),
            InputOutcome::Submitted(value) => self.submit(value),
            InputOutcome::Moved | InputOutcome::Ignored => {}
        }
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::replace(&mut self.state, GuessState::new(""));
        self.state = reduce(state, action);
    }

    fn submit(&mut self, value: String) {
        let before = self.state.guesses.len();
        self.dispatch(Action::SetGuess(value));
        self.dispatch(Action::RegisterGuess);

        if self.state.guesses.len() == before {
            let error = self.state.error.clone();
            self.add_message(&error, MessageStyle::Error);
            return;
        }

        self.input.reset();
        let guesses = self.state.guesses.len();

        match self.state.status() {
            GameStatus::Won => {
                self.stats.record(GameStatus::Won, guesses);
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                tracing::info!(guesses, "game won");
            }
            GameStatus::Lost => {
                self.stats.record(GameStatus::Lost, guesses);
                self.add_message(
                    &format!("The word was {}.", self.state.correct_word.to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                tracing::info!(guesses, "game lost");
            }
            GameStatus::Playing => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored either way.
pub fn run_tui(app: App) -> Result<()> {
    let mut guard = TerminalGuard::acquire()?;
    run_app(guard.terminal(), app)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut area = Rect::default();

    loop {
        terminal.draw(|f| {
            area = f.area();
            rendering::ui(f, &app);
        })?;

        let event = event::read()?;
        app.handle_event(&event, area);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::setup::Puzzle;
    use crate::core::NOT_IN_WORD_LIST;

    fn app_for(word: &str) -> App {
        App::new(GameSetup {
            words: vec![word.to_string(), "slate".to_string(), "crane".to_string()],
            correct_word: word.to_string(),
            puzzle: Puzzle::Daily { number: 7 },
            max_attempts: 6,
        })
    }

    fn press(app: &mut App, code: KeyCode) {
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        app.handle_event(&event, Rect::new(0, 0, 80, 40));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_updates_current_guess() {
        let mut app = app_for("crane");
        type_word(&mut app, "sla");

        assert_eq!(app.state.current_guess, "sla");
        assert_eq!(app.input.focused(), Some(3));
    }

    #[test]
    fn submitting_registers_guess_and_resets_row() {
        let mut app = app_for("crane");
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.guesses, vec!["slate".to_string()]);
        assert_eq!(app.input.value(), "     ");
        assert_eq!(app.input.focused(), Some(0));
        assert_eq!(app.guess_legend(), "2nd guess of 6");
    }

    #[test]
    fn incomplete_row_does_not_submit() {
        let mut app = app_for("crane");
        type_word(&mut app, "sla");
        press(&mut app, KeyCode::Enter);

        assert!(app.state.guesses.is_empty());
    }

    #[test]
    fn unknown_word_is_reported() {
        let mut app = app_for("crane");
        type_word(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);

        assert!(app.state.guesses.is_empty());
        assert_eq!(app.state.error, NOT_IN_WORD_LIST);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
        assert_eq!(app.input.value(), "zzzzz");
    }

    #[test]
    fn winning_records_stats_and_ignores_input() {
        let mut app = app_for("crane");
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        type_word(&mut app, "sl");
        assert!(app.state.current_guess.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state.status(), GameStatus::Playing);
        assert!(app.state.guesses.is_empty());
    }

    #[test]
    fn escape_moves_to_global_capture() {
        let mut app = app_for("crane");
        type_word(&mut app, "cr");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input.focused(), None);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state.current_guess, "cra");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.current_guess, "cr");
        assert_eq!(app.input.focused(), Some(2));
    }

    #[test]
    fn paste_fills_row() {
        let mut app = app_for("crane");
        app.handle_event(&Event::Paste("slate".to_string()), Rect::new(0, 0, 80, 40));

        assert_eq!(app.state.current_guess, "slate");
        assert_eq!(app.input.focused(), Some(4));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app_for("crane");
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        app.handle_event(&event, Rect::new(0, 0, 80, 40));

        assert!(app.should_quit);
        assert!(app.state.current_guess.is_empty());
    }

    #[test]
    fn clicking_a_tile_focuses_it() {
        let mut app = app_for("crane");
        let area = Rect::new(0, 0, 80, 40);
        let board = rendering::board_area(area);
        let geometry = BoardGeometry::new(board, 5, 6);
        let target = geometry.tile_rect(0, 3);

        let click = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };

        app.handle_event(&click(target.x + 1, target.y + 1), area);
        assert_eq!(app.input.focused(), Some(3));

        app.handle_event(&click(0, 0), area);
        assert_eq!(app.input.focused(), None);
    }

    #[test]
    fn losing_reveals_the_word() {
        let mut app = App::new(GameSetup {
            words: vec!["crane".to_string(), "slate".to_string()],
            correct_word: "crane".to_string(),
            puzzle: Puzzle::Practice,
            max_attempts: 1,
        });
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }
}
