//! Simple interactive CLI mode
//!
//! Line-based game without TUI: one guess per line, colored feedback after
//! each submission.

use super::setup::GameSetup;
use crate::core::{Action, GuessState, reduce};
use crate::output::{print_board, print_game_over};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asked for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        other => Command::Guess(other.to_string()),
    }
}

/// Apply one submitted line to the game state
fn play_line(state: GuessState, line: &str) -> GuessState {
    let state = reduce(state, Action::SetGuess(line.to_string()));
    reduce(state, Action::RegisterGuess)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut setup: GameSetup) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Zombordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{}", setup.puzzle.label().bright_yellow().bold());
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = setup.new_state();

    loop {
        let prompt = format!(
            "Guess {}/{} ({} letters)",
            state.guess_number(),
            state.max_attempts,
            state.word_length()
        );
        print!("{prompt}: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                setup.next_word();
                state = setup.new_state();
                println!("\n🔄 New game started!\n");
            }
            Command::Guess(_) if state.is_over() => {
                println!("Type 'new' to play again or 'quit' to exit.");
            }
            Command::Guess(guess) => {
                let before = state.guesses.len();
                state = play_line(state, &guess);

                if state.guesses.len() == before {
                    println!("{}", state.error.red());
                } else {
                    println!();
                    print_board(&state);
                    println!();
                    if state.is_over() {
                        print_game_over(setup.puzzle, &state);
                        println!("Type 'new' to play again or 'quit' to exit.");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, NOT_ENOUGH_LETTERS};

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_command("  QUIT\n"), Command::Quit);
        assert_eq!(parse_command("n"), Command::NewGame);
        assert_eq!(parse_command("Crane"), Command::Guess("crane".to_string()));
    }

    #[test]
    fn play_line_registers_full_guess() {
        let state = play_line(GuessState::new("crane"), "slate");
        assert_eq!(state.guesses, vec!["slate".to_string()]);
    }

    #[test]
    fn play_line_reports_short_guess() {
        let state = play_line(GuessState::new("crane"), "sla");
        assert!(state.guesses.is_empty());
        assert_eq!(state.error, NOT_ENOUGH_LETTERS);
    }

    #[test]
    fn play_line_can_win() {
        let state = play_line(GuessState::new("crane"), "crane");
        assert_eq!(state.status(), GameStatus::Won);
    }
}
