//! Display functions for command results

use super::formatters::{colored_row, share_text};
use crate::commands::setup::Puzzle;
use crate::core::{GameStatus, GuessState};
use crate::wordlists::DailyWord;
use colored::Colorize;

/// Print today's puzzle details
pub fn print_today(daily: &DailyWord<'_>, reveal: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Puzzle:    {}",
        format!("#{}", daily.puzzle_number()).bright_yellow().bold()
    );
    println!("Day index: {}", daily.day_index);
    println!("List slot: {} of {}", daily.index, daily.word_list.len());
    if reveal {
        println!(
            "Word:      {}",
            daily.correct_word.to_uppercase().green().bold()
        );
    } else {
        println!("Word:      {}", "(hidden, pass --reveal)".dimmed());
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print every submitted guess as colored tiles
pub fn print_board(state: &GuessState) {
    for (guess, tiles) in state.guesses.iter().zip(state.scored_guesses()) {
        println!("  {}", colored_row(guess, &tiles));
    }
}

/// Print the end-of-game summary and share grid
pub fn print_game_over(puzzle: Puzzle, state: &GuessState) {
    println!();
    match state.status() {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", state.guesses.len())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Out of guesses. The word was {}.", state.correct_word.to_uppercase())
                .red()
                .bold()
        ),
        GameStatus::Playing => return,
    }
    println!("\n{}\n", share_text(puzzle, state));
}
