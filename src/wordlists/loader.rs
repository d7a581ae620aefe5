//! Word list loading utilities
//!
//! Loads custom word lists from plain text files.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of a given length from a file
///
/// One word per line. Blank lines, invalid words and words of any other
/// length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use zombordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words5.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, length);

    tracing::info!(
        path = %path.display(),
        count = words.len(),
        length,
        "loaded word list"
    );

    Ok(words)
}

fn parse_words(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::with_length(line, length).ok())
        .collect()
}
