//! Build script to generate embedded word lists
//!
//! Reads one word list file per supported word length and generates Rust
//! source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Word lengths with an embedded list, paired with their source file
const LISTS: &[(usize, &str)] = &[
    (5, "data/words5.txt"),
    (6, "data/words6.txt"),
    (7, "data/words7.txt"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("words.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for &(length, input_path) in LISTS {
        generate_word_list(&mut output, input_path, length);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, length: usize) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    for word in &words {
        assert_eq!(
            word.len(),
            length,
            "'{word}' in {input_path} is not {length} letters"
        );
    }

    writeln!(output, "/// Playable {length}-letter words ({} words)", words.len()).unwrap();
    writeln!(output, "pub const WORDS_{length}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
