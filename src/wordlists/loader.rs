//! Dictionary loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped. Nothing else is
/// checked, the engine filters by length itself.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Normalize newline-separated text into words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_normalizes() {
        let words = words_from_lines("  Apple\nBANANA  \n\n\tcherry\n");
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn words_from_lines_keeps_odd_entries() {
        // Length filtering is the engine's job
        let words = words_from_lines("a\nlonger-word\nx y");
        assert_eq!(words, vec!["a", "longer-word", "x y"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("").is_empty());
        assert!(words_from_lines("\n \n").is_empty());
    }

    #[test]
    fn words_from_slice_copies_in_order() {
        let words = words_from_slice(&["cat", "dog"]);
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
