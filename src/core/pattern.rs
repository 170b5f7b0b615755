//! Reveal patterns
//!
//! A pattern is the publicly visible shape of a word: every position either
//! shows a guessed letter or the blank marker `-`.
//!
//! Patterns order lexicographically by their string form. Since `-` sorts
//! before every lowercase letter, an all-blank pattern is the smallest one of
//! its length.

use std::fmt;

/// Marker for a position that has not been revealed
pub const BLANK: char = '-';

/// A fixed-length sequence of revealed letters and blanks
///
/// Length is counted in `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(String);

impl Pattern {
    /// All-blank pattern of the given length
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(std::iter::repeat_n(BLANK, len).collect())
    }

    /// Pattern `word` produces for `guess`, ignoring every other letter
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::for_guess("apple", 'p').as_str(), "-pp--");
    /// assert_eq!(Pattern::for_guess("apple", 'z').as_str(), "-----");
    /// ```
    #[must_use]
    pub fn for_guess(word: &str, guess: char) -> Self {
        Self(
            word.chars()
                .map(|c| if c == guess { guess } else { BLANK })
                .collect(),
        )
    }

    /// Get the pattern as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many positions show `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.0.chars().filter(|&c| c == letter).count()
    }

    /// Number of blank positions
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.occurrences(BLANK)
    }

    /// True once no position is blank
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(BLANK)
    }

    /// Copy every revealed position of `other` onto `self`
    ///
    /// Blank positions of `other` never overwrite, so a revealed letter stays
    /// revealed. Both patterns must have the same length.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len(), "patterns differ in length");

        self.0 = self
            .0
            .chars()
            .zip(other.0.chars())
            .map(|(mine, theirs)| if theirs == BLANK { mine } else { theirs })
            .collect();
    }

    /// Check that `word` agrees with every revealed position
    ///
    /// Blank positions match any letter except one that is already revealed
    /// elsewhere in the pattern.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        if word.chars().count() != self.len() {
            return false;
        }

        self.0.chars().zip(word.chars()).all(|(shown, actual)| {
            if shown == BLANK {
                !self.0.contains(actual)
            } else {
                shown == actual
            }
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pattern string `word` produces for `ch`
///
/// Pure helper: same inputs give the same output, and `ch` need not appear in
/// `word` (the result is then all blank).
///
/// # Examples
/// ```
/// use evil_hangman::core::get_pattern;
///
/// assert_eq!(get_pattern("apple", 'p'), "-pp--");
/// ```
#[must_use]
pub fn get_pattern(word: &str, ch: char) -> String {
    Pattern::for_guess(word, ch).0
}
