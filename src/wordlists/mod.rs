//! Word lists for evil Hangman
//!
//! Provides the embedded dictionary and helpers to inspect any word list.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use std::collections::BTreeMap;

/// Count distinct words per length (in `char`s)
///
/// Front-ends use this to offer only lengths that can actually be played.
#[must_use]
pub fn length_histogram<S: AsRef<str>>(words: &[S]) -> BTreeMap<usize, usize> {
    let unique: std::collections::BTreeSet<&str> = words.iter().map(|word| word.as_ref()).collect();

    let mut histogram = BTreeMap::new();
    for word in unique {
        *histogram.entry(word.chars().count()).or_insert(0) += 1;
    }
    histogram
}
