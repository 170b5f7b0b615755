//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern with a space between positions
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::output::formatters::spaced_pattern;
///
/// assert_eq!(spaced_pattern(&Pattern::for_guess("cat", 'a')), "- a -");
/// ```
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .as_str()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Player-facing answer to a guess
#[must_use]
pub fn describe_occurrences(letter: char, count: usize) -> String {
    match count {
        0 => format!("Sorry, there are no {letter}'s"),
        1 => format!("Yes, there is one {letter}"),
        n => format!("Yes, there are {n} {letter}'s"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One heart per remaining guess, one empty slot per used guess
#[must_use]
pub fn budget_bar(left: usize, max: usize) -> String {
    let used = max.saturating_sub(left);
    format!("{}{}", "♥".repeat(left.min(max)), "·".repeat(used))
}
