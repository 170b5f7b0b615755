//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{ALPHABET, PatternEngine};
use rayon::prelude::*;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Pick an unguessed letter from [`ALPHABET`]
    ///
    /// Returns `None` if no word is active or every letter has been tried.
    fn select_letter(&self, engine: &PatternEngine) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Most common letter among active words (default)
    Frequency(FrequencyStrategy),
    /// Letter with the smallest worst-case family
    Minimax(MinimaxStrategy),
    /// Any unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, engine: &PatternEngine) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(engine),
            Self::Minimax(s) => s.select_letter(engine),
            Self::Random(s) => s.select_letter(engine),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "minimax", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Guess the letter that appears in the most active words
///
/// Ties go to the alphabetically first letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, engine: &PatternEngine) -> Option<char> {
        if engine.active_words().is_empty() {
            return None;
        }

        engine
            .unguessed(ALPHABET)
            .map(|letter| {
                let count = engine
                    .active_words()
                    .iter()
                    .filter(|word| word.contains(letter))
                    .count();
                (letter, count)
            })
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(letter, _)| letter)
    }
}

/// Guess the letter whose largest family is smallest
///
/// The adversary always keeps the largest family, so this minimizes the words
/// left after the guess. Ties go to the alphabetically first letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_letter(&self, engine: &PatternEngine) -> Option<char> {
        let letters: Vec<char> = engine.unguessed(ALPHABET).collect();

        letters
            .par_iter()
            .filter_map(|&letter| {
                let families = engine.families(letter).ok()?;
                families.first().map(|largest| (letter, largest.size))
            })
            .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
            .map(|(letter, _)| letter)
    }
}

/// Guess any unguessed letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, engine: &PatternEngine) -> Option<char> {
        use rand::prelude::IndexedRandom;

        if engine.active_words().is_empty() {
            return None;
        }

        let letters: Vec<char> = engine.unguessed(ALPHABET).collect();
        letters.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PatternEngine {
        PatternEngine::with_params(["cat", "car", "can", "cap", "bat"], 3, 5).unwrap()
    }

    #[test]
    fn frequency_picks_most_common_letter() {
        // 'a' is in all five words
        assert_eq!(FrequencyStrategy.select_letter(&engine()), Some('a'));
    }

    #[test]
    fn frequency_skips_guessed_letters() {
        let mut engine = engine();
        engine.apply_guess('a').unwrap();
        // 'c' is in four words
        assert_eq!(FrequencyStrategy.select_letter(&engine), Some('c'));
    }

    #[test]
    fn frequency_breaks_ties_alphabetically() {
        let engine = PatternEngine::with_params(["ab"], 2, 5).unwrap();
        assert_eq!(FrequencyStrategy.select_letter(&engine), Some('a'));
    }

    #[test]
    fn minimax_minimizes_largest_family() {
        let engine = engine();
        let letter = MinimaxStrategy.select_letter(&engine).unwrap();
        let worst = engine.families(letter).unwrap()[0].size;

        for other in engine.unguessed(ALPHABET) {
            assert!(engine.families(other).unwrap()[0].size >= worst);
        }
    }

    #[test]
    fn minimax_is_deterministic() {
        let engine = engine();
        let first = MinimaxStrategy.select_letter(&engine);
        let second = MinimaxStrategy.select_letter(&engine);
        assert_eq!(first, second);
    }

    #[test]
    fn random_picks_unguessed_letter() {
        let mut engine =
            PatternEngine::with_params(["cat", "car", "can", "cap", "bat"], 3, 26).unwrap();
        for letter in "abcdefghijklmnopqrstuvwxy".chars() {
            engine.apply_guess(letter).unwrap();
        }

        assert_eq!(RandomStrategy.select_letter(&engine), Some('z'));
    }

    #[test]
    fn random_selects_from_alphabet() {
        let letter = RandomStrategy.select_letter(&engine()).unwrap();
        assert!(ALPHABET.contains(letter));
    }

    #[test]
    fn no_letter_without_words() {
        let engine = PatternEngine::with_params(["horse"], 3, 5).unwrap();
        assert_eq!(FrequencyStrategy.select_letter(&engine), None);
        assert_eq!(MinimaxStrategy.select_letter(&engine), None);
        assert_eq!(RandomStrategy.select_letter(&engine), None);
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("nonsense").name(), "frequency");
        assert_eq!(StrategyType::default().name(), "frequency");
    }
}
