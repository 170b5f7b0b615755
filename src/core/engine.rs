//! Adversarial guess resolution
//!
//! The engine never picks a secret word. It keeps every dictionary word that
//! is still consistent with the game and, on each guess, commits to whichever
//! answer keeps the most of them alive.

use super::{EngineError, Pattern};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Letters the front-ends and strategies guess from
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Session parameters fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Length every candidate word must have
    pub word_length: usize,
    /// Wrong guesses allowed before the game is lost
    pub max_guesses: usize,
}

impl EngineConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_guesses: usize) -> Self {
        Self {
            word_length,
            max_guesses,
        }
    }
}

/// A group of active words sharing one pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub pattern: Pattern,
    pub size: usize,
}

/// What happened on one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: char,
    /// Occurrences of the guess in the committed pattern
    pub occurrences: usize,
    /// Number of distinct families the active set split into
    pub families: usize,
    pub active_before: usize,
    pub active_after: usize,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Evil Hangman engine for a single game session
///
/// # Examples
/// ```
/// use evil_hangman::core::PatternEngine;
///
/// let mut engine = PatternEngine::with_params(["cat", "car", "can", "cap"], 3, 5).unwrap();
///
/// assert_eq!(engine.apply_guess('a').unwrap(), 1);
/// assert_eq!(engine.current_pattern().unwrap().as_str(), "-a-");
///
/// // Three words dodge 't', so the engine says no
/// assert_eq!(engine.apply_guess('t').unwrap(), 0);
/// assert_eq!(engine.guesses_left(), 4);
/// assert_eq!(engine.active_words().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PatternEngine {
    config: EngineConfig,
    active: BTreeSet<String>,
    guessed: BTreeSet<char>,
    pattern: Pattern,
    guesses_left: usize,
    history: Vec<GuessRecord>,
}

impl PatternEngine {
    /// Start a session over the words of `dictionary` with the configured length
    ///
    /// Duplicates collapse and words of any other length are dropped for good.
    /// An empty result is accepted here; the first call that needs a word
    /// reports it.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidConfig`] if `word_length` is 0.
    pub fn new<I>(dictionary: I, config: EngineConfig) -> Result<Self, EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if config.word_length < 1 {
            return Err(EngineError::InvalidConfig {
                word_length: config.word_length,
            });
        }

        let active = dictionary
            .into_iter()
            .filter(|word| word.as_ref().chars().count() == config.word_length)
            .map(|word| word.as_ref().to_owned())
            .collect();

        Ok(Self {
            config,
            active,
            guessed: BTreeSet::new(),
            pattern: Pattern::blank(config.word_length),
            guesses_left: config.max_guesses,
            history: Vec::new(),
        })
    }

    /// Shorthand for [`PatternEngine::new`] with an inline config
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidConfig`] if `word_length` is 0.
    pub fn with_params<I>(
        dictionary: I,
        word_length: usize,
        max_guesses: usize,
    ) -> Result<Self, EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(dictionary, EngineConfig::new(word_length, max_guesses))
    }

    /// Words still consistent with every guess
    #[inline]
    #[must_use]
    pub const fn active_words(&self) -> &BTreeSet<String> {
        &self.active
    }

    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    /// Letters tried so far, sorted
    #[inline]
    #[must_use]
    pub const fn guessed_chars(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// The publicly visible pattern
    ///
    /// # Errors
    /// Returns [`EngineError::EmptyCandidateSet`] if no word is active.
    pub fn current_pattern(&self) -> Result<&Pattern, EngineError> {
        if self.active.is_empty() {
            return Err(EngineError::EmptyCandidateSet);
        }
        Ok(&self.pattern)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.config.max_guesses
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Resolve a guess against the active set
    ///
    /// Splits the active words into families by the pattern each produces for
    /// `guess`, keeps the largest family (ties go to the smallest pattern
    /// string) and reveals its letters. A wrong guess costs one from the
    /// budget.
    ///
    /// Returns the number of times `guess` appears in the kept pattern.
    ///
    /// # Errors
    /// Checked in this order, each leaving the engine untouched:
    /// - [`EngineError::NoGuessesRemaining`] when the budget is 0
    /// - [`EngineError::EmptyCandidateSet`] when no word is active
    /// - [`EngineError::DuplicateGuess`] when `guess` was tried before
    pub fn apply_guess(&mut self, guess: char) -> Result<usize, EngineError> {
        if self.guesses_left < 1 {
            return Err(EngineError::NoGuessesRemaining);
        }
        self.check_guess(guess)?;

        let partition = self.partition(guess);
        let families = partition.len();
        let winner = partition
            .into_iter()
            .min_by(|a, b| selection_order((&a.0, a.1), (&b.0, b.1)))
            .map(|(pattern, _)| pattern)
            .ok_or(EngineError::EmptyCandidateSet)?;

        self.guessed.insert(guess);

        let occurrences = winner.occurrences(guess);
        if occurrences == 0 {
            self.guesses_left -= 1;
        }

        self.pattern.merge(&winner);

        let active_before = self.active.len();
        self.active.retain(|word| Pattern::for_guess(word, guess) == winner);

        self.history.push(GuessRecord {
            guess,
            occurrences,
            families,
            active_before,
            active_after: self.active.len(),
        });

        Ok(occurrences)
    }

    /// Families `guess` would split the active set into, winner first
    ///
    /// Does not touch the engine. Unlike [`apply_guess`](Self::apply_guess)
    /// this also works with an exhausted budget.
    ///
    /// # Errors
    /// - [`EngineError::EmptyCandidateSet`] when no word is active
    /// - [`EngineError::DuplicateGuess`] when `guess` was tried before
    pub fn families(&self, guess: char) -> Result<Vec<Family>, EngineError> {
        self.check_guess(guess)?;

        let mut families: Vec<Family> = self
            .partition(guess)
            .into_iter()
            .map(|(pattern, size)| Family { pattern, size })
            .collect();
        families.sort_by(|a, b| selection_order((&a.pattern, a.size), (&b.pattern, b.size)));

        Ok(families)
    }

    /// Where the session stands
    ///
    /// A game is won once every position is revealed, and lost once the
    /// budget runs out first or no word is left.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.active.is_empty() {
            GameStatus::Lost
        } else if self.pattern.is_complete() {
            GameStatus::Won
        } else if self.guesses_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// A word the engine can claim it was thinking of
    ///
    /// The smallest active word, so repeated calls agree.
    #[must_use]
    pub fn secret_word(&self) -> Option<&str> {
        self.active.first().map(String::as_str)
    }

    /// Letters of `alphabet` not guessed yet
    pub fn unguessed(&self, alphabet: &str) -> impl Iterator<Item = char> {
        alphabet.chars().filter(move |c| !self.guessed.contains(c))
    }

    fn check_guess(&self, guess: char) -> Result<(), EngineError> {
        if self.active.is_empty() {
            return Err(EngineError::EmptyCandidateSet);
        }
        if self.guessed.contains(&guess) {
            return Err(EngineError::DuplicateGuess(guess));
        }
        Ok(())
    }

    /// Count active words per pattern for `guess`
    fn partition(&self, guess: char) -> FxHashMap<Pattern, usize> {
        let mut counts = FxHashMap::default();

        for word in &self.active {
            *counts.entry(Pattern::for_guess(word, guess)).or_insert(0) += 1;
        }

        counts
    }
}

/// Larger families first, then smaller pattern strings
fn selection_order(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
