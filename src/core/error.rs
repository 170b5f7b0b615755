//! Engine error type

use std::fmt;

/// Ways a call into [`PatternEngine`](super::PatternEngine) can be rejected
///
/// Every variant is a usage or precondition violation. A rejected call leaves
/// the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Construction with a word length below 1
    InvalidConfig { word_length: usize },
    /// No word is consistent with the game so far
    EmptyCandidateSet,
    /// The wrong-guess budget is used up
    NoGuessesRemaining,
    /// The letter was guessed before
    DuplicateGuess(char),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { word_length } => {
                write!(f, "Word length must be at least 1, got {word_length}")
            }
            Self::EmptyCandidateSet => write!(f, "No candidate words remain"),
            Self::NoGuessesRemaining => write!(f, "No guesses left"),
            Self::DuplicateGuess(letter) => write!(f, "Already guessed '{letter}'"),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::InvalidConfig { word_length: 0 }.to_string(),
            "Word length must be at least 1, got 0"
        );
        assert_eq!(
            EngineError::DuplicateGuess('e').to_string(),
            "Already guessed 'e'"
        );
        assert_eq!(EngineError::NoGuessesRemaining.to_string(), "No guesses left");
    }
}
