//! Core domain types for evil Hangman
//!
//! The engine and its value types. Nothing here prints or reads input; every
//! front-end goes through [`PatternEngine`].

mod engine;
mod error;
mod pattern;

pub use engine::{ALPHABET, EngineConfig, Family, GameStatus, GuessRecord, PatternEngine};
pub use error::EngineError;
pub use pattern::{BLANK, Pattern, get_pattern};
