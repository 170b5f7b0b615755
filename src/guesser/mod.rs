//! Automated guessers
//!
//! Strategies that play the guessing side against a [`PatternEngine`]. The
//! simulator uses them to measure how hard the adversary is, and the
//! front-ends use them for hints.
//!
//! [`PatternEngine`]: crate::core::PatternEngine

pub mod strategy;

pub use strategy::{FrequencyStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
