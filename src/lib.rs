//! Evil Hangman
//!
//! A Hangman opponent that never commits to a word. Every guess splits the
//! remaining dictionary into families by reveal pattern, and the engine keeps
//! the largest one.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::PatternEngine;
//!
//! let mut engine = PatternEngine::with_params(["cat", "car", "can", "cap"], 3, 5).unwrap();
//!
//! let hits = engine.apply_guess('a').unwrap();
//! println!("{hits} hit(s), pattern {}", engine.current_pattern().unwrap());
//! ```

// Core domain types
pub mod core;

// Automated guessing strategies
pub mod guesser;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

/// Word length used when none is given
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Wrong guesses allowed when none is given
pub const DEFAULT_MAX_GUESSES: usize = 8;
