//! Simulation command
//!
//! Plays an automated guesser against the engine for every word length in a
//! range and collects statistics.

use crate::core::{EngineConfig, EngineError, GameStatus, PatternEngine};
use crate::guesser::Strategy;
use crate::wordlists::length_histogram;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Outcome of one automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub word_length: usize,
    pub won: bool,
    /// Letters in the order they were guessed
    pub letters: Vec<char>,
    pub wrong_guesses: usize,
    /// Active words when the game ended
    pub remaining: usize,
    pub secret: Option<String>,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStatistics {
    pub strategy: String,
    pub max_guesses: usize,
    pub games: Vec<GameSummary>,
    pub won: usize,
    pub lost: usize,
    /// Lengths with no dictionary word
    pub skipped_lengths: Vec<usize>,
    /// Win rate per word length
    pub win_rate_by_length: BTreeMap<usize, f64>,
    pub average_letters: f64,
    pub total_time: Duration,
}

/// Play one game to the end with `strategy`
///
/// # Errors
///
/// Returns an [`EngineError`] if the configuration is invalid or the
/// dictionary holds no word of the configured length.
pub fn play_out<S: Strategy>(
    strategy: &S,
    dictionary: &[String],
    config: EngineConfig,
) -> Result<GameSummary, EngineError> {
    let mut engine = PatternEngine::new(dictionary, config)?;
    if engine.active_words().is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }

    while engine.status() == GameStatus::InProgress {
        let Some(letter) = strategy.select_letter(&engine) else {
            break;
        };
        engine.apply_guess(letter)?;
    }

    Ok(GameSummary {
        word_length: config.word_length,
        won: engine.status() == GameStatus::Won,
        letters: engine.history().iter().map(|record| record.guess).collect(),
        wrong_guesses: config.max_guesses - engine.guesses_left(),
        remaining: engine.active_words().len(),
        secret: engine.secret_word().map(str::to_owned),
    })
}

/// Run `rounds` games for every length in `lengths`, in parallel
///
/// Sessions share only the dictionary slice; each game owns its engine.
pub fn run_simulation<S: Strategy + Sync>(
    strategy: &S,
    strategy_name: &str,
    dictionary: &[String],
    lengths: RangeInclusive<usize>,
    max_guesses: usize,
    rounds: usize,
) -> SimulationStatistics {
    let histogram = length_histogram(dictionary);
    let (playable, skipped_lengths): (Vec<usize>, Vec<usize>) = lengths
        .filter(|&length| length > 0)
        .partition(|length| histogram.contains_key(length));

    let jobs: Vec<usize> = playable
        .iter()
        .flat_map(|&length| std::iter::repeat_n(length, rounds))
        .collect();

    let pb = ProgressBar::new(jobs.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{strategy_name} vs evil hangman"));

    let start = Instant::now();

    let games: Vec<GameSummary> = jobs
        .par_iter()
        .filter_map(|&length| {
            let summary = play_out(strategy, dictionary, EngineConfig::new(length, max_guesses));
            pb.inc(1);
            summary.ok()
        })
        .collect();

    pb.finish_and_clear();
    let total_time = start.elapsed();

    let won = games.iter().filter(|game| game.won).count();
    let lost = games.len() - won;

    let mut per_length: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for game in &games {
        let entry = per_length.entry(game.word_length).or_insert((0, 0));
        entry.1 += 1;
        if game.won {
            entry.0 += 1;
        }
    }
    let win_rate_by_length = per_length
        .into_iter()
        .map(|(length, (wins, total))| (length, wins as f64 / total as f64))
        .collect();

    let average_letters = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|game| game.letters.len()).sum::<usize>() as f64 / games.len() as f64
    };

    SimulationStatistics {
        strategy: strategy_name.to_string(),
        max_guesses,
        games,
        won,
        lost,
        skipped_lengths,
        win_rate_by_length,
        average_letters,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guesser::{FrequencyStrategy, MinimaxStrategy};

    fn dictionary() -> Vec<String> {
        ["cat", "car", "can", "cap", "bat", "dog", "horse", "house"]
            .iter()
            .map(|&w| w.to_owned())
            .collect()
    }

    #[test]
    fn play_out_finishes_the_game() {
        let summary =
            play_out(&FrequencyStrategy, &dictionary(), EngineConfig::new(3, 26)).unwrap();

        // With a full alphabet of budget the guesser always gets there
        assert!(summary.won);
        assert_eq!(summary.remaining, 1);
        assert!(summary.secret.is_some());
        assert!(summary.wrong_guesses < 26);
    }

    #[test]
    fn play_out_can_lose() {
        let summary =
            play_out(&FrequencyStrategy, &dictionary(), EngineConfig::new(3, 0)).unwrap();

        assert!(!summary.won);
        assert!(summary.letters.is_empty());
        assert_eq!(summary.wrong_guesses, 0);
    }

    #[test]
    fn play_out_rejects_missing_length() {
        let result = play_out(&FrequencyStrategy, &dictionary(), EngineConfig::new(9, 5));
        assert_eq!(result.unwrap_err(), EngineError::EmptyCandidateSet);
    }

    #[test]
    fn play_out_is_deterministic() {
        let first = play_out(&MinimaxStrategy, &dictionary(), EngineConfig::new(5, 4)).unwrap();
        let second = play_out(&MinimaxStrategy, &dictionary(), EngineConfig::new(5, 4)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn simulation_skips_unplayable_lengths() {
        let stats = run_simulation(&FrequencyStrategy, "frequency", &dictionary(), 2..=5, 8, 2);

        assert_eq!(stats.skipped_lengths, vec![2, 4]);
        assert_eq!(stats.games.len(), 4);
        assert_eq!(stats.won + stats.lost, 4);
        assert_eq!(
            stats.win_rate_by_length.keys().copied().collect::<Vec<_>>(),
            vec![3, 5]
        );
        assert!(stats.average_letters > 0.0);
    }

    #[test]
    fn simulation_with_no_rounds_is_empty() {
        let stats = run_simulation(&FrequencyStrategy, "frequency", &dictionary(), 3..=3, 8, 0);
        assert!(stats.games.is_empty());
        assert_eq!(stats.average_letters, 0.0);
    }
}
