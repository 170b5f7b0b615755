//! Analyze command
//!
//! Shows how a letter would split the active words, and which family the
//! engine would keep.

use crate::core::{EngineConfig, Family, PatternEngine};

/// Result of analyzing a letter
pub struct AnalysisResult {
    pub letter: char,
    pub word_length: usize,
    /// Letters applied before the analyzed one
    pub prior_guesses: Vec<char>,
    pub pattern: String,
    pub candidates: usize,
    /// Families in selection order; the first is the one kept
    pub families: Vec<Family>,
}

impl AnalysisResult {
    /// The family the engine commits to
    #[must_use]
    pub fn winner(&self) -> Option<&Family> {
        self.families.first()
    }
}

/// Preview the partition for `letter` after applying `prior` guesses
///
/// # Errors
///
/// Returns an error if the configuration is invalid, no word has the
/// configured length, or any guess is rejected by the engine.
pub fn analyze_letter(
    dictionary: &[String],
    config: EngineConfig,
    prior: &[char],
    letter: char,
) -> Result<AnalysisResult, String> {
    let mut engine = PatternEngine::new(dictionary, config).map_err(|e| e.to_string())?;

    for &guess in prior {
        engine
            .apply_guess(guess)
            .map_err(|e| format!("Cannot apply '{guess}': {e}"))?;
    }

    let families = engine.families(letter).map_err(|e| e.to_string())?;
    let pattern = engine
        .current_pattern()
        .map_err(|e| e.to_string())?
        .to_string();

    Ok(AnalysisResult {
        letter,
        word_length: config.word_length,
        prior_guesses: prior.to_vec(),
        pattern,
        candidates: engine.active_words().len(),
        families,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<String> {
        ["cat", "car", "can", "cap"]
            .iter()
            .map(|&w| w.to_owned())
            .collect()
    }

    #[test]
    fn analyze_fresh_engine() {
        let result = analyze_letter(&dictionary(), EngineConfig::new(3, 5), &[], 'a').unwrap();

        assert_eq!(result.candidates, 4);
        assert_eq!(result.pattern, "---");
        assert_eq!(result.families.len(), 1);
        assert_eq!(result.winner().unwrap().pattern.as_str(), "-a-");
    }

    #[test]
    fn analyze_after_prior_guesses() {
        let result = analyze_letter(&dictionary(), EngineConfig::new(3, 5), &['a'], 't').unwrap();

        assert_eq!(result.pattern, "-a-");
        assert_eq!(result.prior_guesses, vec!['a']);
        let sizes: Vec<usize> = result.families.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![3, 1]);
    }

    #[test]
    fn analyze_rejects_repeated_letter() {
        let result = analyze_letter(&dictionary(), EngineConfig::new(3, 5), &['a'], 'a');
        assert!(result.is_err());
    }

    #[test]
    fn analyze_rejects_bad_length() {
        assert!(analyze_letter(&dictionary(), EngineConfig::new(0, 5), &[], 'a').is_err());
        assert!(analyze_letter(&dictionary(), EngineConfig::new(7, 5), &[], 'a').is_err());
    }
}
