//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_letter};
pub use simple::{parse_guess, run_simple};
pub use simulate::{GameSummary, SimulationStatistics, play_out, run_simulation};
