//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, SimulationStatistics};
use colored::Colorize;

/// Print the partition preview for a letter
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' ",
        "FAMILY ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.prior_guesses.is_empty() {
        let prior: String = result.prior_guesses.iter().collect();
        println!("\n   After guesses:  {prior}");
    }
    println!("   Pattern:        {}", result.pattern);
    println!(
        "   Candidates:     {} words of length {}",
        result.candidates, result.word_length
    );
    println!("   Families:       {}\n", result.families.len());

    for (i, family) in result.families.iter().take(15).enumerate() {
        let bar = create_progress_bar(family.size as f64, result.candidates as f64, 30);
        let line = format!("{}  [{}] {:5}", family.pattern, bar, family.size);
        if i == 0 {
            println!("   {} {}", line.green().bold(), "← kept".bright_green());
        } else {
            println!("   {line}");
        }
    }

    if result.families.len() > 15 {
        println!(
            "   {}",
            format!("... {} more", result.families.len() - 15).bright_black()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    let total = stats.games.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", stats.strategy);
    println!("   Wrong guesses:    {} allowed", stats.max_guesses);
    println!("   Games played:     {total}");
    println!(
        "   Won / lost:       {} / {}",
        stats.won.to_string().green(),
        stats.lost.to_string().red()
    );
    println!(
        "   Letters per game: {}",
        format!("{:.2}", stats.average_letters).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if !stats.skipped_lengths.is_empty() {
        let skipped: Vec<String> = stats
            .skipped_lengths
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "   {}",
            format!("No words of length {}", skipped.join(", ")).bright_black()
        );
    }

    println!("\n📈 {}", "Win rate by length:".bright_cyan().bold());
    for (length, rate) in &stats.win_rate_by_length {
        let pct = rate * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length:2}: {bar} {pct:5.1}%");
    }

    let mut hardest: Vec<_> = stats.games.iter().filter(|game| !game.won).collect();
    hardest.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    if !hardest.is_empty() {
        println!("\n💀 {}", "Toughest losses:".bright_cyan().bold());
        for game in hardest.iter().take(5) {
            let letters: String = game.letters.iter().collect();
            println!(
                "   {} ({} letters) - {} words left after '{}'",
                game.secret.as_deref().unwrap_or("?").to_uppercase(),
                game.word_length,
                game.remaining,
                letters
            );
        }
    }
}
