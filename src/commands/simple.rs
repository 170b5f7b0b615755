//! Simple interactive CLI mode
//!
//! Text-based evil Hangman game without TUI

use crate::core::{ALPHABET, EngineConfig, GameStatus, PatternEngine};
use crate::guesser::Strategy;
use crate::output::formatters::{budget_bar, describe_occurrences, spaced_pattern};
use colored::Colorize;
use std::io::{self, Write};

/// Parse one line of player input into a guess
///
/// Accepts exactly one letter of [`ALPHABET`], in either case.
///
/// # Examples
/// ```
/// use evil_hangman::commands::parse_guess;
///
/// assert_eq!(parse_guess(" E "), Some('e'));
/// assert_eq!(parse_guess("ee"), None);
/// assert_eq!(parse_guess("7"), None);
/// ```
#[must_use]
pub fn parse_guess(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?.to_ascii_lowercase();

    if chars.next().is_none() && ALPHABET.contains(letter) {
        Some(letter)
    } else {
        None
    }
}

/// Run the simple interactive CLI mode
///
/// With `debug` set, the number of words the engine is still juggling is shown
/// each turn.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary holds no word of the configured length.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S: Strategy>(
    dictionary: &[String],
    config: EngineConfig,
    strategy: &S,
    debug: bool,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Hangman - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "I'm thinking of a {}-letter word. You may miss {} times.",
        config.word_length, config.max_guesses
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'hint' for a suggestion\n");

    'games: loop {
        let mut engine = PatternEngine::new(dictionary, config).map_err(|e| e.to_string())?;
        if engine.active_words().is_empty() {
            return Err(format!(
                "No words of length {} in the dictionary",
                config.word_length
            ));
        }

        while engine.status() == GameStatus::InProgress {
            let pattern = engine.current_pattern().map_err(|e| e.to_string())?;

            println!("────────────────────────────────────────────────────────────");
            println!("Word:         {}", spaced_pattern(pattern).bright_white().bold());
            println!(
                "Guesses left: {} {}",
                engine.guesses_left(),
                budget_bar(engine.guesses_left(), engine.max_guesses()).red()
            );
            println!(
                "Guessed:      {}",
                engine
                    .guessed_chars()
                    .iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            if debug {
                println!(
                    "{}",
                    format!("Words left:   {}", engine.active_words().len()).bright_black()
                );
            }
            println!();

            let input = get_user_input("Your guess")?.to_lowercase();

            match input.as_str() {
                "quit" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" => {
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                "hint" => {
                    match strategy.select_letter(&engine) {
                        Some(letter) => println!("💡 Try '{letter}'\n"),
                        None => println!("No letters left to suggest\n"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(letter) = parse_guess(&input) else {
                println!("❌ Enter a single letter a-z\n");
                continue;
            };

            match engine.apply_guess(letter) {
                Ok(count) => {
                    let message = describe_occurrences(letter, count);
                    if count == 0 {
                        println!("{}\n", message.yellow());
                    } else {
                        println!("{}\n", message.green());
                    }
                }
                Err(e) => println!("❌ {e}\n"),
            }
        }

        print_game_over(&engine);

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_game_over(engine: &PatternEngine) {
    let secret = engine.secret_word().unwrap_or("?").to_uppercase();

    println!("\n{}", "═".repeat(70).bright_cyan());
    if engine.status() == GameStatus::Won {
        println!(
            "{}",
            "    🎉  Y O U   B E A T   M E !  🎉    ".bright_green().bold()
        );
        println!(
            "\n  The word was {} ({} wrong guesses)",
            secret.bright_white().bold(),
            engine.max_guesses() - engine.guesses_left()
        );
    } else {
        println!("{}", "    💀  S O R R Y ,   Y O U   L O S E  💀    ".red().bold());
        println!("\n  The word was {}", secret.bright_white().bold());
    }
    println!("{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess_accepts_single_letter() {
        assert_eq!(parse_guess("a"), Some('a'));
        assert_eq!(parse_guess("Z"), Some('z'));
        assert_eq!(parse_guess("  q\n"), Some('q'));
    }

    #[test]
    fn parse_guess_rejects_everything_else() {
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("   "), None);
        assert_eq!(parse_guess("ab"), None);
        assert_eq!(parse_guess("1"), None);
        assert_eq!(parse_guess("-"), None);
        assert_eq!(parse_guess("é"), None);
    }
}
