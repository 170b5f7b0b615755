//! Evil Hangman - CLI
//!
//! Hangman against an opponent that keeps changing its word, with TUI and CLI modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH,
    commands::{analyze_letter, parse_guess, run_simple, run_simulation},
    core::EngineConfig,
    guesser::StrategyType,
    output::{print_analysis_result, print_simulation_statistics},
    wordlists::{DICTIONARY, length_histogram, loader},
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an adversary that dodges every guess it can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Length of the word to guess
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Wrong guesses allowed
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Hint strategy: frequency (default), minimax, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text prompts, no TUI)
    Simple {
        /// Show how many words are still in play
        #[arg(short, long)]
        debug: bool,
    },

    /// Play the hint strategy against the engine for a range of word lengths
    Simulate {
        /// Shortest word length to try
        #[arg(long, default_value = "2")]
        min_length: usize,

        /// Longest word length to try
        #[arg(long, default_value = "8")]
        max_length: usize,

        /// Games per length (only varies with the random strategy)
        #[arg(short = 'n', long, default_value = "1")]
        rounds: usize,
    },

    /// Show how a letter splits the words
    Analyze {
        /// Letter to analyze
        letter: String,

        /// Letters to guess first, e.g. "ae"
        #[arg(short, long, default_value = "")]
        after: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "builtin" => Ok(loader::words_from_slice(DICTIONARY)),
        path => Ok(loader::load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = EngineConfig::new(cli.length, cli.guesses);
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config, strategy),
        Commands::Simple { debug } => {
            check_length(&dictionary, config.word_length)?;
            run_simple(&dictionary, config, &strategy, debug).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Simulate {
            min_length,
            max_length,
            rounds,
        } => {
            let stats = run_simulation(
                &strategy,
                strategy.name(),
                &dictionary,
                min_length..=max_length,
                config.max_guesses,
                rounds,
            );
            print_simulation_statistics(&stats);
            Ok(())
        }
        Commands::Analyze { letter, after } => {
            run_analyze_command(&dictionary, config, &letter, &after)
        }
    }
}

/// Fail early with the lengths that do have words
fn check_length(dictionary: &[String], length: usize) -> Result<()> {
    let histogram = length_histogram(dictionary);
    if length > 0 && !histogram.contains_key(&length) {
        let available: Vec<String> = histogram.keys().map(ToString::to_string).collect();
        bail!(
            "No words of length {length}. Available lengths: {}",
            available.join(", ")
        );
    }
    Ok(())
}

fn run_analyze_command(
    dictionary: &[String],
    config: EngineConfig,
    letter: &str,
    after: &str,
) -> Result<()> {
    let Some(letter) = parse_guess(letter) else {
        bail!("'{letter}' is not a single letter a-z");
    };

    let prior = after
        .chars()
        .map(|c| {
            parse_guess(&c.to_string()).ok_or_else(|| anyhow::anyhow!("'{c}' is not a letter"))
        })
        .collect::<Result<Vec<char>>>()?;

    let result =
        analyze_letter(dictionary, config, &prior, letter).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_play_command(
    dictionary: &[String],
    config: EngineConfig,
    strategy: StrategyType,
) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    check_length(dictionary, config.word_length)?;
    let app = App::new(dictionary, config, strategy)?;
    run_tui(app)
}
