//! TUI application state and logic

use crate::core::{EngineConfig, EngineError, Family, GameStatus, PatternEngine};
use crate::guesser::{Strategy, StrategyType};
use crate::output::formatters::describe_occurrences;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [String],
    pub config: EngineConfig,
    pub strategy: StrategyType,
    pub engine: PatternEngine,
    /// Families the last guess split the words into, kept family first
    pub last_families: Vec<Family>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Show how many words the engine is still juggling
    pub show_word_count: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    /// Create the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or no word has the
    /// configured length.
    pub fn new(
        dictionary: &'a [String],
        config: EngineConfig,
        strategy: StrategyType,
    ) -> Result<Self, EngineError> {
        let engine = fresh_engine(dictionary, config)?;

        let mut app = Self {
            dictionary,
            config,
            strategy,
            engine,
            last_families: Vec::new(),
            messages: vec![Message {
                text: format!(
                    "I'm thinking of a {}-letter word. Type a letter to guess.",
                    config.word_length
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            show_word_count: false,
        };

        // A zero budget loses before the first guess
        app.check_game_over();
        Ok(app)
    }

    pub fn handle_guess(&mut self, input: char) {
        let Some(letter) = crate::commands::parse_guess(&input.to_string()) else {
            self.add_message("Guess a letter a-z", MessageStyle::Error);
            return;
        };

        let families = match self.engine.families(letter) {
            Ok(families) => families,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.engine.apply_guess(letter) {
            Ok(count) => {
                self.last_families = families;
                let style = if count == 0 {
                    MessageStyle::Error
                } else {
                    MessageStyle::Success
                };
                self.add_message(&describe_occurrences(letter, count), style);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.check_game_over();
    }

    fn check_game_over(&mut self) {
        let secret = self.engine.secret_word().unwrap_or("?").to_uppercase();

        match self.engine.status() {
            GameStatus::InProgress => return,
            GameStatus::Won => {
                self.stats.games_won += 1;
                self.add_message(
                    &format!("🎉 You beat me! The word was {secret}"),
                    MessageStyle::Success,
                );
            }
            GameStatus::Lost => {
                self.add_message(
                    &format!("💀 Sorry, you lose. The word was {secret}"),
                    MessageStyle::Error,
                );
            }
        }

        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match fresh_engine(self.dictionary, self.config) {
            Ok(engine) => {
                self.engine = engine;
                self.last_families.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
                self.check_game_over();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Take back the last guess by replaying the others on a fresh engine
    pub fn undo_last(&mut self) {
        let mut guesses: Vec<char> = self
            .engine
            .history()
            .iter()
            .map(|record| record.guess)
            .collect();

        if guesses.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }

        let replayed = fresh_engine(self.dictionary, self.config).and_then(|mut engine| {
            for &guess in &guesses {
                engine.apply_guess(guess)?;
            }
            Ok(engine)
        });

        match replayed {
            Ok(engine) => {
                self.engine = engine;
                self.last_families.clear();
                self.add_message("Undone!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn show_hint(&mut self) {
        match self.strategy.select_letter(&self.engine) {
            Some(letter) => self.add_message(
                &format!("💡 {} suggests '{letter}'", self.strategy.name()),
                MessageStyle::Info,
            ),
            None => self.add_message("No letters left to suggest", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn fresh_engine(dictionary: &[String], config: EngineConfig) -> Result<PatternEngine, EngineError> {
    let engine = PatternEngine::new(dictionary, config)?;
    if engine.active_words().is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }
    Ok(engine)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Char('u') if ctrl => app.undo_last(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.show_hint(),
                    KeyCode::F(2) => app.show_word_count = !app.show_word_count,
                    // Letters are guessed on key press
                    KeyCode::Char(c) => app.handle_guess(c),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
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
    fn new_app_rejects_missing_length() {
        let words = dictionary();
        let result = App::new(&words, EngineConfig::new(8, 5), StrategyType::default());
        assert!(result.is_err());
    }

    #[test]
    fn guess_records_families() {
        let words = dictionary();
        let mut app = App::new(&words, EngineConfig::new(3, 5), StrategyType::default()).unwrap();

        app.handle_guess('A');
        assert_eq!(app.engine.guessed_chars().len(), 1);
        assert_eq!(app.last_families.len(), 1);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn invalid_and_repeated_guesses_do_nothing() {
        let words = dictionary();
        let mut app = App::new(&words, EngineConfig::new(3, 5), StrategyType::default()).unwrap();

        app.handle_guess('7');
        app.handle_guess('a');
        app.handle_guess('a');
        assert_eq!(app.engine.history().len(), 1);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn losing_ends_the_game() {
        let words = dictionary();
        let mut app = App::new(&words, EngineConfig::new(3, 1), StrategyType::default()).unwrap();

        app.handle_guess('z');
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn winning_ends_the_game() {
        let words = vec!["ox".to_string()];
        let mut app = App::new(&words, EngineConfig::new(2, 3), StrategyType::default()).unwrap();

        app.handle_guess('o');
        app.handle_guess('x');
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.engine.guessed_chars().is_empty());
    }

    #[test]
    fn zero_budget_starts_game_over() {
        let words = vec!["cat".to_string()];
        let mut app = App::new(&words, EngineConfig::new(3, 0), StrategyType::default()).unwrap();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 2);
    }

    #[test]
    fn undo_replays_earlier_guesses() {
        let words = dictionary();
        let mut app = App::new(&words, EngineConfig::new(3, 5), StrategyType::default()).unwrap();

        app.handle_guess('a');
        app.handle_guess('t');
        assert_eq!(app.engine.guesses_left(), 4);

        app.undo_last();
        assert_eq!(app.engine.guesses_left(), 5);
        assert_eq!(app.engine.active_words().len(), 4);
        assert_eq!(app.engine.guessed_chars().iter().collect::<String>(), "a");

        app.undo_last();
        app.undo_last();
        assert!(app.engine.history().is_empty());
    }
}
