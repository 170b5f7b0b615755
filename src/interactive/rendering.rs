//! TUI rendering with ratatui
//!
//! Visualizations for the evil Hangman game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, GameStatus};
use crate::output::formatters::spaced_pattern;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Word and letters
            Constraint::Percentage(30), // Families
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_families(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let pattern = app
        .engine
        .current_pattern()
        .map(spaced_pattern)
        .unwrap_or_default();

    // Hits in green, misses in red, untried letters plain
    let hidden = app.engine.current_pattern().map_or(0, |p| p.blanks());
    let shown = app
        .engine
        .current_pattern()
        .map(ToString::to_string)
        .unwrap_or_default();
    let letters: Vec<Span> = ALPHABET
        .chars()
        .map(|letter| {
            let style = if !app.engine.guessed_chars().contains(&letter) {
                Style::default().fg(Color::White)
            } else if shown.contains(letter) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            Span::styled(format!("{} ", letter.to_ascii_uppercase()), style)
        })
        .collect();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            pattern.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(letters).alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(
                    " {}-letter word, {hidden} hidden ",
                    app.engine.word_length()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_families(f: &mut Frame, app: &App, area: Rect) {
    let content: Vec<Line> = if app.last_families.is_empty() {
        vec![Line::from("Make a guess to see how the words split")]
    } else {
        let total: usize = app.last_families.iter().map(|family| family.size).sum();
        app.last_families
            .iter()
            .take(6)
            .enumerate()
            .map(|(i, family)| {
                let style = if i == 0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let size = if app.show_word_count {
                    format!(" {:5}/{total}", family.size)
                } else {
                    String::new()
                };
                Line::from(vec![
                    Span::styled(family.pattern.to_string(), style),
                    Span::styled(size, style),
                    Span::raw(if i == 0 { "  ← kept" } else { "" }),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Last Guess ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.engine.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, record)| {
            let mut content = format!(
                "{}: {} → {}",
                history.len() - i,
                record.guess.to_ascii_uppercase(),
                record.occurrences
            );
            if app.show_word_count {
                content.push_str(&format!(
                    "  [{} families, {} → {}]",
                    record.families, record.active_before, record.active_after
                ));
            }
            ListItem::new(content)
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Budget gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let left = app.engine.guesses_left();
    let max = app.engine.max_guesses();
    let percent = if max == 0 {
        0
    } else {
        (left * 100 / max).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent)
        .label(format!("{left}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match (&app.input_mode, app.engine.status()) {
        (InputMode::GameOver, GameStatus::Won) => (
            " 🎉 YOU WIN! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " 💀 GAME OVER | Press 'n' for new game or 'q' to quit ",
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Type a letter to guess | TAB for a hint ",
            Color::Yellow,
        ),
    };

    let prompt = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Hints: {}", app.strategy.name());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = if app.show_word_count {
        format!("Words: {}", app.engine.active_words().len())
    } else {
        "Words: ? (F2)".to_string()
    };
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | ^N: New | ^U: Undo | TAB: Hint"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
