//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackPattern, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile
#[must_use]
pub fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Feedback::Exact => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn tile_row(guess: &Word, pattern: &FeedbackPattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.iter())
        .map(|(&letter, feedback)| tile(char::from(letter), feedback).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
