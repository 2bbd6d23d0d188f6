//! Formatting utilities for terminal output

use super::style::{self, Colour, Style};
use crate::core::{Feedback, LetterClass, Word};
use std::time::Duration;

/// Style used for a letter with the given feedback
#[must_use]
pub const fn letter_style(class: LetterClass) -> Style {
    match class {
        LetterClass::Correct => Style::highlight(Colour::Green),
        LetterClass::Misplaced => Style::highlight(Colour::Yellow),
        LetterClass::Absent => Style::bold(),
    }
}

/// Boxed single-row grid of styled cells
///
/// ```text
/// +---+---+
/// | A | B |
/// +---+---+
/// ```
#[must_use]
pub fn render_row(cells: &[(char, Style)]) -> String {
    let boundary = format!("{}+", "+---".repeat(cells.len()));

    let mut row = String::new();
    for &(letter, cell_style) in cells {
        row.push_str("| ");
        row.push_str(&style::format(&letter.to_string(), cell_style));
        row.push(' ');
    }
    row.push('|');

    format!("{boundary}\n{row}\n{boundary}")
}

/// Grid for an accepted guess, coloured by its feedback
#[must_use]
pub fn grid(guess: &Word, feedback: &Feedback) -> String {
    let cells: Vec<(char, Style)> = guess
        .chars()
        .iter()
        .zip(feedback.classes())
        .map(|(&letter, &class)| {
            let shown = char::from(letter.to_ascii_uppercase());
            (shown, letter_style(class))
        })
        .collect();

    render_row(&cells)
}

/// Blank grid shown before the first guess
#[must_use]
pub fn empty_grid(length: usize) -> String {
    render_row(&vec![(' ', Style::plain()); length])
}

/// Format elapsed time in seconds, or minutes past one minute
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{secs:.2} seconds")
    } else {
        format!("{:.2} minutes", secs / 60.0)
    }
}
