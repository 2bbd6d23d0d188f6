//! Terminal renderer for a game session

use super::formatters::{empty_grid, format_elapsed, grid, render_row};
use super::style::{Colour, Style, format};
use crate::core::{Feedback, Verdict, Word};
use crate::game::{GameSummary, IntroInfo, Outcome, Renderer};
use std::io::{self, Write};

const RULE_WIDTH: usize = 40;

/// Writes the game to a terminal (or any writer)
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn highlight(text: &str, colour: Colour) -> String {
    format(text, Style::highlight(colour))
}

fn shown(word: &Word) -> String {
    highlight(&word.text().to_uppercase(), Colour::Green)
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn intro(&mut self, info: &IntroInfo<'_>) -> io::Result<()> {
        let IntroInfo {
            length,
            max_guesses,
            stop_token,
        } = *info;

        let correct_example = render_row(&[
            ('A', Style::highlight(Colour::Green)),
            ('-', Style::bold()),
            ('-', Style::bold()),
        ]);
        let misplaced_example = render_row(&[
            ('-', Style::bold()),
            ('A', Style::highlight(Colour::Yellow)),
            ('-', Style::bold()),
        ]);

        let banner = Style::highlight(Colour::Blue).with_underline();
        writeln!(self.out, "{}", format("Welcome to bootleg Wordle!", banner))?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(
            self.out,
            "\nThe goal of the game is to guess a secret {length} letter word \
             (with no hyphens or special characters).\n"
        )?;
        writeln!(
            self.out,
            "In each round you will be able to guess any {length} letter word.\n"
        )?;
        writeln!(
            self.out,
            "If a letter in your guess is in the right place, it will be displayed {}\n",
            highlight("green", Colour::Green)
        )?;
        writeln!(self.out, "{correct_example}\n")?;
        writeln!(
            self.out,
            "If a letter in your guess is in the word but in the wrong place, \
             it will be displayed {}\n",
            highlight("yellow", Colour::Yellow)
        )?;
        writeln!(self.out, "{misplaced_example}\n")?;
        writeln!(
            self.out,
            "In your next guess, you'll have to keep those {} letters in place and use the {} \
             letters somewhere else.",
            highlight("correct", Colour::Green),
            highlight("out-of-place", Colour::Yellow)
        )?;
        writeln!(
            self.out,
            "You will get a maximum of {max_guesses} guesses to find the secret word.\n"
        )?;
        writeln!(self.out, "Enter {stop_token} at any time to exit.\n")?;
        writeln!(self.out, "Good luck!\n")?;
        writeln!(self.out, "{}\n", "-".repeat(RULE_WIDTH))
    }

    fn empty_grid(&mut self, length: usize) -> io::Result<()> {
        writeln!(self.out, "{}", empty_grid(length))
    }

    fn turn(&mut self, guess: &Word, feedback: &Feedback) -> io::Result<()> {
        writeln!(self.out, "{}", grid(guess, feedback))
    }

    fn rejected(&mut self, verdict: Verdict, length: usize) -> io::Result<()> {
        writeln!(self.out, "{}\n", verdict.message(length))
    }

    fn finished(&mut self, summary: &GameSummary) -> io::Result<()> {
        let target = shown(&summary.target);
        match summary.outcome {
            Outcome::Won => writeln!(
                self.out,
                "Congratulations! You correctly guessed the secret word {target} with {} {}!",
                summary.guesses_made,
                if summary.guesses_made == 1 { "guess" } else { "guesses" }
            )?,
            Outcome::LostExhausted => writeln!(
                self.out,
                "Good Try! You used all {} guesses. The secret word was {target}.",
                summary.max_guesses
            )?,
            Outcome::Aborted | Outcome::InProgress => writeln!(
                self.out,
                "Thanks for playing! The secret word was {target}."
            )?,
        }

        let elapsed = format_elapsed(summary.elapsed);
        writeln!(self.out, "Time Elapsed: {elapsed}")?;
        self.out.flush()
    }
}
