//! Rendering sink consumed by the session

use super::session::GameSummary;
use crate::core::{Feedback, Verdict, Word};
use std::io;

/// Settings shown in the introduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroInfo<'a> {
    pub length: usize,
    pub max_guesses: usize,
    pub stop_token: &'a str,
}

/// Everything the session shows the player goes through a Renderer
///
/// # Errors
///
/// Every method returns the I/O error of the underlying output, if any.
pub trait Renderer {
    fn intro(&mut self, info: &IntroInfo<'_>) -> io::Result<()>;

    /// Blank board before the first guess
    fn empty_grid(&mut self, length: usize) -> io::Result<()>;

    /// An accepted guess and its feedback
    fn turn(&mut self, guess: &Word, feedback: &Feedback) -> io::Result<()>;

    /// A rejected guess; no guess was consumed
    fn rejected(&mut self, verdict: Verdict, length: usize) -> io::Result<()>;

    fn finished(&mut self, summary: &GameSummary) -> io::Result<()>;
}
