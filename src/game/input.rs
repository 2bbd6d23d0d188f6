//! Line-based input for the game loop

use std::io::{self, BufRead, Write};

/// Prompt shown before each guess
pub const GUESS_PROMPT: &str = "Enter your guess: ";

/// Source of raw guess lines
pub trait InputSource {
    /// Read one line, blocking until it arrives
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while prompting or reading.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Prompted input over any buffered reader
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Read guesses from the terminal
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub const fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{GUESS_PROMPT}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }
}
