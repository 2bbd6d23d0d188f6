//! Word list loading utilities
//!
//! Word lists are plain text: any mix of newlines and other whitespace
//! separates tokens. Tokens are returned raw; length filtering and
//! canonicalisation happen in [`WordPool`](super::WordPool).

use std::fs;
use std::io;
use std::path::Path;

/// Split a word list into tokens
///
/// # Examples
/// ```
/// use bootleg_wordle::wordlists::loader::parse_words;
///
/// let words = parse_words("crane slate\nirate\n\n  apple ");
/// assert_eq!(words, vec!["crane", "slate", "irate", "apple"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Load word tokens from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bootleg_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);

    log::debug!("read {} tokens from {}", words.len(), path.display());
    Ok(words)
}
