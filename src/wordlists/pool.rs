//! Target candidates and admissible guesses
//!
//! Both sets are filtered to the configured length when the pool is built.
//! The dictionary always includes every candidate.

use crate::core::{Dictionary, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Shortest playable word
pub const MIN_LENGTH: usize = 2;
/// Fewest guesses a game may allow
pub const MIN_GUESSES: usize = 2;

/// Error type for an unplayable game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    LengthTooShort(usize),
    TooFewGuesses(usize),
    NoCandidates(usize),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthTooShort(len) => {
                write!(f, "Word length must be at least {MIN_LENGTH}, got {len}")
            }
            Self::TooFewGuesses(n) => {
                write!(f, "Maximum guesses must be at least {MIN_GUESSES}, got {n}")
            }
            Self::NoCandidates(len) => {
                write!(f, "No candidate words of length {len} are available")
            }
        }
    }
}

impl std::error::Error for PoolError {}

/// Word sets for one game configuration
#[derive(Debug, Clone)]
pub struct WordPool {
    candidates: Vec<Word>,
    dictionary: FxHashSet<Word>,
    length: usize,
    max_guesses: usize,
}

impl WordPool {
    /// Build a pool from raw word collections
    ///
    /// Tokens of the wrong length or containing non-letters are dropped.
    /// Candidates are deduplicated and kept sorted so a seeded RNG always
    /// draws the same target.
    ///
    /// # Errors
    /// Returns `PoolError` if:
    /// - `length` is below 2
    /// - `max_guesses` is below 2
    /// - No candidate survives length filtering
    ///
    /// # Examples
    /// ```
    /// use bootleg_wordle::wordlists::WordPool;
    ///
    /// let pool = WordPool::new(["crane", "apple", "cat"], ["slate"], 5, 6).unwrap();
    /// assert_eq!(pool.candidate_count(), 2);
    /// assert!(pool.contains("SLATE"));
    /// assert!(pool.contains("crane"));
    /// assert!(!pool.contains("cat"));
    /// ```
    pub fn new<I, J, S, T>(
        words: I,
        dictionary: J,
        length: usize,
        max_guesses: usize,
    ) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        if length < MIN_LENGTH {
            return Err(PoolError::LengthTooShort(length));
        }
        if max_guesses < MIN_GUESSES {
            return Err(PoolError::TooFewGuesses(max_guesses));
        }

        let candidate_set: FxHashSet<Word> = filter_to_length(words, length).collect();
        if candidate_set.is_empty() {
            return Err(PoolError::NoCandidates(length));
        }

        let mut dictionary: FxHashSet<Word> = filter_to_length(dictionary, length).collect();
        dictionary.extend(candidate_set.iter().cloned());

        let mut candidates: Vec<Word> = candidate_set.into_iter().collect();
        candidates.sort_unstable();

        log::debug!(
            "word pool: {} candidates, {} dictionary words of length {length}",
            candidates.len(),
            dictionary.len()
        );

        Ok(Self {
            candidates,
            dictionary,
            length,
            max_guesses,
        })
    }

    /// Pick a target uniformly at random from the candidates
    pub fn pick_target<R: Rng>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        &self.candidates[rng.random_range(0..self.candidates.len())]
    }

    /// Check whether `word` is an admissible guess (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.dictionary.contains(&w))
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }
}

impl Dictionary for WordPool {
    fn contains_word(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }
}

fn filter_to_length<I, S>(words: I, length: usize) -> impl Iterator<Item = Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().filter_map(move |token| {
        let token = token.as_ref();
        if token.len() == length {
            Word::new(token).ok()
        } else {
            None
        }
    })
}
