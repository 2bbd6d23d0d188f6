//! Per-letter feedback for a guess
//!
//! Each guessed letter is classified independently:
//! - Correct: same letter at the same position in the target
//! - Misplaced: letter occurs somewhere else in the target
//! - Absent: letter does not occur in the target
//!
//! Repeated letters are not budgeted against the target's letter counts. A
//! letter guessed twice but present once in the target is Misplaced at every
//! non-matching occurrence.

use super::Word;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Correct,
    Misplaced,
    Absent,
}

/// Ordered feedback for a whole guess, aligned 1:1 with the guess letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterClass>);

impl Feedback {
    /// Classify `guess` against `target`
    ///
    /// Both words must have the same length; the validator guarantees this
    /// before any accepted guess reaches here.
    ///
    /// # Examples
    /// ```
    /// use bootleg_wordle::core::{Feedback, LetterClass, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::classify(&guess, &target);
    ///
    /// assert_eq!(feedback.classes()[3], LetterClass::Absent);
    /// assert_eq!(feedback.classes()[4], LetterClass::Correct);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let classes = guess
            .chars()
            .iter()
            .zip(target.chars())
            .map(|(&g, &t)| {
                if g == t {
                    LetterClass::Correct
                } else if target.has_letter(g) {
                    LetterClass::Misplaced
                } else {
                    LetterClass::Absent
                }
            })
            .collect();

        Self(classes)
    }

    /// The per-letter classes in guess order
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[LetterClass] {
        &self.0
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&c| c == LetterClass::Correct)
    }
}

/// Shorthand for [`Feedback::classify`]
#[must_use]
pub fn classify(guess: &Word, target: &Word) -> Feedback {
    Feedback::classify(guess, target)
}
