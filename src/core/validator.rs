//! Guess admissibility rules
//!
//! A guess is checked in a fixed order and the first failing rule decides the
//! verdict. The last two rules carry information forward from the previous
//! accepted guess: letters that were in the right place stay there, and
//! letters known to be in the word elsewhere must be used again.

use super::Word;
use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Outcome of validating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    RejectedNonAlphabetic,
    RejectedWrongLength,
    RejectedNotInDictionary,
    RejectedRepeatsPrevious,
    RejectedChangedCorrectLetter,
    RejectedDroppedMisplacedLetter,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Player-facing explanation for a rejection
    ///
    /// `length` is the configured word length, quoted by the wrong-length
    /// message.
    #[must_use]
    pub fn message(self, length: usize) -> String {
        match self {
            Self::Accepted => "Guess accepted.".to_string(),
            Self::RejectedNonAlphabetic => {
                "Guess contains non-alphabetic letters or special characters. Try again!"
                    .to_string()
            }
            Self::RejectedWrongLength => {
                format!("Your guess must be a {length} letter word. Try again!")
            }
            Self::RejectedNotInDictionary => {
                "We don't think this is a valid English word. Try again!".to_string()
            }
            Self::RejectedRepeatsPrevious => {
                "Guess matches your previous guess. Try something new!".to_string()
            }
            Self::RejectedChangedCorrectLetter => {
                "Correctly guessed letters cannot be changed. Try again!".to_string()
            }
            Self::RejectedDroppedMisplacedLetter => {
                "Out-of-place letters must be used in your new guess. Try again!".to_string()
            }
        }
    }
}

/// Set of admissible guesses
pub trait Dictionary {
    fn contains_word(&self, word: &Word) -> bool;
}

impl<S: BuildHasher> Dictionary for HashSet<Word, S> {
    fn contains_word(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

/// Validate `guess` against the game history and target
///
/// `previous` is the most recent accepted guess, if any. Only that one guess
/// is consulted for the carry-forward rules.
///
/// # Examples
/// ```
/// use bootleg_wordle::core::{Verdict, Word, validate};
/// use std::collections::HashSet;
///
/// let dictionary: HashSet<Word> = ["crane", "cream", "crazy", "craze"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let target = Word::new("crane").unwrap();
/// // E and A are in the target, but not where CREAM put them
/// let previous = Word::new("cream").unwrap();
///
/// let verdict = validate("crazy", Some(&previous), &target, &dictionary, 5);
/// assert_eq!(verdict, Verdict::RejectedDroppedMisplacedLetter);
/// ```
#[must_use]
pub fn validate<D: Dictionary + ?Sized>(
    guess: &str,
    previous: Option<&Word>,
    target: &Word,
    dictionary: &D,
    length: usize,
) -> Verdict {
    if guess.is_empty() || !guess.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Verdict::RejectedNonAlphabetic;
    }

    if guess.len() != length {
        return Verdict::RejectedWrongLength;
    }

    let Ok(guess) = Word::new(guess) else {
        return Verdict::RejectedNonAlphabetic;
    };

    if !dictionary.contains_word(&guess) {
        return Verdict::RejectedNotInDictionary;
    }

    match previous {
        Some(previous) => check_carry_forward(&guess, previous, target),
        None => Verdict::Accepted,
    }
}

/// The guess must respect what the previous guess revealed
fn check_carry_forward(guess: &Word, previous: &Word, target: &Word) -> Verdict {
    if guess == previous {
        return Verdict::RejectedRepeatsPrevious;
    }

    let locked_changed = previous
        .chars()
        .iter()
        .zip(target.chars())
        .zip(guess.chars())
        .any(|((p, t), g)| p == t && g != p);
    if locked_changed {
        return Verdict::RejectedChangedCorrectLetter;
    }

    let mut carryover: FxHashSet<u8> = previous
        .chars()
        .iter()
        .zip(target.chars())
        .filter(|&(p, t)| p != t && target.has_letter(*p))
        .map(|(&p, _)| p)
        .collect();

    for letter in guess.chars() {
        carryover.remove(letter);
    }

    if carryover.is_empty() {
        Verdict::Accepted
    } else {
        Verdict::RejectedDroppedMisplacedLetter
    }
}
