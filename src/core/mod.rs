//! Core domain types for the guessing engine
//!
//! Pure, stateless pieces: words, per-letter feedback and guess validation.
//! Nothing here performs I/O or holds game state.

mod feedback;
mod validator;
mod word;

pub use feedback::{Feedback, LetterClass, classify};
pub use validator::{Dictionary, Verdict, validate};
pub use word::{Word, WordError};
