//! Bootleg Wordle
//!
//! A terminal word-guessing game where every guess must respect what the
//! previous one revealed: letters found in the right place stay put, and
//! letters found in the wrong place must be used again.
//!
//! # Quick Start
//!
//! ```rust
//! use bootleg_wordle::core::Word;
//! use bootleg_wordle::game::{GameConfig, GameSession, Outcome};
//! use bootleg_wordle::wordlists::WordPool;
//!
//! let pool = WordPool::new(["apple", "grape"], ["ample"], 5, 6).unwrap();
//! let target = Word::new("apple").unwrap();
//! let mut game = GameSession::with_target(&pool, GameConfig::default(), target).unwrap();
//!
//! game.submit("grape");
//! game.submit("apple");
//! assert_eq!(game.state().outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;
