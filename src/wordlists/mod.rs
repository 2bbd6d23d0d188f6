//! Word lists for the game
//!
//! Raw token loading plus the length-filtered pool the session draws from.

pub mod loader;
mod pool;

pub use pool::{MIN_GUESSES, MIN_LENGTH, PoolError, WordPool};
