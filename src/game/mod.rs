//! Game session and its collaborators
//!
//! The session owns the mutable game state; input and rendering are traits so
//! the loop can be driven by a terminal or by a script.

pub mod input;
pub mod render;
pub mod session;

pub use input::{InputSource, LineInput};
pub use render::{IntroInfo, Renderer};
pub use session::{
    DEFAULT_STOP_TOKEN, GameConfig, GameSession, GameState, GameSummary, Outcome, SessionError,
    TurnResult,
};
