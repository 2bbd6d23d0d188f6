//! Terminal output formatting
//!
//! Pure styling and grid helpers plus the renderer that prints a session.

pub mod display;
pub mod formatters;
pub mod style;

pub use display::TerminalRenderer;
