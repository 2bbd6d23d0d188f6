//! Stateless text styling
//!
//! Styles are plain values passed to [`format`]; nothing is stored globally.

use colored::{Color, Colorize};

/// Foreground colours available to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Blue,
    Green,
    Yellow,
}

impl From<Colour> for Color {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::Blue => Self::BrightBlue,
            Colour::Green => Self::BrightGreen,
            Colour::Yellow => Self::BrightYellow,
        }
    }
}

/// Text attributes for one span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub colour: Option<Colour>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    /// No attributes; [`format`] returns the text untouched
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            colour: None,
            bold: false,
            underline: false,
        }
    }

    #[must_use]
    pub const fn bold() -> Self {
        Self {
            colour: None,
            bold: true,
            underline: false,
        }
    }

    /// Bold text in `colour`, the renderer's usual highlight
    #[must_use]
    pub const fn highlight(colour: Colour) -> Self {
        Self {
            colour: Some(colour),
            bold: true,
            underline: false,
        }
    }

    #[must_use]
    pub const fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.colour.is_none() && !self.bold && !self.underline
    }
}

/// Apply `style` to `text`
///
/// # Examples
/// ```
/// use bootleg_wordle::output::style::{Style, format};
///
/// assert_eq!(format("crane", Style::plain()), "crane");
/// ```
#[must_use]
pub fn format(text: &str, style: Style) -> String {
    if style.is_plain() {
        return text.to_string();
    }

    let mut styled = text.normal();
    if style.bold {
        styled = styled.bold();
    }
    if style.underline {
        styled = styled.underline();
    }
    if let Some(colour) = style.colour {
        styled = styled.color(Color::from(colour));
    }

    styled.to_string()
}
