//! Colours for CLI messages.
//!
//! The art itself is never coloured; this only styles what the binary
//! prints around it on failure.

use crossterm::style::Color;

/// Theme configuration for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Error color
    pub error: Color,
    /// Whether to emit colour codes at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::garden()
    }
}

impl Theme {
    /// Red errors.
    pub fn garden() -> Self {
        Self {
            error: Color::Red,
            enabled: true,
        }
    }

    /// Same colours, but plain text (output is not a terminal).
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::garden()
        }
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a crossterm Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to no color
        _ => "",
    }
}

/// Theme for messages written to stderr.
///
/// Colour is dropped when stderr is redirected.
pub fn stderr_theme() -> Theme {
    use std::io::IsTerminal;

    if std::io::stderr().is_terminal() {
        Theme::default()
    } else {
        Theme::plain()
    }
}
