//! Terminal data types.

/// Visible terminal area in character cells.
///
/// Re-queried for every frame since the terminal may be resized between
/// frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
}

impl Viewport {
    /// Size assumed when the terminal geometry cannot be read
    /// (output redirected, no controlling terminal).
    pub const FALLBACK: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl From<(u16, u16)> for Viewport {
    /// From a `(cols, rows)` pair.
    fn from((cols, rows): (u16, u16)) -> Self {
        Self::new(cols as usize, rows as usize)
    }
}
