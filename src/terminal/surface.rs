//! Terminal surface: size queries and control sequences.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use terminal_size::{terminal_size, Height, Width};

use super::types::Viewport;

/// Where a [`Surface`] gets its viewport size from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    /// Ask the terminal on every query, falling back to 80x24.
    Live,
    /// Always report the same size.
    Fixed(Viewport),
}

/// Output side of the terminal.
///
/// Generic over the writer so frames can be captured in memory.
pub struct Surface<W: Write> {
    out: W,
    size: SizeSource,
}

impl Surface<io::Stdout> {
    /// Surface over stdout with live size queries.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Surface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            size: SizeSource::Live,
        }
    }

    /// Surface that always reports `viewport` as its size.
    pub fn with_size(out: W, viewport: Viewport) -> Self {
        Self {
            out,
            size: SizeSource::Fixed(viewport),
        }
    }

    /// Current terminal geometry.
    pub fn query_size(&self) -> Viewport {
        match self.size {
            SizeSource::Fixed(viewport) => viewport,
            SizeSource::Live => match terminal_size() {
                Some((Width(cols), Height(rows))) => Viewport::from((cols, rows)),
                None => Viewport::FALLBACK,
            },
        }
    }

    pub fn enter_alternate_view(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen)
    }

    pub fn exit_alternate_view(&mut self) -> io::Result<()> {
        execute!(self.out, LeaveAlternateScreen)
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, Show)
    }

    /// Clear the whole screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Move the cursor to a 1-indexed column and row.
    pub fn position_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        execute!(
            self.out,
            MoveTo(col.saturating_sub(1), row.saturating_sub(1))
        )
    }

    /// Write a composed frame in one call and flush it.
    pub fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    /// Print lines to the normal screen with the cursor hidden while
    /// writing. Used by stay mode.
    pub fn write_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        queue!(self.out, Hide)?;
        for line in lines {
            self.out.write_all(line.as_ref().as_bytes())?;
            self.out.write_all(b"\n")?;
        }
        execute!(self.out, Show)
    }
}
