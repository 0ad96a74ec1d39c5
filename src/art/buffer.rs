//! Immutable art buffers.
//!
//! An [`ArtBuffer`] is the parsed form of one art resource: an ordered list of
//! rows measured in terminal display columns.

use unicode_width::UnicodeWidthChar;

/// Tab stops used when expanding tabs in art rows.
const TAB_WIDTH: usize = 8;

/// Display width of a single character in terminal columns.
///
/// Control characters never reach a buffer (they are normalized away on
/// parse), so anything without a defined width counts as zero.
#[inline]
pub fn char_columns(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_columns).sum()
}

/// One pre-authored piece of ASCII art.
///
/// Width is the widest row in display columns, height is the row count.
/// Buffers are never mutated after [`ArtBuffer::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtBuffer {
    name: String,
    lines: Vec<String>,
    width: usize,
}

impl ArtBuffer {
    /// Parse art text into a buffer.
    ///
    /// Trailing blank rows are dropped, interior blank rows are kept since
    /// they are part of the figure (gaps between legs and the like).
    /// Tabs are expanded and other control characters removed.
    pub fn parse(name: impl Into<String>, text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(normalize_row).collect();

        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);

        Self {
            name: name.into(),
            lines,
            width,
        }
    }

    /// Resource name this buffer was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All rows, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Widest row in display columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn normalize_row(raw: &str) -> String {
    let mut row = String::with_capacity(raw.len());
    let mut col = 0;

    for c in raw.chars() {
        match c {
            '\t' => {
                let pad = TAB_WIDTH - col % TAB_WIDTH;
                row.extend(std::iter::repeat(' ').take(pad));
                col += pad;
            }
            c if c.is_control() => {}
            c => {
                row.push(c);
                col += char_columns(c);
            }
        }
    }

    row
}
