//! Raw ANSI sequences used when assembling frames.
//!
//! Frames are built as one string and written in a single call, so these
//! append to a buffer instead of going through crossterm's command queue.

use std::fmt::Write;

/// Erase from the cursor to the end of the line.
pub const CLEAR_TO_EOL: &str = "\x1b[K";

/// Append a cursor-position sequence for a 1-indexed `row` and `col`.
pub fn move_to(buf: &mut String, row: usize, col: usize) {
    // Writing into a String cannot fail
    let _ = write!(buf, "\x1b[{};{}H", row, col);
}

/// Append `count` spaces.
pub fn push_spaces(buf: &mut String, count: usize) {
    buf.extend(std::iter::repeat(' ').take(count));
}
