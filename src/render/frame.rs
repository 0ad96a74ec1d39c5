//! Frame compositing.
//!
//! Maps one art buffer at a horizontal offset onto the viewport. Every frame
//! has exactly `viewport.height` rows of exactly `viewport.width` display
//! columns, whatever the art size or offset.

use crate::art::{char_columns, ArtBuffer};
use crate::render::ansi::{move_to, push_spaces, CLEAR_TO_EOL};
use crate::terminal::Viewport;

/// Screen column (0-based) of the art's leftmost column.
///
/// Negative values mean the art has scrolled off the left edge by that many
/// columns; values at or past the viewport width mean it is entirely off the
/// right edge.
pub type Offset = isize;

/// First screen row (0-based) the art occupies when centered vertically.
///
/// Art taller than the viewport starts at row 0 and runs off the bottom.
pub fn vertical_start(art_height: usize, viewport_height: usize) -> usize {
    viewport_height.saturating_sub(art_height) / 2
}

/// Compose one screen row from one art row.
///
/// - `offset >= width`: the art has not entered yet (or has left), all blank.
/// - `offset > 0`: `offset` blank columns, then the start of the art row.
/// - `offset <= 0`: the art row from column `-offset` onward.
///
/// The result is padded with spaces to exactly `width` columns. A wide
/// character cut by either edge is replaced with spaces.
pub fn compose_row(line: &str, offset: Offset, width: usize) -> String {
    let mut row = String::with_capacity(width);

    if offset >= width as Offset {
        push_spaces(&mut row, width);
        return row;
    }

    let (lead, skip) = if offset > 0 {
        (offset as usize, 0)
    } else {
        (0, offset.unsigned_abs())
    };

    push_spaces(&mut row, lead);
    let used = push_columns(&mut row, line, skip, width - lead);
    push_spaces(&mut row, width - lead - used);
    row
}

/// Append the part of `line` covering columns `skip..skip + max`.
///
/// Returns the number of display columns appended (never more than `max`).
fn push_columns(out: &mut String, line: &str, skip: usize, max: usize) -> usize {
    let end = skip.saturating_add(max);
    let mut col = 0usize;
    let mut used = 0usize;
    let mut prev_visible = false;

    for c in line.chars() {
        let cw = char_columns(c);
        let start = col;
        col += cw;

        if cw == 0 {
            // Combining marks ride along with the character they follow
            if prev_visible {
                out.push(c);
            }
            continue;
        }

        if start >= end {
            break;
        }

        if start >= skip && col <= end {
            out.push(c);
            used += cw;
            prev_visible = true;
        } else {
            let overlap = col.min(end).saturating_sub(start.max(skip));
            push_spaces(out, overlap);
            used += overlap;
            prev_visible = false;
        }
    }

    used
}

/// Compose the visible text of a frame, one string per screen row.
pub fn compose_rows(art: &ArtBuffer, offset: Offset, viewport: Viewport) -> Vec<String> {
    let top = vertical_start(art.height(), viewport.height);

    (0..viewport.height)
        .map(|screen_row| {
            match screen_row.checked_sub(top).and_then(|i| art.row(i)) {
                Some(line) => compose_row(line, offset, viewport.width),
                None => " ".repeat(viewport.width),
            }
        })
        .collect()
}

/// Compose a full frame ready to be written in one call.
///
/// Each row is prefixed with an explicit cursor position and followed by
/// an erase-to-end-of-line so a terminal wider than the queried size keeps
/// no stale characters.
pub fn compose_frame(art: &ArtBuffer, offset: Offset, viewport: Viewport) -> String {
    let rows = compose_rows(art, offset, viewport);
    // Build output string to minimize syscalls
    let mut output =
        String::with_capacity(viewport.height * (viewport.width + CLEAR_TO_EOL.len() + 8));

    for (i, row) in rows.iter().enumerate() {
        move_to(&mut output, i + 1, 1);
        output.push_str(row);
        output.push_str(CLEAR_TO_EOL);
    }

    output
}
