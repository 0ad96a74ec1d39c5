//! Offset sequence for one traversal of the screen.

use crate::render::Offset;

/// Columns the art moves per tick.
pub const STEP: usize = 2;

/// Which way the art travels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Enters on the right, leaves on the left.
    #[default]
    Leftward,
    /// Enters on the left, leaves on the right.
    Rightward,
}

impl Direction {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Rightward
        } else {
            Self::Leftward
        }
    }
}

/// State of one single-figure traversal.
///
/// Leftward runs start at the viewport width seen when the run begins and
/// stop once the offset drops below `-art_width`. Rightward runs start at
/// `-art_width` and stop once the offset passes the *live* viewport width,
/// so a terminal widened mid-run still sees the art leave completely.
#[derive(Debug, Clone)]
pub struct ScrollPath {
    direction: Direction,
    art_width: Offset,
    next: Offset,
}

impl ScrollPath {
    pub fn new(direction: Direction, art_width: usize, viewport_width: usize) -> Self {
        let art_width = art_width as Offset;
        let next = match direction {
            Direction::Leftward => viewport_width as Offset,
            Direction::Rightward => -art_width,
        };
        Self {
            direction,
            art_width,
            next,
        }
    }

    /// Offset for the next tick, or `None` once the far bound is passed.
    pub fn advance(&mut self, viewport_width: usize) -> Option<Offset> {
        let offset = self.next;
        let step = STEP as Offset;

        match self.direction {
            Direction::Leftward => {
                if offset < -self.art_width {
                    return None;
                }
                self.next = offset - step;
            }
            Direction::Rightward => {
                if offset > viewport_width as Offset {
                    return None;
                }
                self.next = offset + step;
            }
        }

        Some(offset)
    }
}
