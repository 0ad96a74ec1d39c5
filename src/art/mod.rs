//! Art store.
//!
//! Holds the two built-in figures, each in a forward (faces left, walks
//! left) and a reverse (faces right, walks right) variant. The reverse art
//! is drawn separately rather than mirrored at runtime.

mod buffer;
mod error;
mod store;

use std::fmt;
use std::str::FromStr;

pub use buffer::{char_columns, display_width, ArtBuffer};
pub use error::ArtError;
pub use store::{load, ArtStore, Resources};

/// A built-in figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    Cucumber,
    Eggplant,
}

impl Figure {
    /// Every figure, in the order a dual run plays them.
    pub const ALL: [Figure; 2] = [Figure::Cucumber, Figure::Eggplant];

    /// Lowercase name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cucumber => "cucumber",
            Self::Eggplant => "eggplant",
        }
    }

    /// Resource name of this figure's art in the given orientation.
    pub fn resource_name(&self, orientation: Orientation) -> &'static str {
        match (self, orientation) {
            (Self::Cucumber, Orientation::Forward) => "cucumber",
            (Self::Cucumber, Orientation::Reverse) => "cucumber-reverse",
            (Self::Eggplant, Orientation::Forward) => "eggplant",
            (Self::Eggplant, Orientation::Reverse) => "eggplant-reverse",
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a figure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown figure '{0}'")]
pub struct UnknownFigure(pub String);

impl FromStr for Figure {
    type Err = UnknownFigure;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cucumber" => Ok(Self::Cucumber),
            "eggplant" => Ok(Self::Eggplant),
            _ => Err(UnknownFigure(s.to_string())),
        }
    }
}

/// Which hand-drawn variant of a figure to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Faces left; used for leftward scrolling and stay mode.
    #[default]
    Forward,
    /// Faces right; used with `--reverse`.
    Reverse,
}

impl Orientation {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}
