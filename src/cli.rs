//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page and shell
//! completions from the same definition the binary parses.

use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::art::Figure;
use crate::session::{Selection, SessionOptions, DEFAULT_SPEED_MS};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("VEGGIE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("VEGGIE_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "\
Examples:
  veggie                     Cucumber, then eggplant
  veggie eggplant            Just the eggplant
  veggie cucumber 10         Fast cucumber
  veggie 80 --reverse        Both, slowly, left to right
  veggie --stay eggplant     Print the eggplant and exit
  veggie --endless           Loop until Ctrl+C";

/// Slides a cucumber and an eggplant across your terminal.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "veggie",
    version,
    long_version = LONG_VERSION,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Figure to show (cucumber or eggplant, default both) and/or frame delay
    /// in milliseconds (1-100, lower is faster, default 30)
    #[arg(value_name = "CHARACTER|SPEED", num_args = 0..=2)]
    pub args: Vec<String>,

    /// Print the art once instead of animating it
    #[arg(long)]
    pub stay: bool,

    /// Scroll left to right using the right-facing art
    #[arg(long)]
    pub reverse: bool,

    /// Repeat the animation until interrupted
    #[arg(long)]
    pub endless: bool,

    /// Log more to stderr (-v warnings, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve positionals and flags into session options.
    pub fn options(&self) -> SessionOptions {
        let (selection, speed_ms) = parse_positionals(&self.args);
        SessionOptions {
            selection,
            speed: Duration::from_millis(speed_ms),
            reverse: self.reverse,
            stay: self.stay,
            endless: self.endless,
        }
    }

    /// Maximum log level for the stderr subscriber.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::ERROR,
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Split `[character] [speed]` positionals in either order.
///
/// A token naming a figure selects it; anything else is taken as the speed,
/// falling back to the default when it is not a number.
pub fn parse_positionals<S: AsRef<str>>(args: &[S]) -> (Selection, u64) {
    let mut selection = Selection::Both;
    let mut speed = DEFAULT_SPEED_MS;

    for arg in args {
        let arg = arg.as_ref();
        if let Ok(figure) = arg.parse::<Figure>() {
            selection = Selection::One(figure);
            continue;
        }
        match arg.trim().parse::<u64>() {
            Ok(ms) => speed = ms,
            Err(_) => {
                tracing::warn!(
                    value = arg,
                    default = DEFAULT_SPEED_MS,
                    "not a figure or a speed, using default speed"
                );
                speed = DEFAULT_SPEED_MS;
            }
        }
    }

    (selection, speed)
}
