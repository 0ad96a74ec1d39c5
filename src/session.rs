//! Session controller.
//!
//! Maps the parsed options onto either a one-shot static print (stay mode)
//! or a scroll animation inside the alternate screen.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::art::{ArtBuffer, ArtStore, Figure, Orientation};
use crate::scroll::{AnimationSpec, Animator, Direction, Flow, Interrupt};
use crate::terminal::{AlternateView, Surface};

/// Frame delay used when none (or a non-numeric one) is given.
pub const DEFAULT_SPEED_MS: u64 = 30;

/// Which figures to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    One(Figure),
    /// Cucumber, then eggplant.
    #[default]
    Both,
}

impl Selection {
    pub fn figures(&self) -> Vec<Figure> {
        match self {
            Self::One(figure) => vec![*figure],
            Self::Both => Figure::ALL.to_vec(),
        }
    }
}

/// Static print or animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stay,
    Animate,
}

/// Everything a session needs to know, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub selection: Selection,
    /// Delay between animation ticks; lower is faster.
    pub speed: Duration,
    pub reverse: bool,
    pub stay: bool,
    pub endless: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            selection: Selection::Both,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            reverse: false,
            stay: false,
            endless: false,
        }
    }
}

impl SessionOptions {
    pub fn mode(&self) -> Mode {
        if self.stay {
            Mode::Stay
        } else {
            Mode::Animate
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_reverse(self.reverse)
    }

    pub fn animation(&self) -> AnimationSpec {
        AnimationSpec {
            speed: self.speed,
            direction: Direction::from_reverse(self.reverse),
            endless: self.endless,
        }
    }

    /// Art buffers to show, in order.
    pub fn arts<'s>(&self, store: &'s ArtStore) -> Vec<&'s ArtBuffer> {
        let orientation = self.orientation();
        self.selection
            .figures()
            .into_iter()
            .map(|figure| store.get(figure, orientation))
            .collect()
    }
}

/// How a session ended. Both map to a successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

impl From<Flow> for Outcome {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Completed => Self::Completed,
            Flow::Interrupted => Self::Interrupted,
        }
    }
}

/// Run one session to completion or interruption.
pub fn run<W: Write>(
    options: &SessionOptions,
    store: &ArtStore,
    surface: Surface<W>,
    interrupt: &mut Interrupt,
) -> Result<Outcome> {
    let arts = options.arts(store);
    tracing::info!(
        mode = ?options.mode(),
        figures = ?options.selection.figures(),
        speed_ms = options.speed.as_millis() as u64,
        reverse = options.reverse,
        endless = options.endless,
        "session start"
    );

    let outcome = match options.mode() {
        Mode::Stay => {
            stay(surface, &arts)?;
            Outcome::Completed
        }
        Mode::Animate => animate(surface, &options.animation(), &arts, interrupt)?,
    };

    tracing::info!(?outcome, "session end");
    Ok(outcome)
}

/// Print the art once to the normal screen.
///
/// Multiple figures are separated by one blank line.
fn stay<W: Write>(mut surface: Surface<W>, arts: &[&ArtBuffer]) -> Result<()> {
    let mut lines: Vec<&str> = Vec::new();
    for (i, art) in arts.iter().enumerate() {
        if i > 0 {
            lines.push("");
        }
        lines.extend(art.lines().iter().map(String::as_str));
    }
    surface
        .write_lines(&lines)
        .context("Failed to write art to the terminal")
}

fn animate<W: Write>(
    surface: Surface<W>,
    spec: &AnimationSpec,
    arts: &[&ArtBuffer],
    interrupt: &mut Interrupt,
) -> Result<Outcome> {
    let mut view = AlternateView::acquire(surface).context("Failed to enter alternate screen")?;

    // Any early return from here drops `view`, which restores the terminal
    let flow = Animator::new(&mut view, interrupt)
        .play(spec, arts)
        .context("Failed to draw animation frame")?;

    view.release().context("Failed to restore terminal")?;
    Ok(flow.into())
}
