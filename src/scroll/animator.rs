//! Scroll driver.
//!
//! Drives offsets across the screen, composing and writing one frame per
//! tick and waiting the configured delay between ticks.

use std::io::{self, Write};
use std::time::Duration;

use crate::art::ArtBuffer;
use crate::render::compose_frame;
use crate::scroll::interrupt::Interrupt;
use crate::scroll::path::{Direction, ScrollPath};
use crate::terminal::Surface;

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Every traversal ran to the far edge.
    Completed,
    /// An interrupt arrived; no further ticks were scheduled.
    Interrupted,
}

/// Per-invocation animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Delay between ticks.
    pub speed: Duration,
    pub direction: Direction,
    /// Repeat the whole run until interrupted.
    pub endless: bool,
}

impl AnimationSpec {
    /// Pause between the two figures of a dual run.
    pub fn pause(&self) -> Duration {
        self.speed.saturating_mul(3)
    }
}

/// Runs scroll animations against a surface.
///
/// The caller owns terminal mode setup; the animator only writes frames
/// and clears between figures.
pub struct Animator<'a, W: Write> {
    surface: &'a mut Surface<W>,
    interrupt: &'a mut Interrupt,
}

impl<'a, W: Write> Animator<'a, W> {
    pub fn new(surface: &'a mut Surface<W>, interrupt: &'a mut Interrupt) -> Self {
        Self { surface, interrupt }
    }

    /// Scroll one art buffer fully across the screen.
    pub fn scroll(
        &mut self,
        art: &ArtBuffer,
        direction: Direction,
        speed: Duration,
    ) -> io::Result<Flow> {
        let start = self.surface.query_size();
        let mut path = ScrollPath::new(direction, art.width(), start.width);
        let mut ticks = 0usize;

        tracing::debug!(
            art = art.name(),
            ?direction,
            width = start.width,
            height = start.height,
            "scroll start"
        );

        loop {
            if self.interrupt.fired() {
                tracing::debug!(art = art.name(), ticks, "scroll interrupted");
                return Ok(Flow::Interrupted);
            }

            // Terminals may be resized between frames
            let viewport = self.surface.query_size();
            let Some(offset) = path.advance(viewport.width) else {
                break;
            };

            let frame = compose_frame(art, offset, viewport);
            self.surface.write_frame(&frame)?;
            ticks += 1;

            if self.interrupt.sleep(speed) {
                tracing::debug!(art = art.name(), ticks, "scroll interrupted");
                return Ok(Flow::Interrupted);
            }
        }

        tracing::debug!(art = art.name(), ticks, "scroll complete");
        Ok(Flow::Completed)
    }

    /// Play `arts` back to back, forever if `spec.endless` is set.
    ///
    /// Between figures the screen is cleared and held blank for
    /// [`AnimationSpec::pause`]. Each repetition of an endless run is an
    /// independent traversal.
    pub fn play(&mut self, spec: &AnimationSpec, arts: &[&ArtBuffer]) -> io::Result<Flow> {
        if arts.is_empty() {
            return Ok(Flow::Completed);
        }

        let mut round = 0u64;
        loop {
            round += 1;
            tracing::debug!(round, figures = arts.len(), "animation round");

            if self.run_once(spec, arts)? == Flow::Interrupted {
                return Ok(Flow::Interrupted);
            }
            if !spec.endless {
                return Ok(Flow::Completed);
            }
        }
    }

    fn run_once(&mut self, spec: &AnimationSpec, arts: &[&ArtBuffer]) -> io::Result<Flow> {
        for (i, art) in arts.iter().enumerate() {
            if i > 0 {
                self.surface.clear()?;
                if self.interrupt.sleep(spec.pause()) {
                    return Ok(Flow::Interrupted);
                }
            }
            if self.scroll(art, spec.direction, spec.speed)? == Flow::Interrupted {
                return Ok(Flow::Interrupted);
            }
        }
        Ok(Flow::Completed)
    }
}
