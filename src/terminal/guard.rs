//! Scoped alternate-screen acquisition.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use super::surface::Surface;

/// Alternate screen with a hidden cursor, restored when released or dropped.
///
/// Restoring shows the cursor and leaves the alternate screen. It runs
/// exactly once: on [`AlternateView::release`], or from `Drop` on every other
/// path out of the scope (early `?` return, panic unwinding).
pub struct AlternateView<W: Write> {
    surface: Surface<W>,
    restored: bool,
}

impl<W: Write> AlternateView<W> {
    /// Enter the alternate screen, hide the cursor and clear it.
    pub fn acquire(mut surface: Surface<W>) -> io::Result<Self> {
        surface.enter_alternate_view()?;
        // From here on the guard owns restoration, even if the rest fails.
        let mut view = Self {
            surface,
            restored: false,
        };
        view.surface.hide_cursor()?;
        view.surface.clear()?;
        tracing::debug!("entered alternate view");
        Ok(view)
    }

    /// Restore the terminal now and report any write failure.
    pub fn release(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        self.surface.show_cursor()?;
        self.surface.exit_alternate_view()?;
        tracing::debug!("left alternate view");
        Ok(())
    }
}

impl<W: Write> Deref for AlternateView<W> {
    type Target = Surface<W>;

    fn deref(&self) -> &Surface<W> {
        &self.surface
    }
}

impl<W: Write> DerefMut for AlternateView<W> {
    fn deref_mut(&mut self) -> &mut Surface<W> {
        &mut self.surface
    }
}

impl<W: Write> Drop for AlternateView<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("failed to restore terminal: {}", e);
        }
    }
}
