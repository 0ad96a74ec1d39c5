//! Interrupt delivery for the animation loop.
//!
//! The Ctrl+C handler runs on its own thread and only sends a message; the
//! animation thread sees it at its next check or wakes early from its
//! inter-tick wait. Terminal restoration always happens on the animation
//! thread, when the alternate view guard goes out of scope.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

/// Sending side, held by whatever raises the interrupt.
#[derive(Debug, Clone)]
pub struct InterruptHandle(Sender<()>);

impl InterruptHandle {
    pub fn trigger(&self) {
        // Receiver gone means the animation already finished
        let _ = self.0.send(());
    }
}

/// Receiving side, polled by the animation loop.
///
/// Once an interrupt has been seen it stays fired.
#[derive(Debug)]
pub struct Interrupt {
    rx: Receiver<()>,
    fired: bool,
}

impl Interrupt {
    /// Route Ctrl+C (and SIGTERM/SIGHUP) into a new interrupt.
    ///
    /// Fails if a handler is already installed for this process.
    #[cfg(not(tarpaulin_include))]
    pub fn install() -> Result<Self, ctrlc::Error> {
        let (handle, interrupt) = Self::pair();
        ctrlc::set_handler(move || handle.trigger())?;
        Ok(interrupt)
    }

    /// A connected handle/interrupt pair not tied to any signal.
    pub fn pair() -> (InterruptHandle, Self) {
        let (tx, rx) = mpsc::channel();
        (InterruptHandle(tx), Self { rx, fired: false })
    }

    /// Whether an interrupt has arrived, without blocking.
    pub fn fired(&mut self) -> bool {
        if !self.fired {
            match self.rx.try_recv() {
                Ok(()) => self.fired = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
            }
        }
        self.fired
    }

    /// Wait for `duration` or until an interrupt arrives.
    ///
    /// Returns `true` if interrupted.
    pub fn sleep(&mut self, duration: Duration) -> bool {
        if self.fired {
            return true;
        }
        match self.rx.recv_timeout(duration) {
            Ok(()) => {
                self.fired = true;
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                // Nothing can interrupt us any more, plain sleep
                thread::sleep(duration);
                false
            }
        }
    }
}
