//! veggie - slides a cucumber and an eggplant across your terminal.
//!
//! The crate is organized leaf-first:
//! - `art`: the four built-in art buffers and how they are loaded
//! - `terminal`: viewport queries, control sequences, alternate-screen guard
//! - `render`: the frame compositor (art + offset -> full-screen frame)
//! - `scroll`: the tick loop driving offsets across the screen
//! - `session`: stay mode vs. animation, terminal setup and teardown
//! - `cli`: the clap definition shared by the binary and `xtask`
//!
//! # Usage
//!
//! ```no_run
//! use veggie::art::ArtStore;
//! use veggie::scroll::Interrupt;
//! use veggie::session::{self, SessionOptions};
//! use veggie::terminal::Surface;
//!
//! let store = ArtStore::embedded().unwrap();
//! let mut interrupt = Interrupt::install().unwrap();
//! let outcome = session::run(
//!     &SessionOptions::default(),
//!     &store,
//!     Surface::stdout(),
//!     &mut interrupt,
//! )
//! .unwrap();
//! println!("{:?}", outcome);
//! ```

pub mod art;
pub mod cli;
pub mod render;
pub mod scroll;
pub mod session;
pub mod terminal;
pub mod theme;

pub use art::{ArtBuffer, ArtError, ArtStore, Figure, Orientation};
pub use cli::Cli;
pub use session::{Outcome, Selection, SessionOptions};
pub use terminal::Viewport;
