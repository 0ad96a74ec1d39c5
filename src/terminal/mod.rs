//! Terminal surface module.
//!
//! Everything that touches the real terminal lives here:
//! - `types`: Viewport geometry
//! - `surface`: size queries and the control sequences the animation needs
//! - `guard`: scoped alternate-screen/hidden-cursor acquisition

mod guard;
mod surface;
mod types;

pub use guard::AlternateView;
pub use surface::{SizeSource, Surface};
pub use types::Viewport;
