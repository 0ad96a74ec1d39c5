//! Scroll driver module.
//!
//! # Architecture
//!
//! - `path`: the offset state machine for one traversal
//! - `interrupt`: Ctrl+C delivery into the tick loop
//! - `animator`: the tick loop itself (compose, write, wait), dual-figure
//!   runs and endless repetition

mod animator;
mod interrupt;
mod path;

pub use animator::{AnimationSpec, Animator, Flow};
pub use interrupt::{Interrupt, InterruptHandle};
pub use path::{Direction, ScrollPath, STEP};
