//! Frame compositor.
//!
//! Turns an art buffer plus a horizontal offset into one full-viewport frame:
//! - `frame`: the pure compositing functions
//! - `ansi`: the raw sequences frames are assembled from

pub mod ansi;
mod frame;

pub use frame::{compose_frame, compose_row, compose_rows, vertical_start, Offset};
