//! Integration tests for veggie.
//!
//! Runs the real binary end to end (stdout is a pipe, so the viewport
//! falls back to 80x24) and exercises the library through its public API.

mod animation_test;
mod art_test;
mod cli_test;
mod helpers;
mod stay_test;
