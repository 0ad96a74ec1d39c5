//! Integration tests for the scrolling animation

#[cfg(unix)]
use std::process::{Command, Stdio};
#[cfg(unix)]
use std::thread;
#[cfg(unix)]
use std::time::Duration;

use veggie::{ArtStore, Figure, Orientation, Viewport};

use crate::helpers::{count_frames, run_veggie, ENTER, RESTORE};

/// Frames for one full traversal at the fallback viewport.
fn traversal_frames(figure: Figure, orientation: Orientation) -> usize {
    let store = ArtStore::embedded().unwrap();
    let art_width = store.get(figure, orientation).width();
    // From +width down to -art_width (or back), two columns per tick
    (Viewport::FALLBACK.width + art_width) / 2 + 1
}

#[test]
fn single_figure_animation_restores_terminal() {
    let (stdout, stderr, exit_code) = run_veggie(&["cucumber", "1"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with(ENTER));
    assert!(stdout.ends_with(RESTORE));
}

#[test]
fn single_figure_draws_one_full_traversal() {
    let (stdout, _stderr, _code) = run_veggie(&["eggplant", "1"]);

    assert_eq!(
        count_frames(&stdout),
        traversal_frames(Figure::Eggplant, Orientation::Forward)
    );
}

#[test]
fn frames_fill_the_fallback_viewport() {
    let (stdout, _stderr, _code) = run_veggie(&["cucumber", "1"]);

    let last_row = format!("\x1b[{};1H", Viewport::FALLBACK.height);
    let beyond = format!("\x1b[{};1H", Viewport::FALLBACK.height + 1);
    assert!(stdout.contains(&last_row));
    assert!(!stdout.contains(&beyond));
}

#[test]
fn both_figures_share_one_alternate_screen() {
    let (stdout, _stderr, exit_code) = run_veggie(&["1"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.matches("\x1b[?1049h").count(), 1);
    assert_eq!(stdout.matches("\x1b[?1049l").count(), 1);
    assert_eq!(
        count_frames(&stdout),
        traversal_frames(Figure::Cucumber, Orientation::Forward)
            + traversal_frames(Figure::Eggplant, Orientation::Forward)
    );
}

#[test]
fn reverse_animation_uses_reverse_art() {
    let store = ArtStore::embedded().unwrap();
    let reverse = store.get(Figure::Cucumber, Orientation::Reverse);
    let widest = reverse
        .lines()
        .iter()
        .max_by_key(|l| l.len())
        .unwrap()
        .trim()
        .to_string();

    let (stdout, _stderr, exit_code) = run_veggie(&["cucumber", "1", "--reverse"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(&widest));
    assert!(stdout.ends_with(RESTORE));
}

#[cfg(unix)]
#[test]
fn interrupt_restores_terminal_and_exits_0() {
    let child = Command::new(env!("CARGO_BIN_EXE_veggie"))
        .args(["--endless", "5"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start veggie");

    thread::sleep(Duration::from_millis(300));
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());

    // Draining stdout also unblocks a child stuck on a full pipe
    let output = child.wait_with_output().expect("Failed to wait on veggie");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with(ENTER));
    assert!(stdout.ends_with(RESTORE));
    assert_eq!(stdout.matches("\x1b[?1049l").count(), 1);
}
