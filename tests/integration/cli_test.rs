//! Integration tests for the command-line surface

use predicates::prelude::*;

use crate::helpers::{run_veggie, veggie};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_veggie(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Usage: veggie"));
    assert!(stdout.contains("CHARACTER|SPEED"));
    assert!(stdout.contains("--stay"));
    assert!(stdout.contains("--reverse"));
    assert!(stdout.contains("--endless"));
}

#[test]
fn short_help_flag_works() {
    veggie()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: veggie"));
}

#[test]
fn help_does_not_touch_the_terminal() {
    let (stdout, _stderr, _code) = run_veggie(&["--help"]);
    assert!(!stdout.contains("\x1b[?1049h"));
}

#[test]
fn version_prints_package_version() {
    veggie()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn too_many_positionals_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_veggie(&["cucumber", "10", "extra"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("extra"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    veggie()
        .arg("--sideways")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--sideways"));
}

#[test]
fn non_numeric_speed_still_runs() {
    veggie()
        .args(["--stay", "cucumber", "quickly"])
        .assert()
        .success();
}

#[test]
fn non_numeric_speed_is_logged_when_verbose() {
    veggie()
        .args(["--stay", "-v", "quickly"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using default speed"));
}

#[test]
fn log_output_is_plain_when_stderr_is_piped() {
    let (_stdout, stderr, exit_code) = run_veggie(&["--stay", "-v", "quickly"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("WARN"));
    assert!(!stderr.contains('\x1b'), "stderr: {:?}", stderr);
}
