//! Shared helpers for integration tests.

use std::process::Command;

/// Enter alternate screen, hide cursor, clear and home.
pub const ENTER: &str = "\x1b[?1049h\x1b[?25l\x1b[2J\x1b[1;1H";

/// Show cursor, leave alternate screen.
pub const RESTORE: &str = "\x1b[?25h\x1b[?1049l";

/// assert_cmd handle on the veggie binary under test.
pub fn veggie() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("veggie").expect("veggie binary should be built")
}

/// Helper to run veggie and capture output
pub fn run_veggie(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_veggie"))
        .args(args)
        .output()
        .expect("Failed to execute veggie");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Count full frames in captured animation output.
///
/// Every frame starts by positioning row 1; the clear sequence also homes
/// the cursor, so clears are subtracted.
pub fn count_frames(stdout: &str) -> usize {
    stdout.matches("\x1b[1;1H").count() - stdout.matches("\x1b[2J\x1b[1;1H").count()
}
