//! Integration tests for stay mode (static print)

use veggie::{ArtStore, Figure, Orientation};

use crate::helpers::run_veggie;

fn expected(figures: &[Figure], orientation: Orientation) -> String {
    let store = ArtStore::embedded().unwrap();
    let body = figures
        .iter()
        .map(|f| store.get(*f, orientation).lines().join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("\x1b[?25l{}\n\x1b[?25h", body)
}

#[test]
fn stay_cucumber_prints_art_once() {
    let (stdout, stderr, exit_code) = run_veggie(&["--stay", "cucumber"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, expected(&[Figure::Cucumber], Orientation::Forward));
}

#[test]
fn stay_is_case_insensitive_and_order_independent() {
    let (stdout, _stderr, exit_code) = run_veggie(&["EGGPLANT", "--stay"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, expected(&[Figure::Eggplant], Orientation::Forward));
}

#[test]
fn stay_without_character_prints_both() {
    let (stdout, _stderr, exit_code) = run_veggie(&["--stay"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        expected(&[Figure::Cucumber, Figure::Eggplant], Orientation::Forward)
    );
}

#[test]
fn stay_reverse_uses_reverse_art() {
    let (stdout, _stderr, exit_code) = run_veggie(&["--stay", "--reverse", "cucumber"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, expected(&[Figure::Cucumber], Orientation::Reverse));
}

#[test]
fn stay_never_uses_alternate_screen() {
    let (stdout, _stderr, _code) = run_veggie(&["--stay", "--endless", "eggplant"]);

    assert!(!stdout.contains("\x1b[?1049h"));
    assert!(!stdout.contains("\x1b[2J"));
}
