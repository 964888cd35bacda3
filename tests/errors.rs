use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bfi").unwrap() }

#[test]
fn lone_open_bracket_fails_with_no_output() {
    cargo_bin()
        .timeout(Duration::from_secs(2)).arg("[")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched bracket '['"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn lone_close_bracket_fails_with_no_output() {
    cargo_bin()
        .timeout(Duration::from_secs(2)).arg("]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched bracket ']'"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn bracket_errors_report_the_instruction_position() {
    // The ']' is the third instruction once comments are stripped.
    cargo_bin()
        .timeout(Duration::from_secs(2)).arg("+ comment -]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at instruction 2"));
}

#[test]
fn output_before_an_unmatched_bracket_is_suppressed() {
    // Bracket matching runs before execution, so the '.' never emits.
    cargo_bin()
        .timeout(Duration::from_secs(2)).arg("+.[")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
