use assert_cmd::Command;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bfi").unwrap() }

// These tests exercise the ',' (input) instruction: with the program given
// as an argument, stdin is free to feed the run itself.

#[test]
fn reads_a_byte_from_stdin_and_echoes_it() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(",.")
        .write_stdin("Z")
        .assert()
        .success()
        .stdout("Z");
}

#[test]
fn copies_stdin_to_stdout_byte_by_byte() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(",[.,]")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn comma_at_eof_zeroes_the_cell_and_continues() {
    // The cell is loaded first so the zero written by ',' is observable.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+++,.")
        .assert()
        .success()
        .stdout(vec![0u8]);
}
