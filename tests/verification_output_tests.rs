// Copyright 2025 Cowboy AI, LLC.

#![cfg(feature = "cli")]

use std::process::Command;

use pretty_assertions::assert_eq;

#[test]
fn binary_prints_three_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_yoneda-lemma"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3\n3\n0 1 2\n");
}

#[test]
fn library_report_matches_binary_lines() {
    let report = yoneda_lemma::verify().unwrap();
    assert_eq!(report.lines(), vec!["3", "3", "0 1 2"]);
    assert_eq!(report.input, yoneda_lemma::sample_input());
}

#[test]
fn logging_does_not_touch_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_yoneda-lemma"))
        .env("RUST_LOG", "trace")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3\n3\n0 1 2\n");
    assert!(!output.stderr.is_empty());
}
