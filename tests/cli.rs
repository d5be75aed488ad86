//! End-to-end tests running the `pigeonhole` binary

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(args: &[&str]) -> Output {
    let generator = PathBuf::from(env!("CARGO_BIN_EXE_pigeonhole"));

    Command::new(generator)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run pigeonhole")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_valid_invocation() {
    let output = run(&["3"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(text.starts_with("c pigeon-3: placing 4 pigeons into 3 holes\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("p ")).count(), 1);
    assert!(text.contains("\np cnf 12 22\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_single_hole_clauses() {
    let output = run(&["--no-comments", "1"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "p cnf 2 3\n-1 -2 0\n1 0\n2 0\n");
}

#[test]
fn test_invalid_arguments_print_usage() {
    for args in [&["0"][..], &["-5"], &["abc"], &[], &["2", "3"]] {
        let output = run(args);
        let text = stdout(&output);

        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(text.starts_with("Usage:"), "args {:?}", args);
        assert!(!text.lines().any(|l| l.starts_with("p cnf")), "args {:?}", args);
    }
}

#[test]
fn test_oversized_hole_count_prints_usage() {
    let output = run(&["4000000"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage:"));
}

#[test]
fn test_oversized_hole_count_wins_over_bad_output_path() {
    let output = run(&["-o", "/nonexistent/x.cnf", "4000000"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage:"));
    assert!(!PathBuf::from("/nonexistent/x.cnf").exists());
}

#[test]
fn test_bad_output_path_with_valid_holes_fails_without_usage() {
    let output = run(&["-o", "/nonexistent/x.cnf", "3"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Output directory does not exist"));
}

#[test]
fn test_help_exits_successfully() {
    let output = run(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--output"));
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("php_3_2.cnf");

    let output = run(&["--output", path.to_str().unwrap(), "2"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("p cnf 6 9\n"));
    assert!(written.ends_with("5 6 0\n"));
}

#[test]
fn test_invalid_argument_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.cnf");

    let output = run(&["-o", path.to_str().unwrap(), "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("pigeonhole.yaml");
    std::fs::write(&config, "output:\n  comments: false\n").unwrap();

    let output = run(&["--config", config.to_str().unwrap(), "1"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("p cnf 2 3\n"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("missing.yaml");

    let output = run(&["--config", config.to_str().unwrap(), "1"]);

    assert_ne!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let output = run(&["-v", "--no-comments", "1"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "p cnf 2 3\n-1 -2 0\n1 0\n2 0\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("PHP(2, 1)"));
}
