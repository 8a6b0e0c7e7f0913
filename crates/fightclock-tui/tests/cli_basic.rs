//! Basic CLI E2E tests.
//!
//! Tests invoke the binary via cargo run and verify the non-interactive
//! surfaces; the TUI itself never starts here.

use std::process::Command;

/// Run the binary and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "fightclock-tui", "--"])
        .args(args)
        .output()
        .expect("Failed to execute fightclock");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_list_prints_the_script() {
    let (stdout, _, code) = run_cli(&["--list"]);
    assert_eq!(code, 0, "--list failed");
    assert!(stdout.contains("Reporter presents"));
    assert!(stdout.contains("Opponent leads discussion with reporter"));
    assert!(stdout.contains("(5 min window)"));
    assert!(stdout.contains("total 52 minutes"));
}

#[test]
fn test_from_zero_is_rejected() {
    let (_, stderr, code) = run_cli(&["--from", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: --from must be between 1 and 10"));
}

#[test]
fn test_from_past_the_end_is_rejected() {
    let (_, stderr, code) = run_cli(&["--from", "11"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--from must be between 1 and 10"));
}

#[test]
fn test_help_names_the_flags() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "--help failed");
    assert!(stdout.contains("--from"));
    assert!(stdout.contains("--mute"));
    assert!(stdout.contains("--list"));
}
