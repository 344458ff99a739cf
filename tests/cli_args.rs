//! Tests for CLI argument parsing.
//!
//! These run the actual binary; none of the invocations reach the
//! terminal UI because parsing or config loading fails first.

use std::process::Command;

fn primetally_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_primetally"))
}

#[test]
fn test_help_lists_the_flags() {
    let output = primetally_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--initial"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--diag-level"));
    assert!(stdout.contains("Initial counter value"));
}

#[test]
fn test_version_prints_and_exits() {
    let output = primetally_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("primetally"));
}

#[test]
fn test_non_numeric_initial_is_rejected() {
    let output = primetally_cmd()
        .args(["--initial", "seven"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "Expected clap error about the value, got: {}",
        stderr
    );
}

#[test]
fn test_out_of_range_diag_level_is_rejected() {
    let output = primetally_cmd()
        .args(["--diag-level", "7"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("7") && stderr.contains("--diag-level"),
        "Expected clap range error, got: {}",
        stderr
    );
}

#[test]
fn test_missing_initial_value_shows_error() {
    let output = primetally_cmd()
        .arg("--initial")
        .output()
        .expect("Failed to execute command");

    // clap should show an error about missing value
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}

#[test]
fn test_malformed_config_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "counter = {{{").unwrap();

    let output = primetally_cmd()
        .args(["--config".as_ref(), path.as_os_str()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse config file"),
        "Expected parse error naming the file, got: {}",
        stderr
    );
}

#[test]
fn test_invalid_config_values_exit_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_ms = 0\n").unwrap();

    let output = primetally_cmd()
        .args(["--config".as_ref(), path.as_os_str()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("tick_ms"),
        "Expected validation error, got: {}",
        stderr
    );
}
