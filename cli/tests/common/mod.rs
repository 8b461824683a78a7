//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;

/// Create a new command for the dsa-demo binary, with logging left at its default.
pub fn dsa_demo() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dsa-demo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run a command and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], expected: Expect) {
    let output = dsa_demo()
        .args(args)
        .output()
        .expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}

/// Run a command and check both stdout and stderr.
pub fn check_output(args: &[&str], expected_stdout: Expect, expected_stderr: Expect) {
    let output = dsa_demo()
        .args(args)
        .output()
        .expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    expected_stdout.assert_eq(&stdout);
    expected_stderr.assert_eq(&stderr);
}
