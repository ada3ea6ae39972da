//! End-to-end tests for the app-smoke binary.

use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_app-smoke");

fn run_in(dir: &Path) -> Output {
    Command::new(BIN)
        .current_dir(dir)
        .env_remove("APP_CONFIG")
        .env_remove("APP__SERVER__HOST")
        .env_remove("APP__SERVER__PORT")
        .env_remove("APP_SMOKE_LOG")
        .output()
        .expect("failed to spawn app-smoke")
}

#[test]
fn test_clean_checkout_passes() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Running tests...\n\
         ✓ Test passed: Basic test\n\
         ✓ Test passed: Math works\n\
         ✓ Test passed: Server module loads\n\
         \n✓ All tests passed!\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_valid_config_passes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "server:\n  host: 127.0.0.1\n  port: 8080\n",
    )
    .unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_broken_server_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "server: [unterminated").unwrap();

    let output = run_in(dir.path());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("✓ Test passed: Math works"));
    assert!(!stdout.contains("Server module loads"));
    assert!(!stdout.contains("All tests passed"));
    assert!(stderr.starts_with("\n✗ Test failed: Module 'server' failed to initialize:"));
    assert_eq!(stderr.matches("Test failed").count(), 1);
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(BIN)
        .current_dir(dir.path())
        .env("APP_CONFIG", dir.path().join("nowhere.yaml"))
        .env_remove("APP_SMOKE_LOG")
        .output()
        .expect("failed to spawn app-smoke");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("✗ Test failed: Module 'server' failed to initialize"));
}
