//! Test assertion helpers.

use gitlab_vault::core::domain::Secret;
use gitlab_vault::error::FetchError;
use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert a lookup resolved to `expected`.
pub fn assert_secret(result: Result<Secret, FetchError>, expected: &str) {
    match result {
        Ok(secret) => assert_eq!(secret.expose(), expected),
        Err(e) => panic!("lookup failed: {}", e),
    }
}

/// Assert a lookup failed with `NotFound` and return its detail.
pub fn assert_not_found(result: Result<Secret, FetchError>) -> String {
    match result {
        Err(FetchError::NotFound { detail, .. }) => detail,
        Err(e) => panic!("expected NotFound, got: {}", e),
        Ok(secret) => panic!("expected NotFound, got secret for '{}'", secret.key()),
    }
}

/// Assert a lookup failed at the transport level.
pub fn assert_transport(result: Result<Secret, FetchError>) {
    match result {
        Err(FetchError::Transport { .. }) => {}
        Err(e) => panic!("expected Transport error, got: {}", e),
        Ok(secret) => panic!("expected Transport error, got secret for '{}'", secret.key()),
    }
}

/// Assert a lookup failed to parse the response.
pub fn assert_parse(result: Result<Secret, FetchError>) {
    match result {
        Err(FetchError::Parse { .. }) => {}
        Err(e) => panic!("expected Parse error, got: {}", e),
        Ok(secret) => panic!("expected Parse error, got secret for '{}'", secret.key()),
    }
}
