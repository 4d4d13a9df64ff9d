//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Config file fixtures

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Candidate config paths are relative, so each test gets its own
/// temporary directory as the process working directory. The command
/// environment is cleared for hermeticity; tests add the variables they
/// need explicitly.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self { temp_dir, temp_path }
    }

    /// Get a command builder running inside the test directory with a
    /// clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("trojan").expect("Failed to find trojan binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_clear();
        cmd
    }

    /// Write a config file into the test directory and return its path.
    pub fn write_config(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(filename);
        std::fs::write(&path, content).expect("Failed to write config fixture");
        path
    }
}
