//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with a temporary directory
//! - Fixture-file creation
//! - Command builder helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment backed by a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the bytedump binary.
    pub fn command(&self) -> Command {
        Command::cargo_bin("bytedump").expect("Failed to find bytedump binary")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a fixture file with the given raw contents, returning its path.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }
}
