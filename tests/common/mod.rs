//! Common test utilities for hdrscan integration tests
//!
//! `ScratchTree` builds a throwaway header tree in a temp directory and
//! runs the compiled binary against it with the working directory set to
//! the tree root, so tests can use the same relative paths a user would.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct ScratchTree {
    dir: TempDir,
}

impl ScratchTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content, creating parent directories.
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Create an empty subdirectory.
    pub fn add_dir(&self, relative_path: &str) -> &Self {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("Failed to create dir");
        self
    }

    /// Run hdrscan with the tree root as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        let binary = PathBuf::from(env!("CARGO_BIN_EXE_hdrscan"));
        Command::new(&binary)
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to run hdrscan")
    }

    /// Run and expect exit 0, returning stdout.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "hdrscan {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run and expect the given nonzero exit code, returning stderr.
    pub fn run_failure(&self, args: &[&str], expected_code: i32) -> String {
        let output = self.run(args);
        assert_eq!(
            output.status.code(),
            Some(expected_code),
            "hdrscan {:?} exit code mismatch; stderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for ScratchTree {
    fn default() -> Self {
        Self::new()
    }
}
