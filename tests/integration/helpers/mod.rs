//! Helpers for driving the nbscrub binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A scratch directory doubling as `$HOME`, so no user config leaks in.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Copy a fixture into the sandbox
    pub fn fixture(&self, name: &str) -> PathBuf {
        let target = self.path().join(name);
        fs::copy(fixtures_dir().join(name), &target).expect("Failed to copy fixture");
        target
    }

    /// Write a file into the sandbox
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let target = self.path().join(name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&target, contents).expect("Failed to write file");
        target
    }

    /// The nbscrub binary with `$HOME` pointed at the sandbox
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nbscrub").expect("binary builds");
        cmd.env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
