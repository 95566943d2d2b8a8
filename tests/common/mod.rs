#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Temporary source tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp directory"),
        }
    }

    /// Creates a file under the fixture root, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        fs::write(&path, content).expect("failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A small Go file with one comment line and one inline comment.
    pub fn create_go_sample(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "package main\n// top comment\nfunc main() { x := 1 // inline }\n",
        );
    }
}
