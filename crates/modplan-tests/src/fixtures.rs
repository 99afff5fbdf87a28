//! Manifest fixtures for end-to-end CLI tests
//!
//! Each fixture owns a temp directory holding a written manifest, so tests
//! exercise the real read-parse-resolve path.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A manifest written into its own temp directory
pub struct ManifestFixture {
    // Held for its Drop; the directory lives as long as the fixture
    _dir: TempDir,
    path: PathBuf,
}

impl ManifestFixture {
    /// Write the given manifest content to a fresh temp directory
    pub fn new(content: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("modplan.toml");
        fs::write(&path, content)?;
        Ok(Self { _dir: dir, path })
    }

    /// Path to the written manifest file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Three-layer acyclic project: core <- api <- cli
pub fn layered_manifest() -> &'static str {
    r#"
[project]
name = "layered"

[[module]]
name = "core"

[[module]]
name = "api"
dependencies = ["core"]

[[module]]
name = "cli"
kind = "application"
dependencies = ["api", "core"]
"#
}

/// Two modules locked in a dependency cycle
pub fn cyclic_manifest() -> &'static str {
    r#"
[[module]]
name = "a"
dependencies = ["b"]

[[module]]
name = "b"
dependencies = ["a"]
"#
}

/// A module depending on a name that is never declared
pub fn unknown_dep_manifest() -> &'static str {
    r#"
[[module]]
name = "app"
dependencies = ["phantom"]
"#
}
