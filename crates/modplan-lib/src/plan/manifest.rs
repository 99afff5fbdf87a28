//! Manifest loading: the declarative module description for one project
//!
//! A manifest is a TOML file pairing a `[project]` section with an ordered
//! `[[module]]` array. The array order is the registration order, which
//! keeps build-order output deterministic across runs.
//!
//! ```toml
//! [project]
//! name = "shop"
//! default-kind = "library"
//!
//! [[module]]
//! name = "test-utils"
//!
//! [[module]]
//! name = "backend"
//! kind = "application"
//! dependencies = ["test-utils"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::plan::graph::{GraphError, ModuleGraph, ModuleNode};
use crate::primitives::{ArtifactKind, ProjectConfig};

/// Errors that can occur while loading or resolving a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ManifestError {
    /// Process exit code for the CLI contract
    pub fn exit_code(&self) -> u8 {
        match self {
            ManifestError::Graph(err) => err.exit_code(),
            _ => 1,
        }
    }
}

/// A parsed module manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Project-wide settings applying to all modules
    #[serde(default)]
    pub project: ProjectSection,

    /// Module declarations, in file order
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleDecl>,
}

/// The `[project]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    /// Project display name
    #[serde(default)]
    pub name: Option<String>,

    /// Artifact kind for modules that do not declare one
    #[serde(default, rename = "default-kind")]
    pub default_kind: Option<ArtifactKind>,
}

/// One `[[module]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDecl {
    /// Unique module name
    pub name: String,

    /// Artifact kind; falls back to the project default
    #[serde(default)]
    pub kind: Option<ArtifactKind>,

    /// Names of modules this one depends on
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading manifest: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Build a module graph from the declarations, in file order
    ///
    /// Registration errors (duplicate or empty names) surface here; dangling
    /// dependency names and cycles are caught by the graph's own validation.
    pub fn resolve(&self) -> Result<ModuleGraph, ManifestError> {
        let defaults = ProjectConfig::default();
        let config = ProjectConfig {
            name: self.project.name.clone().unwrap_or(defaults.name),
            default_kind: self.project.default_kind.unwrap_or(defaults.default_kind),
        };

        let mut graph = ModuleGraph::new(config);
        for decl in &self.modules {
            let kind = decl.kind.unwrap_or(graph.config().default_kind);
            let module = ModuleNode::new(decl.name.clone(), kind)
                .with_dependencies(decl.dependencies.clone());
            graph.register(module)?;
        }

        debug!(modules = graph.node_count(), "Manifest resolved");
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    include!("manifest.test.rs");
}
