//! Build-planning domain: module graph resolution and manifest loading

pub mod graph;
pub mod manifest;

// Re-export main types for convenience
pub use graph::{GraphError, ModuleGraph, ModuleNode};
pub use manifest::{Manifest, ManifestError, ModuleDecl, ProjectSection};

// Re-export primitives types for convenience
pub use crate::primitives::{ArtifactKind, GraphState, ProjectConfig};
