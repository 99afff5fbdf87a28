use serde::{Deserialize, Serialize};
use std::fmt;

/// Artifact produced by building a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Linkable library consumed by other modules
    Library,
    /// Runnable application entry point
    Application,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Library => write!(f, "library"),
            ArtifactKind::Application => write!(f, "application"),
        }
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "library" | "lib" => Ok(ArtifactKind::Library),
            "application" | "app" => Ok(ArtifactKind::Application),
            _ => Err(format!("Invalid artifact kind: {}", s)),
        }
    }
}

/// Lifecycle states for a module graph
///
/// Registration after a successful validation drops the graph back to
/// `Populated`: any previously computed order no longer covers the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphState {
    /// No modules registered
    Empty,
    /// Modules registered, declarations not yet checked
    Populated,
    /// References checked and acyclicity proven
    Validated,
    /// A build order has been produced
    Ordered,
}

impl fmt::Display for GraphState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphState::Empty => write!(f, "empty"),
            GraphState::Populated => write!(f, "populated"),
            GraphState::Validated => write!(f, "validated"),
            GraphState::Ordered => write!(f, "ordered"),
        }
    }
}

/// Per-project configuration shared by every module registration
///
/// Passed explicitly into the graph constructor so configuration provenance
/// stays traceable; nothing here is ambient or global.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectConfig {
    /// Project display name
    pub name: String,
    /// Artifact kind assumed for modules that do not declare one
    pub default_kind: ArtifactKind,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            default_kind: ArtifactKind::Library,
        }
    }
}
