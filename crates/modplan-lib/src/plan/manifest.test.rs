// Tests for manifest loading and resolution

use super::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Write a manifest file into the directory
fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("modplan.toml");
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_load_minimal_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        r#"
[[module]]
name = "core"
"#,
    );

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.modules.len(), 1);
    assert_eq!(manifest.modules[0].name, "core");
    assert!(manifest.modules[0].kind.is_none());
    assert!(manifest.modules[0].dependencies.is_empty());
    assert!(manifest.project.name.is_none());
}

#[test]
fn test_load_full_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        r#"
[project]
name = "shop"
default-kind = "library"

[[module]]
name = "test-utils"

[[module]]
name = "backend"
kind = "application"
dependencies = ["test-utils"]
"#,
    );

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.project.name.as_deref(), Some("shop"));
    assert_eq!(
        manifest.project.default_kind,
        Some(ArtifactKind::Library)
    );
    assert_eq!(manifest.modules.len(), 2);
    assert_eq!(manifest.modules[1].kind, Some(ArtifactKind::Application));
    assert_eq!(
        manifest.modules[1].dependencies,
        vec!["test-utils".to_string()]
    );
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = Manifest::load(&temp_dir.path().join("absent.toml"));
    assert!(matches!(result.unwrap_err(), ManifestError::Io { .. }));
}

#[test]
fn test_load_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "[[module]\nname = broken");

    let result = Manifest::load(&path);
    assert!(matches!(result.unwrap_err(), ManifestError::Parse { .. }));
}

#[test]
fn test_load_rejects_bad_kind() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        r#"
[[module]]
name = "core"
kind = "jar"
"#,
    );

    assert!(matches!(
        Manifest::load(&path).unwrap_err(),
        ManifestError::Parse { .. }
    ));
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_registers_in_file_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        r#"
[[module]]
name = "gamma"

[[module]]
name = "alpha"

[[module]]
name = "beta"
"#,
    );

    let mut graph = Manifest::load(&path).unwrap().resolve().unwrap();
    let order = graph.build_order().unwrap();
    assert_eq!(
        order,
        vec!["gamma".to_string(), "alpha".to_string(), "beta".to_string()]
    );
}

#[test]
fn test_resolve_applies_default_kind() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        r#"
[project]
default-kind = "application"

[[module]]
name = "runner"

[[module]]
name = "core"
kind = "library"
"#,
    );

    let graph = Manifest::load(&path).unwrap().resolve().unwrap();
    assert_eq!(graph.get("runner").unwrap().kind, ArtifactKind::Application);
    assert_eq!(graph.get("core").unwrap().kind, ArtifactKind::Library);
}

#[test]
fn test_resolve_duplicate_module() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        r#"
[[module]]
name = "core"

[[module]]
name = "core"
"#,
    );

    let result = Manifest::load(&path).unwrap().resolve();
    assert!(matches!(
        result.unwrap_err(),
        ManifestError::Graph(GraphError::DuplicateModule { .. })
    ));
}

#[test]
fn test_resolve_empty_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "");

    let mut graph = Manifest::load(&path).unwrap().resolve().unwrap();
    assert_eq!(graph.node_count(), 0);
    assert!(graph.build_order().unwrap().is_empty());
}

#[test]
fn test_resolve_then_validate_full_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
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
"#,
    );

    let mut graph = Manifest::load(&path).unwrap().resolve().unwrap();
    assert_eq!(graph.config().name, "layered");

    let order = graph.build_order().unwrap();
    assert_eq!(
        order,
        vec!["core".to_string(), "api".to_string(), "cli".to_string()]
    );
}

#[test]
fn test_exit_codes_delegate_to_graph() {
    let cycle = ManifestError::Graph(GraphError::CyclicDependency {
        cycle: vec!["a".to_string(), "a".to_string()],
    });
    assert_eq!(cycle.exit_code(), 2);

    let unknown = ManifestError::Graph(GraphError::UnknownDependency {
        dependency: "x".to_string(),
        declared_by: "y".to_string(),
    });
    assert_eq!(unknown.exit_code(), 1);

    let io = Manifest::load(Path::new("/nonexistent/modplan.toml")).unwrap_err();
    assert_eq!(io.exit_code(), 1);
}
