use super::*;
use crate::application::AppConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("modplan.toml");
    fs::write(&path, content).unwrap();
    path
}

fn cli_config(command: Commands) -> CliConfig {
    CliConfig {
        app_config: AppConfig::default(),
        command: Some(command),
    }
}

fn run(command: Commands) -> Result<()> {
    execute_command(cli_config(command), ColorMode::Never)
}

const LAYERED: &str = r#"
[project]
name = "layered"

[[module]]
name = "core"

[[module]]
name = "app"
kind = "application"
dependencies = ["core"]
"#;

const CYCLIC: &str = r#"
[[module]]
name = "a"
dependencies = ["b"]

[[module]]
name = "b"
dependencies = ["a"]
"#;

// ============================================================================
// Command execution
// ============================================================================

#[test]
fn test_order_command_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(&temp_dir, LAYERED);

    run(Commands::Order { manifest }).unwrap();
}

#[test]
fn test_check_command_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(&temp_dir, LAYERED);

    run(Commands::Check { manifest }).unwrap();
}

#[test]
fn test_show_command_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(&temp_dir, LAYERED);

    run(Commands::Show { manifest }).unwrap();
}

#[test]
fn test_version_command_succeeds() {
    run(Commands::Version).unwrap();
}

#[test]
fn test_no_command_prints_banner() {
    let config = CliConfig {
        app_config: AppConfig::default(),
        command: None,
    };
    execute_command(config, ColorMode::Never).unwrap();
}

#[test]
fn test_order_command_cycle_fails() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(&temp_dir, CYCLIC);

    let err = run(Commands::Order { manifest }).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GraphError>(),
        Some(GraphError::CyclicDependency { .. })
    ));
}

#[test]
fn test_check_command_missing_manifest_fails() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("absent.toml");

    let err = run(Commands::Check { manifest }).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ManifestError>(),
        Some(ManifestError::Io { .. })
    ));
}

// ============================================================================
// Exit-code mapping
// ============================================================================

#[test]
fn test_exit_code_for_cycle() {
    let err = anyhow::Error::new(GraphError::CyclicDependency {
        cycle: vec!["a".to_string(), "b".to_string(), "a".to_string()],
    });
    assert_eq!(exit_code_for(&err), 2);
}

#[test]
fn test_exit_code_for_unknown_dependency() {
    let err = anyhow::Error::new(GraphError::UnknownDependency {
        dependency: "gone".to_string(),
        declared_by: "app".to_string(),
    });
    assert_eq!(exit_code_for(&err), 1);
}

#[test]
fn test_exit_code_for_manifest_cycle_delegates() {
    let err = anyhow::Error::new(ManifestError::Graph(GraphError::CyclicDependency {
        cycle: vec!["a".to_string(), "a".to_string()],
    }));
    assert_eq!(exit_code_for(&err), 2);
}

#[test]
fn test_exit_code_for_other_errors() {
    let err = anyhow::anyhow!("something unrelated");
    assert_eq!(exit_code_for(&err), 1);
}

#[test]
fn test_end_to_end_cycle_maps_to_exit_code_two() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = write_manifest(&temp_dir, CYCLIC);

    let err = run(Commands::Order { manifest }).unwrap_err();
    assert_eq!(exit_code_for(&err), 2);
}
