//! E2E tests for the library surface
//!
//! Exercises the load -> resolve -> order pipeline through `modplan-lib`
//! directly, the way an embedding build tool would.

use anyhow::Result;
use modplan_lib::{GraphError, GraphState, Manifest, ManifestError};
use modplan_tests::{ManifestFixture, cyclic_manifest, layered_manifest, unknown_dep_manifest};

#[test]
fn library_pipeline_produces_build_order() -> Result<()> {
    let fixture = ManifestFixture::new(layered_manifest())?;

    let mut graph = Manifest::load(fixture.path())?.resolve()?;
    assert_eq!(graph.state(), GraphState::Populated);

    graph.validate()?;
    assert_eq!(graph.state(), GraphState::Validated);

    let order = graph.build_order()?;
    assert_eq!(order, vec!["core", "api", "cli"]);
    assert_eq!(graph.state(), GraphState::Ordered);

    Ok(())
}

#[test]
fn library_pipeline_reports_cycle_path() -> Result<()> {
    let fixture = ManifestFixture::new(cyclic_manifest())?;

    let mut graph = Manifest::load(fixture.path())?.resolve()?;
    match graph.validate() {
        Err(GraphError::CyclicDependency { cycle }) => {
            assert_eq!(cycle, vec!["a", "b", "a"]);
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }

    Ok(())
}

#[test]
fn library_pipeline_reports_unknown_dependency() -> Result<()> {
    let fixture = ManifestFixture::new(unknown_dep_manifest())?;

    let mut graph = Manifest::load(fixture.path())?.resolve()?;
    match graph.validate() {
        Err(GraphError::UnknownDependency {
            dependency,
            declared_by,
        }) => {
            assert_eq!(dependency, "phantom");
            assert_eq!(declared_by, "app");
        }
        other => panic!("expected UnknownDependency, got {other:?}"),
    }

    Ok(())
}

#[test]
fn library_load_error_carries_the_path() {
    let err = Manifest::load(std::path::Path::new("/nonexistent/modplan.toml")).unwrap_err();
    match err {
        ManifestError::Io { path, .. } => {
            assert!(path.ends_with("modplan.toml"));
        }
        other => panic!("expected Io, got {other:?}"),
    }
}
