//! E2E tests for the order command
//!
//! These tests drive the compiled `modplan` binary against real manifest
//! files and assert the printed order, stderr diagnostics and exit codes.

use anyhow::Result;
use assert_cmd::Command;
use modplan_tests::{ManifestFixture, cyclic_manifest, layered_manifest, unknown_dep_manifest};
use predicates::prelude::*;

fn modplan() -> Command {
    Command::cargo_bin("modplan").expect("modplan binary should be built")
}

#[test]
fn order_prints_dependencies_first() -> Result<()> {
    let fixture = ManifestFixture::new(layered_manifest())?;

    modplan()
        .arg("order")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout("core\napi\ncli\n");

    Ok(())
}

#[test]
fn order_output_is_deterministic() -> Result<()> {
    let fixture = ManifestFixture::new(layered_manifest())?;

    let first = modplan().arg("order").arg(fixture.path()).output()?;
    let second = modplan().arg("order").arg(fixture.path()).output()?;
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn order_cycle_exits_with_code_two() -> Result<()> {
    let fixture = ManifestFixture::new(cyclic_manifest())?;

    modplan()
        .arg("order")
        .arg(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Circular dependency"))
        .stderr(predicate::str::contains("a -> b -> a"))
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn order_unknown_dependency_exits_with_code_one() -> Result<()> {
    let fixture = ManifestFixture::new(unknown_dep_manifest())?;

    modplan()
        .arg("order")
        .arg(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown dependency"))
        .stderr(predicate::str::contains("phantom"))
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn order_missing_manifest_exits_with_code_one() {
    modplan()
        .arg("order")
        .arg("/nonexistent/modplan.toml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read manifest"));
}
