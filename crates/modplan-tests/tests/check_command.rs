//! E2E tests for the check command

use anyhow::Result;
use assert_cmd::Command;
use modplan_tests::{ManifestFixture, cyclic_manifest, layered_manifest};
use predicates::prelude::*;

fn modplan() -> Command {
    Command::cargo_bin("modplan").expect("modplan binary should be built")
}

#[test]
fn check_reports_module_and_edge_counts() -> Result<()> {
    let fixture = ManifestFixture::new(layered_manifest())?;

    modplan()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("layered"))
        .stdout(predicate::str::contains("3 modules"))
        .stdout(predicate::str::contains("no cycles"));

    Ok(())
}

#[test]
fn check_cycle_exits_with_code_two() -> Result<()> {
    let fixture = ManifestFixture::new(cyclic_manifest())?;

    modplan()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Circular dependency"));

    Ok(())
}

#[test]
fn check_duplicate_module_exits_with_code_one() -> Result<()> {
    let fixture = ManifestFixture::new(
        r#"
[[module]]
name = "core"

[[module]]
name = "core"
"#,
    )?;

    modplan()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duplicate module"));

    Ok(())
}

#[test]
fn check_self_dependency_exits_with_code_two() -> Result<()> {
    let fixture = ManifestFixture::new(
        r#"
[[module]]
name = "solo"
dependencies = ["solo"]
"#,
    )?;

    modplan()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("solo -> solo"));

    Ok(())
}

#[test]
fn check_empty_manifest_warns_but_succeeds() -> Result<()> {
    let fixture = ManifestFixture::new("")?;

    modplan()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("declares no modules"));

    Ok(())
}

#[test]
fn check_invalid_toml_exits_with_code_one() -> Result<()> {
    let fixture = ManifestFixture::new("[[module]\nname = broken")?;

    modplan()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse manifest"));

    Ok(())
}
