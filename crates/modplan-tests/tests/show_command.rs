//! E2E tests for the show command

use anyhow::Result;
use assert_cmd::Command;
use modplan_tests::{ManifestFixture, layered_manifest};
use predicates::prelude::*;

fn modplan() -> Command {
    Command::cargo_bin("modplan").expect("modplan binary should be built")
}

#[test]
fn show_lists_modules_with_kinds() -> Result<()> {
    let fixture = ManifestFixture::new(layered_manifest())?;

    modplan()
        .arg("show")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("layered (3 modules)"))
        .stdout(predicate::str::contains("core"))
        .stdout(predicate::str::contains("application"))
        .stdout(predicate::str::contains("api, core"));

    Ok(())
}

#[test]
fn show_marks_leaf_modules() -> Result<()> {
    let fixture = ManifestFixture::new(
        r#"
[[module]]
name = "standalone"
"#,
    )?;

    modplan()
        .arg("show")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("standalone"))
        .stdout(predicate::str::contains("-"));

    Ok(())
}

#[test]
fn version_prints_package_version() {
    modplan()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modplan"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
