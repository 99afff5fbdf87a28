use super::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_order_command() {
    let cli = Cli::try_parse_from(["modplan", "order", "deps.toml"]).unwrap();
    match cli.command {
        Some(Commands::Order { manifest }) => {
            assert_eq!(manifest, PathBuf::from("deps.toml"));
        }
        other => panic!("expected Order, got {other:?}"),
    }
}

#[test]
fn test_manifest_path_defaults() {
    let cli = Cli::try_parse_from(["modplan", "check"]).unwrap();
    match cli.command {
        Some(Commands::Check { manifest }) => {
            assert_eq!(manifest, PathBuf::from("modplan.toml"));
        }
        other => panic!("expected Check, got {other:?}"),
    }
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "modplan",
        "--log-level",
        "3",
        "--log-format",
        "json",
        "--color",
        "never",
        "order",
    ])
    .unwrap();

    assert_eq!(cli.config.log_level, 3);
    assert_eq!(cli.config.log_format, crate::primitives::LogFormat::Json);
    assert_eq!(cli.config.color, crate::primitives::ColorMode::Never);
}

#[test]
fn test_no_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["modplan"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["modplan", "deploy"]).is_err());
}

#[test]
fn test_reads_manifest_predicate() {
    let order = Commands::Order {
        manifest: PathBuf::from("m.toml"),
    };
    let show = Commands::Show {
        manifest: PathBuf::from("m.toml"),
    };
    assert!(order.reads_manifest());
    assert!(show.reads_manifest());
    assert!(!Commands::Version.reads_manifest());
}

#[test]
fn test_default_cli() {
    let cli = Cli::default();
    assert!(cli.command.is_none());
    assert_eq!(cli.config.log_level, 0);
}
