use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    // Anything beyond trace clamps
    assert_eq!(LogLevel::from_verbosity(99), LogLevel::Trace);
}

#[test]
fn test_color_mode_parsing() {
    assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
    assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
    assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
    assert!("rainbow".parse::<ColorMode>().is_err());
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn test_log_output_parsing() {
    assert_eq!("stderr".parse::<LogOutput>().unwrap(), LogOutput::Stderr);
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
    assert!("file".parse::<LogOutput>().is_err());
}

#[test]
fn test_color_mode_forced_ansi() {
    assert!(ColorMode::Always.enables_ansi(LogOutput::Stderr));
    assert!(ColorMode::Always.enables_ansi(LogOutput::Stdout));
    assert!(!ColorMode::Never.enables_ansi(LogOutput::Stderr));
    assert!(!ColorMode::Never.enables_ansi(LogOutput::Stdout));
}

#[test]
fn test_artifact_kind_parsing() {
    assert_eq!(
        "library".parse::<ArtifactKind>().unwrap(),
        ArtifactKind::Library
    );
    assert_eq!("lib".parse::<ArtifactKind>().unwrap(), ArtifactKind::Library);
    assert_eq!(
        "application".parse::<ArtifactKind>().unwrap(),
        ArtifactKind::Application
    );
    assert_eq!(
        "APP".parse::<ArtifactKind>().unwrap(),
        ArtifactKind::Application
    );
    assert!("jar".parse::<ArtifactKind>().is_err());
}

#[test]
fn test_artifact_kind_display_round_trip() {
    for kind in [ArtifactKind::Library, ArtifactKind::Application] {
        assert_eq!(kind.to_string().parse::<ArtifactKind>().unwrap(), kind);
    }
}

#[test]
fn test_project_config_defaults() {
    let config = ProjectConfig::default();
    assert_eq!(config.name, "unnamed");
    assert_eq!(config.default_kind, ArtifactKind::Library);
}
