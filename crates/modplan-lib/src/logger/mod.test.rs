use super::*;

#[test]
fn test_logger_config_carries_settings() {
    let config = LoggerConfig {
        level: LogLevel::Debug,
        format: LogFormat::Json,
        output: LogOutput::Stdout,
        color: ColorMode::Never,
    };
    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.output, LogOutput::Stdout);
    assert_eq!(config.color, ColorMode::Never);
}

#[test]
fn test_logger_init_is_exclusive() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        color: ColorMode::Never,
    };

    // First init in this process wins; every later one reports as such
    let first = Logger::init(config.clone());
    if first.is_ok() {
        assert!(Logger::is_initialized());
        assert!(Logger::global().is_some());
    }
    assert!(matches!(
        Logger::init(config).unwrap_err(),
        LoggerError::AlreadyInitialized | LoggerError::InitializationFailed { .. }
    ));
}
