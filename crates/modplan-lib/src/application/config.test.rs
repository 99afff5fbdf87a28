use super::*;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorMode::Auto);
}

#[test]
fn test_to_logger_config_maps_verbosity() {
    let mut config = AppConfig::default();
    config.log_level = 3;

    let logger_config = config.to_logger_config(ColorMode::Never);
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert_eq!(logger_config.format, LogFormat::Text);
    assert_eq!(logger_config.output, LogOutput::Stderr);
    assert_eq!(logger_config.color, ColorMode::Never);
}

#[test]
fn test_to_logger_config_takes_resolved_color() {
    // The environment-resolved mode wins over the raw CLI value
    let config = AppConfig::default();
    let logger_config = config.to_logger_config(ColorMode::Always);
    assert_eq!(logger_config.color, ColorMode::Always);
}
