use super::*;

fn env_config() -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: None,
        force_color: None,
        clicolor: None,
        ci: None,
    }
}

#[test]
fn test_clean_environment_passes_through() {
    let color = env_config().apply_color_config(ColorMode::Auto);
    assert_eq!(color, ColorMode::Auto);
}

#[test]
fn test_no_color_disables() {
    let mut env = env_config();
    env.no_color = Some("1".to_string());
    assert_eq!(env.apply_color_config(ColorMode::Auto), ColorMode::Never);
    assert_eq!(env.apply_color_config(ColorMode::Always), ColorMode::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let mut env = env_config();
    env.no_color = Some(String::new());
    assert_eq!(env.apply_color_config(ColorMode::Auto), ColorMode::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    let mut env = env_config();
    env.clicolor = Some("0".to_string());
    assert_eq!(env.apply_color_config(ColorMode::Auto), ColorMode::Never);
}

#[test]
fn test_force_color_enables() {
    let mut env = env_config();
    env.force_color = Some("1".to_string());
    assert_eq!(env.apply_color_config(ColorMode::Auto), ColorMode::Always);
}

#[test]
fn test_force_color_overrides_no_color() {
    let mut env = env_config();
    env.clicolor = Some("0".to_string());
    env.no_color = Some("1".to_string());
    env.force_color = Some("1".to_string());
    assert_eq!(env.apply_color_config(ColorMode::Auto), ColorMode::Always);
}

#[test]
fn test_invalid_force_color_values_ignored() {
    let mut env = env_config();
    env.force_color = Some("invalid".to_string());
    assert_eq!(env.apply_color_config(ColorMode::Auto), ColorMode::Auto);
}

#[test]
fn test_ci_disables_color() {
    let mut env = env_config();
    env.ci = Some("true".to_string());
    // CI short-circuits even FORCE_COLOR
    env.force_color = Some("1".to_string());
    assert_eq!(env.apply_color_config(ColorMode::Auto), ColorMode::Never);
}
