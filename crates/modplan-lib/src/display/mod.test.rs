use super::*;

#[test]
fn test_disabled_styling_is_plain() {
    let styling = StyleManager::new(ColorMode::Never);
    assert_eq!(styling.format_success("done"), "✓ done");
    assert_eq!(styling.format_error("broken"), "✗ broken");
    assert_eq!(styling.format_warning("careful"), "! careful");
    assert_eq!(styling.format_info("note"), "· note");
    assert_eq!(styling.style_emphasis("title"), "title");
    assert_eq!(styling.style_subtle("aside"), "aside");
}

#[test]
fn test_forced_styling_emits_ansi() {
    let styling = StyleManager::new(ColorMode::Always);
    assert!(styling.format_success("done").contains("\u{1b}["));
    assert!(styling.style_emphasis("title").contains("\u{1b}["));
}

#[test]
fn test_status_display_smoke() {
    // Writes to stdout only; asserts the calls hold together
    let styling = StyleManager::new(ColorMode::Never);
    let status = StatusDisplay::new(&styling);
    status.success("check", "ok");
    status.success("bare", "");
    status.error("check", "failed");
    status.warning("heads up");
    status.info("for the record");
    status.message("plain");
    status.emphasis("strong");
    status.subtle("aside");
}
