//! Terminal status output
//!
//! Semantic, color-aware user-facing messages, kept separate from logging:
//! diagnostics go through `tracing`, user feedback goes through here, and
//! machine-readable output (the build order itself) stays bare on stdout.

use console::Style;

use crate::primitives::ColorMode;

/// Style manager with a semantic color scheme
pub struct StyleManager {
    enabled: bool,
}

impl StyleManager {
    pub fn new(color: ColorMode) -> Self {
        let enabled = match color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => console::colors_enabled(),
        };
        Self { enabled }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().green().bold(), "✓"), message)
    }

    /// Format error message with symbol and styling
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().red().bold(), "✗"), message)
    }

    /// Format warning message with symbol and styling
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().yellow().bold(), "!"), message)
    }

    /// Format info message with symbol and styling
    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.paint(Style::new().cyan(), "·"), message)
    }

    /// Style text with emphasis (bold)
    pub fn style_emphasis(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    /// Style text as subtle/muted
    pub fn style_subtle(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }
}

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Display a success status with optional details
    ///
    /// Output: `✓ backend: 3 modules`
    pub fn success(&self, item: &str, details: &str) {
        let message = if details.is_empty() {
            item.to_string()
        } else {
            format!("{}: {}", item, details)
        };
        println!("{}", self.styling.format_success(&message));
    }

    /// Display an error status with details
    pub fn error(&self, item: &str, details: &str) {
        let message = if details.is_empty() {
            item.to_string()
        } else {
            format!("{}: {}", item, details)
        };
        println!("{}", self.styling.format_error(&message));
    }

    /// Display a warning status
    pub fn warning(&self, message: &str) {
        println!("{}", self.styling.format_warning(message));
    }

    /// Display an info status
    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    /// Display a simple message without status symbols
    pub fn message(&self, text: &str) {
        println!("{}", text);
    }

    /// Display an emphasized message
    pub fn emphasis(&self, text: &str) {
        println!("{}", self.styling.style_emphasis(text));
    }

    /// Display a subtle/muted message
    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
