//! modplan primitives - core types, errors, and coordination
//!
//! Central collection of shared types that form the foundation of modplan.
//! Everything here works together: color mode informs logging and display,
//! config drives behavior, errors chain properly.

use clap::ValueEnum;
use std::io::IsTerminal;
use std::str::FromStr;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Build-planning domain types
pub mod plan;
pub use plan::*;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

impl_fromstr_for_value_enum!(LogOutput, "expected 'stderr' or 'stdout'");

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Map a `-v`-style verbosity count onto a level, clamping at trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable text
    Text,
    /// Line-delimited JSON
    Json,
    /// Multi-line pretty format
    Pretty,
}

impl_fromstr_for_value_enum!(LogFormat, "expected 'text', 'json' or 'pretty'");

/// Color output control for logging and status display
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Detect from the terminal
    Auto,
    /// Force ANSI styling on
    Always,
    /// Force ANSI styling off
    Never,
}

impl_fromstr_for_value_enum!(ColorMode, "expected 'auto', 'always' or 'never'");

impl ColorMode {
    /// Whether ANSI styling should be emitted on the given stream
    pub fn enables_ansi(self, output: LogOutput) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => match output {
                LogOutput::Stderr => std::io::stderr().is_terminal(),
                LogOutput::Stdout => std::io::stdout().is_terminal(),
            },
        }
    }
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration combining application config with color resolution
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub color: ColorMode,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization and operation errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
