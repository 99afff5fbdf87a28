//! # modplan Library
//!
//! Multi-module build-order planning library.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`logger`] - Structured logging setup
//! - [`display`] - Terminal-aware status output
//! - [`plan`] - Module graph resolution and manifest loading
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! // Initialize and run modplan
//! modplan_lib::main().unwrap();
//! ```

pub mod application;
pub mod display;
pub mod logger;
pub mod plan;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CliConfig, Commands, execute_command, exit_code_for};
pub use logger::Logger;
pub use plan::{GraphError, Manifest, ManifestError, ModuleGraph, ModuleNode};
pub use primitives::{
    ArtifactKind, ColorMode, ConfigError, GraphState, LogFormat, LogLevel, LogOutput,
    LoggerError, ProjectConfig,
};

// Private imports for the main function
use anyhow::Result;
use application::EnvironmentConfig;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Apply environment color conventions (NO_COLOR, CLICOLOR, CI)
    let environment = EnvironmentConfig::load()?;
    let color = environment.apply_color_config(config.app_config.color);

    // Initialize logger before any command work
    Logger::init(config.app_config.to_logger_config(color))?;

    // Execute the command
    execute_command(config, color)
}
