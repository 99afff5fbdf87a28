use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;
use crate::primitives::ConfigError;

/// modplan CLI - multi-module build planning
#[derive(Debug, Clone, Parser)]
#[command(name = "modplan")]
#[command(about = "A build-order planner for multi-module projects")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// modplan commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Ok(Self {
            app_config: cli.config,
            command: cli.command,
        })
    }
}

/// Available modplan commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the build order, one module per line
    Order {
        /// Module manifest to plan from
        #[arg(
            value_name = "MANIFEST",
            default_value = "modplan.toml",
            help = "Path to the module manifest"
        )]
        manifest: PathBuf,
    },

    /// Validate the manifest without producing an order
    Check {
        /// Module manifest to validate
        #[arg(
            value_name = "MANIFEST",
            default_value = "modplan.toml",
            help = "Path to the module manifest"
        )]
        manifest: PathBuf,
    },

    /// List declared modules with their kinds and dependencies
    Show {
        /// Module manifest to list
        #[arg(
            value_name = "MANIFEST",
            default_value = "modplan.toml",
            help = "Path to the module manifest"
        )]
        manifest: PathBuf,
    },

    /// Show version information
    Version,
}

impl Commands {
    /// Check if the command reads a manifest from disk
    pub fn reads_manifest(&self) -> bool {
        match self {
            Commands::Order { .. } => true,
            Commands::Check { .. } => true,
            Commands::Show { .. } => true,
            Commands::Version => false,
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
