//! Command execution handlers
//!
//! Each CLI command maps to one handler; handlers return `anyhow::Result`
//! and leave error reporting plus exit-code mapping to the binary.

use anyhow::Result;
use std::path::Path;

use crate::application::{CliConfig, Commands};
use crate::display::{StatusDisplay, StyleManager};
use crate::plan::{GraphError, Manifest, ManifestError, ModuleGraph};
use crate::primitives::ColorMode;

/// Execute CLI commands
pub fn execute_command(config: CliConfig, color: ColorMode) -> Result<()> {
    let styling = StyleManager::new(color);
    let status = StatusDisplay::new(&styling);

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            status.message("modplan - multi-module build planning");
            status.subtle("Run 'modplan --help' for usage information");
            return Ok(());
        }
    };

    match command {
        Commands::Order { manifest } => handle_order(&manifest),
        Commands::Check { manifest } => handle_check(&status, &manifest),
        Commands::Show { manifest } => handle_show(&status, &manifest),
        Commands::Version => handle_version(&status),
    }
}

/// Map a failed run onto its process exit code
///
/// Declaration and load errors exit with 1, a dependency cycle with 2.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if let Some(graph_err) = err.downcast_ref::<GraphError>() {
        graph_err.exit_code()
    } else if let Some(manifest_err) = err.downcast_ref::<ManifestError>() {
        manifest_err.exit_code()
    } else {
        1
    }
}

/// Load a manifest and resolve it into a module graph
fn load_graph(path: &Path) -> Result<ModuleGraph> {
    let manifest = Manifest::load(path)?;
    Ok(manifest.resolve()?)
}

fn handle_order(path: &Path) -> Result<()> {
    let mut graph = load_graph(path)?;
    let order = graph.build_order()?;

    // Bare stdout: one name per line, consumable by scripts
    for name in &order {
        println!("{}", name);
    }
    Ok(())
}

fn handle_check(status: &StatusDisplay, path: &Path) -> Result<()> {
    let mut graph = load_graph(path)?;
    graph.validate()?;

    if graph.node_count() == 0 {
        status.warning("manifest declares no modules");
        return Ok(());
    }

    status.success(
        &graph.config().name,
        &format!(
            "{} modules, {} dependency edges, no cycles",
            graph.node_count(),
            graph.edge_count()
        ),
    );
    Ok(())
}

fn handle_show(status: &StatusDisplay, path: &Path) -> Result<()> {
    let graph = load_graph(path)?;

    status.emphasis(&format!(
        "{} ({} modules)",
        graph.config().name,
        graph.node_count()
    ));

    for module in graph.modules() {
        let dependencies = if module.dependencies.is_empty() {
            "-".to_string()
        } else {
            module.dependencies.join(", ")
        };
        status.message(&format!(
            "  {:<24} {:<12} {}",
            module.name,
            module.kind.to_string(),
            dependencies
        ));
    }
    Ok(())
}

fn handle_version(status: &StatusDisplay) -> Result<()> {
    status.emphasis(&format!("modplan {}", env!("CARGO_PKG_VERSION")));
    status.message("A build-order planner for multi-module projects");
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
