//! Module graph resolution with cycle detection and deterministic ordering
//!
//! This module turns a flat set of module declarations into a safe, ordered
//! build plan. Modules are registered one by one, validated as a whole, and
//! queried for a topological build order in which every dependency precedes
//! its dependents.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::primitives::{ArtifactKind, GraphState, ProjectConfig};

/// Errors that can occur during module graph resolution
///
/// All of these are configuration-time errors: none is retryable, and each
/// carries enough detail to fix the offending declaration.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Duplicate module: '{name}' is already registered")]
    DuplicateModule { name: String },

    #[error("Module name must not be empty")]
    EmptyModuleName,

    #[error("Unknown dependency: '{dependency}' required by '{declared_by}'")]
    UnknownDependency {
        dependency: String,
        declared_by: String,
    },

    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
}

impl GraphError {
    /// Process exit code for the CLI contract: 2 for a cycle, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        match self {
            GraphError::CyclicDependency { .. } => 2,
            _ => 1,
        }
    }
}

/// Represents a module in the build graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    /// Unique module name within the project
    pub name: String,
    /// Artifact the module builds into
    pub kind: ArtifactKind,
    /// Names of modules this one depends on, in declaration order
    pub dependencies: Vec<String>,
}

impl ModuleNode {
    /// Create a new module with no dependencies
    pub fn new(name: String, kind: ArtifactKind) -> Self {
        Self {
            name,
            kind,
            dependencies: Vec::new(),
        }
    }

    /// Set the module's declared dependencies
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// Traversal marks for the three-color depth-first search
///
/// Unvisited nodes are simply absent from the mark map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current traversal path
    InProgress,
    /// Fully explored
    Done,
}

/// Module graph for build-order resolution
///
/// Lifecycle: `Empty -> Populated` (registrations) `-> Validated`
/// (successful [`validate`](Self::validate)) `-> Ordered` (successful
/// [`build_order`](Self::build_order)). Registering after validation
/// reverts to `Populated` and invalidates any previously computed order.
///
/// Single-threaded by design: callers that need concurrent access must
/// serialize calls externally.
#[derive(Debug)]
pub struct ModuleGraph {
    /// Project-wide configuration passed in at construction
    config: ProjectConfig,
    /// Directed graph: nodes = modules, edges = dependency -> dependent
    graph: DiGraph<ModuleNode, ()>,
    /// Map from module name to node index for fast lookup
    node_map: HashMap<String, NodeIndex>,
    /// Where the graph sits in its lifecycle
    state: GraphState,
}

impl ModuleGraph {
    /// Create an empty graph for one project
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            config,
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            state: GraphState::Empty,
        }
    }

    /// Add a module to the registry
    ///
    /// No ordering is computed yet; dependency names are checked later by
    /// [`validate`](Self::validate).
    pub fn register(&mut self, module: ModuleNode) -> Result<(), GraphError> {
        if module.name.is_empty() {
            return Err(GraphError::EmptyModuleName);
        }
        if self.node_map.contains_key(&module.name) {
            return Err(GraphError::DuplicateModule { name: module.name });
        }

        trace!("Registering module: {}", module.name);
        let name = module.name.clone();
        let idx = self.graph.add_node(module);
        self.node_map.insert(name, idx);

        // Any previously proven ordering is stale once the registry grows
        self.state = GraphState::Populated;
        Ok(())
    }

    /// Check every dependency declaration and prove the graph acyclic
    ///
    /// Scans modules in registration order and dependencies in declaration
    /// order, so the first error reported is the same on every run. A
    /// self-dependency is reported as the two-element cycle `[a, a]` without
    /// requiring a traversal. Purely a check apart from the state
    /// transition; safe to call repeatedly.
    pub fn validate(&mut self) -> Result<(), GraphError> {
        for idx in self.graph.node_indices() {
            let module = &self.graph[idx];
            for dependency in &module.dependencies {
                if *dependency == module.name {
                    return Err(GraphError::CyclicDependency {
                        cycle: vec![module.name.clone(), module.name.clone()],
                    });
                }
                if !self.node_map.contains_key(dependency) {
                    return Err(GraphError::UnknownDependency {
                        dependency: dependency.clone(),
                        declared_by: module.name.clone(),
                    });
                }
            }
        }

        self.rebuild_edges();

        if let Some(cycle) = self.detect_cycle() {
            return Err(GraphError::CyclicDependency { cycle });
        }

        debug!(
            modules = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "Module graph validated"
        );
        self.state = GraphState::Validated;
        Ok(())
    }

    /// Produce the build order: every module strictly after its dependencies
    ///
    /// Runs [`validate`](Self::validate) first when the graph has not been
    /// validated since the last registration. Roots are visited in
    /// registration order and dependencies in declaration order, so ties
    /// break toward registration order and repeated calls yield identical
    /// output.
    pub fn build_order(&mut self) -> Result<Vec<String>, GraphError> {
        if !matches!(self.state, GraphState::Validated | GraphState::Ordered) {
            self.validate()?;
        }

        // Validation proved acyclicity, so traversal cannot fail here
        let order = self.traverse()?;

        debug!(modules = order.len(), "Build order computed");
        self.state = GraphState::Ordered;
        Ok(order)
    }

    /// Check if the dependency edges contain a cycle
    ///
    /// Edges are derived from declarations during [`validate`](Self::validate);
    /// before the first validation this reports on an edgeless graph.
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Detect and return the cycle path if one exists
    ///
    /// The returned sequence repeats the entry module at the end, e.g.
    /// `[a, b, c, a]`.
    pub fn detect_cycle(&self) -> Option<Vec<String>> {
        if !self.has_cycles() {
            return None;
        }

        match self.traverse() {
            Err(GraphError::CyclicDependency { cycle }) => Some(cycle),
            _ => None,
        }
    }

    /// Re-derive dependency edges from the registered declarations
    ///
    /// Dependency names that do not resolve are skipped; they are the
    /// reference scan's concern, not the edge builder's.
    fn rebuild_edges(&mut self) {
        self.graph.clear_edges();
        for idx in self.graph.node_indices() {
            let dependencies = self.graph[idx].dependencies.clone();
            for dependency in &dependencies {
                if let Some(&dep_idx) = self.node_map.get(dependency) {
                    // Edge from dependency to dependent, so orders flow
                    // from leaves to roots
                    self.graph.add_edge(dep_idx, idx, ());
                }
            }
        }
    }

    /// Full three-color DFS over the registry
    ///
    /// Returns the post-order traversal (a topological order when acyclic)
    /// or the first cycle encountered. Shared by validation and ordering.
    fn traverse(&self) -> Result<Vec<String>, GraphError> {
        let mut marks = HashMap::new();
        let mut trail = Vec::new();
        let mut order = Vec::with_capacity(self.graph.node_count());

        for idx in self.graph.node_indices() {
            if marks.contains_key(&idx) {
                continue;
            }
            if let Some(cycle) = self.visit(idx, &mut marks, &mut trail, &mut order) {
                return Err(GraphError::CyclicDependency { cycle });
            }
        }

        Ok(order)
    }

    /// DFS step: appends the module after all of its dependencies
    fn visit(
        &self,
        idx: NodeIndex,
        marks: &mut HashMap<NodeIndex, Mark>,
        trail: &mut Vec<NodeIndex>,
        order: &mut Vec<String>,
    ) -> Option<Vec<String>> {
        marks.insert(idx, Mark::InProgress);
        trail.push(idx);

        for dependency in &self.graph[idx].dependencies {
            // Unresolvable names are skipped; the reference scan reports them
            let Some(&dep_idx) = self.node_map.get(dependency) else {
                continue;
            };
            match marks.get(&dep_idx) {
                None => {
                    if let Some(cycle) = self.visit(dep_idx, marks, trail, order) {
                        return Some(cycle);
                    }
                }
                Some(Mark::InProgress) => {
                    // An in-progress node re-encountered closes a cycle;
                    // the trail tail from its first occurrence is the path
                    let start = trail.iter().position(|&n| n == dep_idx).unwrap();
                    let mut cycle: Vec<String> = trail[start..]
                        .iter()
                        .map(|&n| self.graph[n].name.clone())
                        .collect();
                    cycle.push(dependency.clone());
                    return Some(cycle);
                }
                Some(Mark::Done) => {}
            }
        }

        trail.pop();
        marks.insert(idx, Mark::Done);
        order.push(self.graph[idx].name.clone());
        None
    }

    /// Get the project configuration the graph was built with
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Get the graph's lifecycle state
    pub fn state(&self) -> GraphState {
        self.state
    }

    /// Get the number of registered modules
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of dependency edges (current as of the last validation)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a module is registered
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Get a module by name
    pub fn get(&self, name: &str) -> Option<&ModuleNode> {
        let idx = self.node_map.get(name)?;
        Some(&self.graph[*idx])
    }

    /// Get an iterator over all modules in registration order
    pub fn modules(&self) -> impl Iterator<Item = &ModuleNode> {
        self.graph.node_weights()
    }
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new(ProjectConfig::default())
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}
