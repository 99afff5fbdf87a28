// Tests for module graph resolution

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a library module with no dependencies
fn lib(name: &str) -> ModuleNode {
    ModuleNode::new(name.to_string(), ArtifactKind::Library)
}

/// Create a library module with dependencies
fn lib_with_deps(name: &str, deps: &[&str]) -> ModuleNode {
    ModuleNode::new(name.to_string(), ArtifactKind::Library)
        .with_dependencies(deps.iter().map(|d| d.to_string()).collect())
}

/// Register a chain of modules, each depending on the next
fn register_all(graph: &mut ModuleGraph, modules: Vec<ModuleNode>) {
    for module in modules {
        graph.register(module).unwrap();
    }
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = ModuleGraph::default();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.state(), GraphState::Empty);
}

#[test]
fn test_register_single_module() {
    let mut graph = ModuleGraph::default();
    graph.register(lib("core")).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains("core"));
    assert_eq!(graph.state(), GraphState::Populated);
}

#[test]
fn test_register_duplicate_fails() {
    let mut graph = ModuleGraph::default();
    graph.register(lib("core")).unwrap();

    let result = graph.register(lib_with_deps("core", &["other"]));
    assert!(matches!(
        result.unwrap_err(),
        GraphError::DuplicateModule { name } if name == "core"
    ));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_register_duplicate_fails_regardless_of_order() {
    // Two declarations sharing a name; whichever lands second fails
    let variants = [lib("core"), lib_with_deps("core", &["other"])];
    for (first, second) in [(0, 1), (1, 0)] {
        let mut graph = ModuleGraph::default();
        graph.register(variants[first].clone()).unwrap();
        assert!(matches!(
            graph.register(variants[second].clone()).unwrap_err(),
            GraphError::DuplicateModule { .. }
        ));
    }
}

#[test]
fn test_register_empty_name_fails() {
    let mut graph = ModuleGraph::default();
    let result = graph.register(lib(""));
    assert!(matches!(result.unwrap_err(), GraphError::EmptyModuleName));
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.state(), GraphState::Empty);
}

// ============================================================================
// Validation: reference checking
// ============================================================================

#[test]
fn test_validate_unknown_dependency() {
    let mut graph = ModuleGraph::default();
    graph.register(lib_with_deps("app", &["missing"])).unwrap();

    let result = graph.validate();
    match result.unwrap_err() {
        GraphError::UnknownDependency {
            dependency,
            declared_by,
        } => {
            assert_eq!(dependency, "missing");
            assert_eq!(declared_by, "app");
        }
        other => panic!("expected UnknownDependency, got {other:?}"),
    }
    assert_eq!(graph.state(), GraphState::Populated);
}

#[test]
fn test_validate_reports_first_unknown_in_registration_order() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib_with_deps("first", &["gone-a"]),
            lib_with_deps("second", &["gone-b"]),
        ],
    );

    // Registration order decides which missing name surfaces
    match graph.validate().unwrap_err() {
        GraphError::UnknownDependency { dependency, .. } => assert_eq!(dependency, "gone-a"),
        other => panic!("expected UnknownDependency, got {other:?}"),
    }
}

#[test]
fn test_validate_self_dependency_without_traversal() {
    let mut graph = ModuleGraph::default();
    graph.register(lib_with_deps("solo", &["solo"])).unwrap();

    match graph.validate().unwrap_err() {
        GraphError::CyclicDependency { cycle } => {
            assert_eq!(cycle, vec!["solo".to_string(), "solo".to_string()]);
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
    // The self-loop is caught by the reference scan, before edges exist
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_validate_acyclic_graph() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib("test-utils"),
            lib_with_deps("backend", &["test-utils"]),
        ],
    );

    graph.validate().unwrap();
    assert_eq!(graph.state(), GraphState::Validated);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.has_cycles());
}

#[test]
fn test_validate_is_repeatable() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![lib("base"), lib_with_deps("top", &["base"])],
    );

    graph.validate().unwrap();
    graph.validate().unwrap();

    // Edges are rebuilt, not accumulated
    assert_eq!(graph.edge_count(), 1);
}

// ============================================================================
// Validation: cycle detection
// ============================================================================

#[test]
fn test_two_node_cycle() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![lib_with_deps("a", &["b"]), lib_with_deps("b", &["a"])],
    );

    match graph.validate().unwrap_err() {
        GraphError::CyclicDependency { cycle } => {
            assert!(cycle.contains(&"a".to_string()));
            assert!(cycle.contains(&"b".to_string()));
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
}

#[test]
fn test_three_node_cycle_path() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib_with_deps("a", &["b"]),
            lib_with_deps("b", &["c"]),
            lib_with_deps("c", &["a"]),
        ],
    );

    match graph.validate().unwrap_err() {
        GraphError::CyclicDependency { cycle } => {
            assert_eq!(
                cycle,
                vec![
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "a".to_string()
                ]
            );
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
}

#[test]
fn test_cycle_off_the_main_chain() {
    // Acyclic entry point, cycle further down: d -> e -> d
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib_with_deps("root", &["d"]),
            lib_with_deps("d", &["e"]),
            lib_with_deps("e", &["d"]),
        ],
    );

    match graph.validate().unwrap_err() {
        GraphError::CyclicDependency { cycle } => {
            assert_eq!(cycle.first(), cycle.last());
            assert!(cycle.contains(&"d".to_string()));
            assert!(cycle.contains(&"e".to_string()));
            assert!(!cycle.contains(&"root".to_string()));
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
}

#[test]
fn test_detect_cycle_after_failed_validation() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![lib_with_deps("a", &["b"]), lib_with_deps("b", &["a"])],
    );

    assert!(graph.validate().is_err());
    assert!(graph.has_cycles());
    assert!(graph.detect_cycle().is_some());
}

// ============================================================================
// Build order
// ============================================================================

#[test]
fn test_build_order_dependency_first() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib_with_deps("backend", &["test-utils"]),
            lib("test-utils"),
        ],
    );

    let order = graph.build_order().unwrap();
    assert_eq!(order, vec!["test-utils".to_string(), "backend".to_string()]);
    assert_eq!(graph.state(), GraphState::Ordered);
}

#[test]
fn test_build_order_covers_every_module() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib_with_deps("a", &["b", "c"]),
            lib_with_deps("b", &["d"]),
            lib_with_deps("c", &["d"]),
            lib("d"),
        ],
    );

    let order = graph.build_order().unwrap();
    assert_eq!(order.len(), graph.node_count());

    let positions: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    // Every module's dependencies precede it
    for module in graph.modules() {
        for dependency in &module.dependencies {
            assert!(
                positions[dependency.as_str()] < positions[module.name.as_str()],
                "{} must precede {}",
                dependency,
                module.name
            );
        }
    }
}

#[test]
fn test_build_order_ties_break_by_registration_order() {
    let mut graph = ModuleGraph::default();
    register_all(&mut graph, vec![lib("gamma"), lib("alpha"), lib("beta")]);

    let order = graph.build_order().unwrap();
    assert_eq!(
        order,
        vec!["gamma".to_string(), "alpha".to_string(), "beta".to_string()]
    );
}

#[test]
fn test_build_order_is_deterministic() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib_with_deps("a", &["c", "b"]),
            lib("b"),
            lib("c"),
            lib_with_deps("d", &["a"]),
        ],
    );

    let first = graph.build_order().unwrap();
    let second = graph.build_order().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_build_order_validates_implicitly() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![lib_with_deps("a", &["b"]), lib_with_deps("b", &["a"])],
    );

    // No explicit validate() call; the cycle still surfaces
    assert!(matches!(
        graph.build_order().unwrap_err(),
        GraphError::CyclicDependency { .. }
    ));
}

#[test]
fn test_build_order_empty_graph() {
    let mut graph = ModuleGraph::default();
    let order = graph.build_order().unwrap();
    assert!(order.is_empty());
}

#[test]
fn test_complex_dependency_tree() {
    // Build a layered tree:
    //     app
    //    /   \
    //   web   api
    //   |    /  \
    //   ui  db   auth
    //        \   /
    //        core
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![
            lib_with_deps("app", &["web", "api"]),
            lib_with_deps("web", &["ui"]),
            lib_with_deps("api", &["db", "auth"]),
            lib("ui"),
            lib_with_deps("db", &["core"]),
            lib_with_deps("auth", &["core"]),
            lib("core"),
        ],
    );

    let order = graph.build_order().unwrap();
    assert_eq!(order.len(), 7);

    let positions: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    assert!(positions["core"] < positions["db"]);
    assert!(positions["core"] < positions["auth"]);
    assert!(positions["ui"] < positions["web"]);
    assert!(positions["db"] < positions["api"]);
    assert!(positions["auth"] < positions["api"]);
    assert!(positions["web"] < positions["app"]);
    assert!(positions["api"] < positions["app"]);
}

// ============================================================================
// Lifecycle state machine
// ============================================================================

#[test]
fn test_register_after_validate_reverts_state() {
    let mut graph = ModuleGraph::default();
    graph.register(lib("base")).unwrap();
    graph.validate().unwrap();
    assert_eq!(graph.state(), GraphState::Validated);

    graph.register(lib_with_deps("extra", &["base"])).unwrap();
    assert_eq!(graph.state(), GraphState::Populated);

    // The next order covers the enlarged registry
    let order = graph.build_order().unwrap();
    assert_eq!(order, vec!["base".to_string(), "extra".to_string()]);
}

#[test]
fn test_register_after_order_invalidates_it() {
    let mut graph = ModuleGraph::default();
    register_all(
        &mut graph,
        vec![lib("core"), lib_with_deps("app", &["core"])],
    );

    let first = graph.build_order().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(graph.state(), GraphState::Ordered);

    graph
        .register(lib_with_deps("tools", &["core"]))
        .unwrap();
    assert_eq!(graph.state(), GraphState::Populated);

    let second = graph.build_order().unwrap();
    assert_eq!(second.len(), 3);
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_get_module() {
    let mut graph = ModuleGraph::default();
    graph
        .register(
            ModuleNode::new("cli".to_string(), ArtifactKind::Application)
                .with_dependencies(vec!["core".to_string()]),
        )
        .unwrap();

    let module = graph.get("cli").unwrap();
    assert_eq!(module.name, "cli");
    assert_eq!(module.kind, ArtifactKind::Application);
    assert_eq!(module.dependencies, vec!["core".to_string()]);

    assert!(graph.get("nonexistent").is_none());
}

#[test]
fn test_modules_iterate_in_registration_order() {
    let mut graph = ModuleGraph::default();
    register_all(&mut graph, vec![lib("z"), lib("a"), lib("m")]);

    let names: Vec<&str> = graph.modules().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn test_project_config_is_carried() {
    let config = ProjectConfig {
        name: "shop".to_string(),
        default_kind: ArtifactKind::Application,
    };
    let graph = ModuleGraph::new(config.clone());
    assert_eq!(graph.config(), &config);
}
