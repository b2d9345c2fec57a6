// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the graph engines
//!
//! These tests verify critical invariants:
//! 1. Concrete scenarios - known graphs produce known results
//! 2. Engine independence - one engine failing leaves the others intact
//! 3. Path fidelity - reconstructed paths agree with the distance matrix

use graphwalk::algorithms::{bellman_ford, floyd_warshall, prim};
use graphwalk::analysis::Analysis;
use graphwalk::error::GraphError;
use graphwalk::graph::Graph;
use graphwalk::reader;
use graphwalk::types::{Distance, Edge};

// =============================================================================
// Test Helpers
// =============================================================================

fn graph_from(dot: &str) -> Graph {
    reader::parse(dot).unwrap().into_graph().unwrap()
}

fn triangle() -> Graph {
    graph_from("graph {\n  A -- B [label=1];\n  B -- C [label=2];\n  A -- C [label=4];\n}\n")
}

fn path_weight(graph: &Graph, path: &[String]) -> i64 {
    path.windows(2)
        .map(|hop| {
            graph
                .edges()
                .iter()
                .filter(|e| e.source == hop[0] && e.target == hop[1])
                .map(|e| e.weight)
                .min()
                .unwrap()
        })
        .sum()
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_triangle_prim() {
    let tree = prim(&triangle()).unwrap();

    assert_eq!(tree.edges, vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2)]);
    assert_eq!(tree.total_weight, 3);
}

#[test]
fn test_triangle_bellman_ford() {
    let tree = bellman_ford(&triangle(), "A").unwrap();

    assert_eq!(tree.distance("A"), Some(Distance::Finite(0)));
    assert_eq!(tree.distance("B"), Some(Distance::Finite(1)));
    assert_eq!(tree.distance("C"), Some(Distance::Finite(3)));
}

#[test]
fn test_triangle_floyd_warshall() {
    let all = floyd_warshall(&triangle());

    assert_eq!(all.distance("A", "C"), Some(Distance::Finite(3)));
    assert_eq!(all.reconstruct("A", "C").unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_directed_negative_cycle() {
    let graph = graph_from("digraph { A -> B [label=1]; B -> C [label=-3]; C -> A [label=1]; }");

    assert!(matches!(
        bellman_ford(&graph, "A"),
        Err(GraphError::NegativeCycle { .. })
    ));
}

#[test]
fn test_negative_cycle_not_reachable() {
    let graph = graph_from(
        "digraph { S -> T [label=2]; X -> Y [label=-5]; Y -> X [label=1]; }",
    );
    let tree = bellman_ford(&graph, "S").unwrap();

    assert_eq!(tree.distance("T"), Some(Distance::Finite(2)));
    assert_eq!(tree.distance("X"), Some(Distance::Infinite));
}

// =============================================================================
// Engine Independence
// =============================================================================

#[test]
fn test_engines_do_not_share_failures() {
    let graph = graph_from("digraph { A -> B [label=1]; B -> C [label=-3]; C -> A [label=1]; }");
    let analysis = Analysis::run(&graph, "A").unwrap();

    assert!(analysis.shortest_paths.is_err());
    assert!(analysis.all_pairs.has_negative_cycle());
    assert!(analysis.spanning_tree.is_none());
}

#[test]
fn test_prim_rejects_directed() {
    let graph = graph_from("digraph { A -> B }");
    assert!(matches!(prim(&graph), Err(GraphError::UnsupportedGraphType { .. })));
}

#[test]
fn test_bellman_ford_idempotent() {
    let graph = graph_from("digraph { A -> B [label=4]; A -> C [label=1]; C -> B [label=-2]; B -> D [label=3]; }");

    assert_eq!(bellman_ford(&graph, "A").unwrap(), bellman_ford(&graph, "A").unwrap());
}

#[test]
fn test_reader_rejects_mismatched_edge_op() {
    assert!(reader::parse("graph { A -> B }").is_err());
    assert!(reader::parse("digraph { A -- B }").is_err());
}

// =============================================================================
// Path Fidelity
// =============================================================================

#[test]
fn test_paths_match_distances() {
    let graph = graph_from(
        "digraph {
            a -> b [label=3]; a -> c [label=8]; b -> c [label=2];
            c -> d [label=1]; b -> d [label=7]; d -> a [label=2];
            e -> a [label=1];
        }",
    );
    let all = floyd_warshall(&graph);

    for u in graph.vertices() {
        for v in graph.vertices() {
            let path = all.reconstruct(u, v).unwrap();
            match all.distance(u, v).unwrap() {
                Distance::Finite(d) => {
                    assert_eq!(path.first(), Some(u));
                    assert_eq!(path.last(), Some(v));
                    assert_eq!(path_weight(&graph, &path), d, "path {path:?}");
                }
                Distance::Infinite => assert!(path.is_empty(), "{u} -> {v} should have no path"),
            }
        }
    }
}

#[test]
fn test_unit_weight_path_length_equals_distance() {
    let graph = graph_from("graph { p -- q -- r -- s; p -- t -- s; }");
    let all = floyd_warshall(&graph);

    for u in graph.vertices() {
        for v in graph.vertices() {
            let path = all.reconstruct(u, v).unwrap();
            let hops = i64::try_from(path.len() - 1).unwrap();
            assert_eq!(all.distance(u, v), Some(Distance::Finite(hops)));
        }
    }
}

#[test]
fn test_reconstruct_self_is_singleton() {
    let all = floyd_warshall(&triangle());
    for v in ["A", "B", "C"] {
        assert_eq!(all.reconstruct(v, v).unwrap(), vec![v]);
    }
}

#[test]
fn test_bellman_ford_parent_walk_matches_floyd_path_weight() {
    let graph = graph_from("digraph { s -> a [label=2]; s -> b [label=6]; a -> b [label=3]; b -> c [label=-1]; a -> c [label=9]; }");
    let tree = bellman_ford(&graph, "s").unwrap();
    let all = floyd_warshall(&graph);

    for v in graph.vertices() {
        let walk = tree.path_to(v).unwrap();
        assert_eq!(
            Distance::Finite(path_weight(&graph, &walk)),
            all.distance("s", v).unwrap()
        );
    }
}
