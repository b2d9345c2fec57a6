// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Property tests checking the engines against petgraph and each other

use graphwalk::algorithms::{bellman_ford, floyd_warshall, prim};
use graphwalk::error::GraphError;
use graphwalk::graph::Graph;
use graphwalk::types::{Distance, Edge};
use petgraph::algo::min_spanning_tree;
use petgraph::data::Element;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use proptest::prelude::*;
use proptest::sample::Index;

type EdgeList = Vec<(usize, usize, i64)>;

fn name(i: usize) -> String {
    format!("v{i:02}")
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(name).collect()
}

fn directed(n: usize, edges: &EdgeList) -> Graph {
    let edges = edges
        .iter()
        .map(|&(u, v, w)| Edge::new(name(u), name(v), w))
        .collect();
    Graph::build(names(n), edges, true).unwrap()
}

fn undirected(n: usize, edges: &EdgeList) -> Graph {
    let edges = edges
        .iter()
        .flat_map(|&(u, v, w)| [Edge::new(name(u), name(v), w), Edge::new(name(v), name(u), w)])
        .collect();
    Graph::build(names(n), edges, false).unwrap()
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

/// Random digraph: vertex count plus an edge list that may include
/// self-loops and parallel edges
fn digraph_strategy(weights: std::ops::Range<i64>) -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..=8).prop_flat_map(move |n| {
        (Just(n), prop::collection::vec((0..n, 0..n, weights.clone()), 0..=n * 3))
    })
}

/// Random connected undirected graph: a random spanning skeleton plus extra edges
fn connected_strategy() -> impl Strategy<Value = (usize, EdgeList)> {
    (1usize..=9).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((any::<Index>(), -10i64..20), n - 1),
            prop::collection::vec((0..n, 0..n, -10i64..20), 0..=n * 2),
        )
            .prop_map(|(n, skeleton, extra)| {
                let mut edges: EdgeList = skeleton
                    .into_iter()
                    .enumerate()
                    .map(|(i, (parent, w))| (parent.index(i + 1), i + 1, w))
                    .collect();
                edges.extend(extra.into_iter().filter(|(u, v, _)| u != v));
                (n, edges)
            })
    })
}

proptest! {
    #[test]
    fn prim_weight_matches_petgraph((n, edges) in connected_strategy()) {
        let graph = undirected(n, &edges);
        let tree = prim(&graph).unwrap();

        let mut reference = UnGraph::<(), i64>::new_undirected();
        for _ in 0..n {
            reference.add_node(());
        }
        for &(u, v, w) in &edges {
            reference.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
        }
        let expected: i64 = min_spanning_tree(&reference)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();

        prop_assert!(tree.is_spanning());
        prop_assert_eq!(tree.edges.len(), n - 1);
        prop_assert_eq!(tree.total_weight, expected);
    }

    #[test]
    fn bellman_ford_matches_floyd_row((n, edges) in digraph_strategy(0..20)) {
        let graph = directed(n, &edges);
        let all = floyd_warshall(&graph);
        let source = name(0);
        let tree = bellman_ford(&graph, &source).unwrap();

        for v in graph.vertices() {
            prop_assert_eq!(tree.distance(v), all.distance(&source, v));
        }
    }

    #[test]
    fn bellman_ford_matches_floyd_row_with_negative_edges((n, edges) in digraph_strategy(-6..10)) {
        let graph = directed(n, &edges);
        let all = floyd_warshall(&graph);
        prop_assume!(!all.has_negative_cycle());

        let source = name(0);
        let tree = bellman_ford(&graph, &source).unwrap();
        for v in graph.vertices() {
            prop_assert_eq!(tree.distance(v), all.distance(&source, v));
        }
    }

    #[test]
    fn negative_cycle_detection_matches_petgraph((n, edges) in digraph_strategy(-6..10)) {
        let graph = directed(n, &edges);

        let mut reference = DiGraph::<(), f64>::new();
        for _ in 0..n {
            reference.add_node(());
        }
        for &(u, v, w) in &edges {
            reference.add_edge(NodeIndex::new(u), NodeIndex::new(v), w as f64);
        }
        let expected = petgraph::algo::bellman_ford(&reference, NodeIndex::new(0)).is_err();
        let found = matches!(
            bellman_ford(&graph, &name(0)),
            Err(GraphError::NegativeCycle { .. })
        );

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn bellman_ford_is_idempotent((n, edges) in digraph_strategy(-6..10)) {
        let graph = directed(n, &edges);
        prop_assert_eq!(bellman_ford(&graph, &name(0)), bellman_ford(&graph, &name(0)));
    }

    #[test]
    fn reconstructed_paths_sum_to_distance((n, edges) in digraph_strategy(1..20)) {
        let graph = directed(n, &edges);
        let all = floyd_warshall(&graph);

        for u in graph.vertices() {
            for v in graph.vertices() {
                let path = all.reconstruct(u, v).unwrap();
                match all.distance(u, v).unwrap() {
                    Distance::Finite(d) => {
                        prop_assert_eq!(path.first(), Some(u));
                        prop_assert_eq!(path.last(), Some(v));
                        prop_assert_eq!(path_weight(&graph, &path), d);
                    }
                    Distance::Infinite => prop_assert!(path.is_empty()),
                }
            }
        }
    }

    #[test]
    fn unit_weight_paths_count_hops((n, edges) in digraph_strategy(1..2)) {
        let graph = directed(n, &edges);
        let all = floyd_warshall(&graph);

        for u in graph.vertices() {
            for v in graph.vertices() {
                let path = all.reconstruct(u, v).unwrap();
                if let Some(Distance::Finite(d)) = all.distance(u, v) {
                    prop_assert_eq!(i64::try_from(path.len() - 1).unwrap(), d);
                }
                if u == v {
                    prop_assert_eq!(path, vec![u.clone()]);
                }
            }
        }
    }
}
