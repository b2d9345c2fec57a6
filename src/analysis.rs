// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Runs every engine over one graph

use crate::algorithms::{bellman_ford, floyd_warshall, prim, AllPairs, ShortestPathTree, SpanningTree};
use crate::error::GraphError;
use crate::graph::Graph;

/// Results of all three engines for one graph
///
/// Each engine runs independently: a negative cycle fails only the
/// Bellman-Ford result.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Source vertex used for Bellman-Ford
    pub source: String,
    /// Prim result, `None` for directed graphs
    pub spanning_tree: Option<Result<SpanningTree, GraphError>>,
    /// Bellman-Ford result
    pub shortest_paths: Result<ShortestPathTree, GraphError>,
    /// Floyd-Warshall matrices
    pub all_pairs: AllPairs,
}

impl Analysis {
    /// Run all engines, Bellman-Ford from `source`
    ///
    /// # Errors
    ///
    /// `UnknownVertex` when `source` is not in the graph. Per-engine
    /// failures are kept in the returned analysis instead.
    pub fn run(graph: &Graph, source: &str) -> Result<Self, GraphError> {
        if !graph.contains(source) {
            return Err(GraphError::UnknownVertex(source.to_string()));
        }

        let spanning_tree = (!graph.is_directed()).then(|| prim(graph));
        let shortest_paths = bellman_ford(graph, source);
        if let Err(e) = &shortest_paths {
            tracing::warn!("Bellman-Ford: {}", e);
        }
        let all_pairs = floyd_warshall(graph);

        Ok(Self {
            source: source.to_string(),
            spanning_tree,
            shortest_paths,
            all_pairs,
        })
    }
}
