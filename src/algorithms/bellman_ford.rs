// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Bellman-Ford single-source shortest paths with negative-cycle detection

use crate::error::GraphError;
use crate::graph::Graph;
use crate::types::{Distance, Weight};
use serde::Serialize;
use std::collections::HashMap;

/// Distance and tree parent of one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    /// Vertex label
    pub vertex: String,
    /// Shortest distance from the source
    pub distance: Distance,
    /// Predecessor on the shortest path, `None` for the source and unreachable vertices
    pub parent: Option<String>,
}

/// Shortest distances and parents from one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    /// Source vertex
    pub source: String,
    /// One entry per vertex, in the graph's fixed order
    pub entries: Vec<PathEntry>,
    /// Vertex label to position in `entries`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ShortestPathTree {
    /// Find the entry for a vertex
    #[must_use]
    pub fn entry(&self, vertex: &str) -> Option<&PathEntry> {
        self.index.get(vertex).map(|&i| &self.entries[i])
    }

    /// Shortest distance to a vertex
    #[must_use]
    pub fn distance(&self, vertex: &str) -> Option<Distance> {
        self.entry(vertex).map(|e| e.distance)
    }

    /// Parent of a vertex on its shortest path
    #[must_use]
    pub fn parent(&self, vertex: &str) -> Option<&str> {
        self.entry(vertex).and_then(|e| e.parent.as_deref())
    }

    /// Walk parents back from `vertex` to the source
    ///
    /// Returns `None` when the vertex is unknown or unreachable.
    #[must_use]
    pub fn path_to(&self, vertex: &str) -> Option<Vec<String>> {
        let entry = self.entry(vertex)?;
        if !entry.distance.is_finite() {
            return None;
        }

        let mut path = vec![entry.vertex.clone()];
        let mut current = entry;
        while let Some(parent) = current.parent.as_deref() {
            if path.len() > self.entries.len() {
                return None;
            }
            path.push(parent.to_string());
            current = self.entry(parent)?;
        }
        path.reverse();
        Some(path)
    }

    /// Parent -> vertex pairs forming the shortest-path tree
    pub fn tree_edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .filter_map(|e| e.parent.as_deref().map(|p| (p, e.vertex.as_str())))
    }
}

/// Compute shortest paths from `source` over every directed edge
///
/// Up to |V| - 1 relaxation passes run, stopping early after a pass with
/// no update. A final scan then looks for an edge that still relaxes.
///
/// # Errors
///
/// `UnknownVertex` when `source` is not in the graph, `NegativeCycle`
/// when a negative cycle is reachable from it.
pub fn bellman_ford(graph: &Graph, source: &str) -> Result<ShortestPathTree, GraphError> {
    let start = graph
        .position(source)
        .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;

    let n = graph.vertex_count();
    let edges: Vec<(usize, usize, Weight)> = graph.indexed_edges().collect();

    let mut dist = vec![Distance::Infinite; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    dist[start] = Distance::ZERO;

    let mut passes = 0usize;
    for _ in 1..n {
        passes += 1;
        let mut updated = false;
        for &(u, v, w) in &edges {
            let candidate = dist[u] + w;
            if dist[u].is_finite() && candidate < dist[v] {
                dist[v] = candidate;
                parent[v] = Some(u);
                updated = true;
            }
        }
        if !updated {
            tracing::trace!(passes, "Bellman-Ford converged early");
            break;
        }
    }

    for &(u, v, w) in &edges {
        if dist[u].is_finite() && dist[u] + w < dist[v] {
            return Err(GraphError::NegativeCycle {
                origin: source.to_string(),
                from: graph.label(u).to_string(),
                to: graph.label(v).to_string(),
            });
        }
    }

    tracing::debug!(source, passes, "Bellman-Ford finished");

    let entries = (0..n)
        .map(|v| PathEntry {
            vertex: graph.label(v).to_string(),
            distance: dist[v],
            parent: parent[v].map(|p| graph.label(p).to_string()),
        })
        .collect();

    let index = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect();

    Ok(ShortestPathTree {
        source: source.to_string(),
        entries,
        index,
    })
}
