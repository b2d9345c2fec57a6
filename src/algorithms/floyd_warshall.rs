// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Floyd-Warshall all-pairs shortest paths with a successor matrix
//!
//! There is no negative-cycle guard here. On a graph with a negative
//! cycle the diagonal of the distance matrix goes negative and the
//! remaining entries are meaningless; `AllPairs::has_negative_cycle`
//! reports the condition after the fact.

use crate::graph::Graph;
use crate::types::Distance;
use serde::Serialize;

/// Distance and successor matrices indexed by the graph's vertex order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllPairs {
    /// Vertex labels; row and column `i` belong to `vertices[i]`
    pub vertices: Vec<String>,
    /// `dist[i][j]` is the shortest distance from `i` to `j`
    pub dist: Vec<Vec<Distance>>,
    /// `next[i][j]` is the first hop after `i` on a shortest path to `j`
    pub next: Vec<Vec<Option<usize>>>,
}

impl AllPairs {
    /// Position of a vertex in the matrices
    #[must_use]
    pub fn position(&self, vertex: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    /// Shortest distance between two vertices
    #[must_use]
    pub fn distance(&self, from: &str, to: &str) -> Option<Distance> {
        Some(self.dist[self.position(from)?][self.position(to)?])
    }

    /// Matrix side length
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check whether the matrices are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check whether any vertex reaches itself with negative weight
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.len()).any(|i| self.dist[i][i] < Distance::ZERO)
    }
}

/// Compute all-pairs shortest paths
///
/// Parallel edges contribute only their minimum weight. Runs in O(V^3).
#[must_use]
pub fn floyd_warshall(graph: &Graph) -> AllPairs {
    let n = graph.vertex_count();
    let mut dist = vec![vec![Distance::Infinite; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = Distance::ZERO;
        next[i][i] = Some(i);
    }
    for (u, v, w) in graph.indexed_edges() {
        let direct = Distance::Finite(w);
        if direct < dist[u][v] {
            dist[u][v] = direct;
        }
        next[u][v] = Some(v);
    }

    for k in 0..n {
        for i in 0..n {
            if !dist[i][k].is_finite() {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    let result = AllPairs {
        vertices: graph.vertices().to_vec(),
        dist,
        next,
    };

    if result.has_negative_cycle() {
        tracing::warn!("Floyd-Warshall: negative cycle present, distances are undefined");
    }
    tracing::debug!(vertices = n, "Floyd-Warshall finished");

    result
}
