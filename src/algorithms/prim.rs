// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Prim's minimum spanning tree with a lazy-deletion binary heap

use crate::error::GraphError;
use crate::graph::Graph;
use crate::types::{Distance, Edge, Weight};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Minimum spanning tree grown from the first vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Root vertex (first in the fixed order)
    pub root: String,
    /// Tree edges as parent -> child, in vertex order of the child
    pub edges: Vec<Edge>,
    /// Sum of the tree edge weights, saturating at the `i64` bounds
    pub total_weight: Weight,
    /// Number of vertices in the graph the tree was grown over
    pub vertex_count: usize,
}

impl SpanningTree {
    /// Check whether the tree reaches every vertex
    ///
    /// A disconnected graph yields only the component of the root.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count
    }
}

/// Compute a minimum spanning tree of an undirected graph
///
/// Ties between equal weights are broken by vertex position, so the
/// result is deterministic for a fixed input.
///
/// # Errors
///
/// `UnsupportedGraphType` when the graph is directed or empty.
pub fn prim(graph: &Graph) -> Result<SpanningTree, GraphError> {
    if graph.is_directed() {
        return Err(GraphError::UnsupportedGraphType {
            algorithm: "prim",
            reason: "minimum spanning trees are defined for undirected graphs only",
        });
    }
    if graph.is_empty() {
        return Err(GraphError::UnsupportedGraphType {
            algorithm: "prim",
            reason: "graph has no vertices",
        });
    }

    let n = graph.vertex_count();
    let mut min_weight = vec![Distance::Infinite; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];

    min_weight[0] = Distance::ZERO;
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0, 0)));
    let mut extracted = 0usize;

    while let Some(Reverse((_, u))) = heap.pop() {
        // Stale entry for a vertex already in the tree
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;
        extracted += 1;

        for (v, w) in graph.adjacent(u) {
            if !in_tree[v] && Distance::Finite(w) < min_weight[v] {
                min_weight[v] = Distance::Finite(w);
                parent[v] = Some(u);
                heap.push(Reverse((w, v)));
            }
        }
    }

    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight: Weight = 0;
    for (v, p) in parent.iter().enumerate() {
        if let (Some(p), Distance::Finite(w)) = (*p, min_weight[v]) {
            edges.push(Edge::new(graph.label(p), graph.label(v), w));
            total_weight = total_weight.saturating_add(w);
        }
    }

    tracing::debug!(
        extracted,
        tree_edges = edges.len(),
        total_weight,
        "Prim finished"
    );

    Ok(SpanningTree {
        root: graph.label(0).to_string(),
        edges,
        total_weight,
        vertex_count: n,
    })
}
