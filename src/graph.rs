// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weighted graph model shared by all engines

use crate::error::GraphError;
use crate::types::{Edge, Weight};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Immutable weighted graph with petgraph backing for adjacency
///
/// The internal representation is always directed. An undirected graph
/// must be supplied with both directions of every edge; `build` only
/// validates that this is the case.
#[derive(Debug, Clone)]
pub struct Graph {
    /// The underlying directed graph, nodes added in vertex order
    graph: DiGraph<String, Weight>,
    /// Map from vertex label to its position in the fixed order
    positions: HashMap<String, usize>,
    /// Vertex labels in fixed iteration order
    vertices: Vec<String>,
    /// Directed edges in the order supplied
    edges: Vec<Edge>,
    /// Whether the graph is logically directed
    directed: bool,
}

impl Graph {
    /// Build a graph from an ordered vertex list and a directed edge list
    ///
    /// # Errors
    ///
    /// `DuplicateVertex` when a label repeats, `InvalidEdge` when an edge
    /// endpoint is not a vertex, and `GraphTypeMismatch` when an
    /// undirected graph lacks the reverse of some edge.
    pub fn build(vertices: Vec<String>, edges: Vec<Edge>, directed: bool) -> Result<Self, GraphError> {
        let mut graph = DiGraph::with_capacity(vertices.len(), edges.len());
        let mut positions = HashMap::with_capacity(vertices.len());

        for (pos, label) in vertices.iter().enumerate() {
            if positions.insert(label.clone(), pos).is_some() {
                return Err(GraphError::DuplicateVertex(label.clone()));
            }
            graph.add_node(label.clone());
        }

        for edge in &edges {
            let from = lookup(&positions, edge, &edge.source)?;
            let to = lookup(&positions, edge, &edge.target)?;
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), edge.weight);
        }

        if !directed {
            check_symmetric(&edges)?;
        }

        tracing::debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            directed,
            "Built graph"
        );

        Ok(Self {
            graph,
            positions,
            vertices,
            edges,
            directed,
        })
    }

    /// Get vertex labels in fixed order
    #[must_use]
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Get all directed edges
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Check whether the graph is logically directed
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get directed edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check whether a label is a vertex of this graph
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Position of a vertex in the fixed order
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Label of the vertex at a position
    #[must_use]
    pub fn label(&self, pos: usize) -> &str {
        &self.vertices[pos]
    }

    /// Outgoing (neighbor, weight) pairs of a vertex
    #[must_use]
    pub fn neighbors(&self, label: &str) -> Option<Vec<(&str, Weight)>> {
        let pos = self.position(label)?;
        Some(
            self.adjacent(pos)
                .map(|(to, weight)| (self.label(to), weight))
                .collect(),
        )
    }

    /// Outgoing (neighbor position, weight) pairs of a vertex position
    pub(crate) fn adjacent(&self, pos: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.graph
            .edges(NodeIndex::new(pos))
            .map(|e| (e.target().index(), *e.weight()))
    }

    /// Directed edges as (source position, target position, weight), in supply order
    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Edges as the user declared them
    ///
    /// Directed graphs return every edge. Undirected graphs return one
    /// edge per symmetric pair, keeping the first direction seen.
    #[must_use]
    pub fn logical_edges(&self) -> Vec<&Edge> {
        if self.directed {
            return self.edges.iter().collect();
        }

        let mut pending: HashMap<(&str, &str, Weight), usize> = HashMap::new();
        let mut logical = Vec::with_capacity(self.edges.len() / 2 + 1);
        for edge in &self.edges {
            let mirror = (edge.target.as_str(), edge.source.as_str(), edge.weight);
            match pending.get_mut(&mirror) {
                Some(count) if *count > 0 => *count -= 1,
                _ => {
                    *pending
                        .entry((edge.source.as_str(), edge.target.as_str(), edge.weight))
                        .or_insert(0) += 1;
                    logical.push(edge);
                }
            }
        }
        logical
    }
}

fn lookup(positions: &HashMap<String, usize>, edge: &Edge, label: &str) -> Result<usize, GraphError> {
    positions
        .get(label)
        .copied()
        .ok_or_else(|| GraphError::InvalidEdge {
            from: edge.source.clone(),
            to: edge.target.clone(),
            missing: label.to_string(),
        })
}

/// Every (u, v, w) must be matched by as many (v, u, w)
fn check_symmetric(edges: &[Edge]) -> Result<(), GraphError> {
    let mut counts: HashMap<(&str, &str, Weight), i64> = HashMap::new();
    for edge in edges {
        *counts
            .entry((edge.source.as_str(), edge.target.as_str(), edge.weight))
            .or_insert(0) += 1;
    }

    for edge in edges {
        let forward = counts[&(edge.source.as_str(), edge.target.as_str(), edge.weight)];
        let backward = counts
            .get(&(edge.target.as_str(), edge.source.as_str(), edge.weight))
            .copied()
            .unwrap_or(0);
        if forward != backward {
            return Err(GraphError::GraphTypeMismatch {
                from: edge.source.clone(),
                to: edge.target.clone(),
                weight: edge.weight,
            });
        }
    }

    Ok(())
}
