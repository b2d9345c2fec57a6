// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Text and JSON reports of an analysis

use crate::algorithms::{AllPairs, ShortestPathTree, SpanningTree};
use crate::analysis::Analysis;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::types::Edge;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

/// Terminal styling for text reports
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    /// Emit ANSI colors
    pub color: bool,
}

impl Style {
    fn heading(self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the human-readable report
///
/// # Errors
///
/// Propagates write errors.
pub fn write_text(out: &mut impl Write, graph: &Graph, analysis: &Analysis, style: Style) -> io::Result<()> {
    let kind = if graph.is_directed() { "Directed" } else { "Undirected" };
    writeln!(out, "{}", style.heading(&format!("{kind} graph")))?;
    writeln!(out, "Vertices: {}", join(graph.vertices()))?;
    writeln!(out, "Edges: {}", join(graph.edges()))?;

    if let Some(tree) = &analysis.spanning_tree {
        writeln!(out)?;
        writeln!(out, "{}", style.heading("=== Prim ==="))?;
        match tree {
            Ok(tree) => write_spanning_tree(out, tree)?,
            Err(e) => writeln!(out, "{}", style.error(&format!("Error: {e}")))?,
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style.heading(&format!("=== Bellman-Ford (source {}) ===", analysis.source))
    )?;
    match &analysis.shortest_paths {
        Ok(tree) => write_shortest_paths(out, tree)?,
        Err(e) => writeln!(out, "{}", style.error(&format!("Error: {e}")))?,
    }

    writeln!(out)?;
    writeln!(out, "{}", style.heading("=== Floyd-Warshall ==="))?;
    write_matrix(out, &analysis.all_pairs)?;
    if analysis.all_pairs.has_negative_cycle() {
        writeln!(
            out,
            "{}",
            style.error("Warning: negative cycle present, distances are undefined")
        )?;
    }

    Ok(())
}

fn write_spanning_tree(out: &mut impl Write, tree: &SpanningTree) -> io::Result<()> {
    writeln!(out, "MST edges: {}", join(&tree.edges))?;
    writeln!(out, "Total weight: {}", tree.total_weight)?;
    if !tree.is_spanning() {
        writeln!(
            out,
            "Graph is disconnected: tree covers {} of {} vertices",
            tree.edges.len() + 1,
            tree.vertex_count
        )?;
    }
    Ok(())
}

fn write_shortest_paths(out: &mut impl Write, tree: &ShortestPathTree) -> io::Result<()> {
    for entry in &tree.entries {
        writeln!(
            out,
            "{} -> {}: dist = {}, parent = {}",
            tree.source,
            entry.vertex,
            entry.distance,
            entry.parent.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

/// Write the distance matrix as an aligned table
///
/// # Errors
///
/// Propagates write errors.
pub fn write_matrix(out: &mut impl Write, all: &AllPairs) -> io::Result<()> {
    let label_width = all.vertices.iter().map(|v| v.chars().count()).max().unwrap_or(0).max(3);
    let cell_width = all
        .dist
        .iter()
        .flatten()
        .map(|d| d.to_string().chars().count())
        .chain(all.vertices.iter().map(|v| v.chars().count()))
        .max()
        .unwrap_or(0)
        .max(5);

    writeln!(out, "Distance matrix:")?;
    write!(out, "{:label_width$}", "")?;
    for v in &all.vertices {
        write!(out, " {v:>cell_width$}")?;
    }
    writeln!(out)?;

    for (i, u) in all.vertices.iter().enumerate() {
        write!(out, "{u:>label_width$}")?;
        for d in &all.dist[i] {
            write!(out, " {d:>cell_width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

// =============================================================================
// JSON
// =============================================================================

/// Successful result or the error message of one engine
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome<'a, T> {
    /// Engine result
    Ok(&'a T),
    /// Engine failure
    Err {
        /// Error message
        error: String,
    },
}

impl<'a, T> From<&'a Result<T, GraphError>> for Outcome<'a, T> {
    fn from(result: &'a Result<T, GraphError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::Err { error: e.to_string() },
        }
    }
}

/// Machine-readable report of one analysed graph
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Input file, when read from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Whether the graph is directed
    pub directed: bool,
    /// Vertex labels in fixed order
    pub vertices: &'a [String],
    /// Directed edges
    pub edges: &'a [Edge],
    /// Prim result, absent for directed graphs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prim: Option<Outcome<'a, SpanningTree>>,
    /// Bellman-Ford result
    pub bellman_ford: Outcome<'a, ShortestPathTree>,
    /// Floyd-Warshall matrices
    pub floyd_warshall: &'a AllPairs,
}

impl<'a> JsonReport<'a> {
    /// Assemble a report from a graph and its analysis
    #[must_use]
    pub fn new(graph: &'a Graph, analysis: &'a Analysis, file: Option<String>) -> Self {
        Self {
            file,
            directed: graph.is_directed(),
            vertices: graph.vertices(),
            edges: graph.edges(),
            prim: analysis.spanning_tree.as_ref().map(Outcome::from),
            bellman_ford: Outcome::from(&analysis.shortest_paths),
            floyd_warshall: &analysis.all_pairs,
        }
    }
}
