// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! DOT document generation for graphs and algorithm results

use crate::algorithms::{ShortestPathTree, SpanningTree};
use crate::graph::Graph;
use crate::types::Edge;
use std::collections::{BTreeSet, HashSet};

const HIGHLIGHT_BELLMAN: &str = "red";
const HIGHLIGHT_FLOYD: &str = "green";
const DIMMED: &str = "gray";
const SOURCE_FILL: &str = "#ffcccc";

/// Quote a label as a DOT identifier
fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

struct Document {
    text: String,
    op: &'static str,
}

impl Document {
    fn new(directed: bool, comment: &str) -> Self {
        let (keyword, op) = if directed { ("digraph", "->") } else { ("graph", "--") };
        let text = format!("// {comment}\n{keyword} {{\n");
        Self { text, op }
    }

    fn node(&mut self, label: &str, attrs: &str) {
        self.text.push_str(&format!("  {} [{attrs}];\n", quote(label)));
    }

    fn edge(&mut self, edge: &Edge, extra: Option<(&str, u8)>) {
        self.text.push_str(&format!(
            "  {} {} {} [label=\"{}\"",
            quote(&edge.source),
            self.op,
            quote(&edge.target),
            edge.weight
        ));
        if let Some((color, penwidth)) = extra {
            self.text.push_str(&format!(", color=\"{color}\", penwidth={penwidth}"));
        }
        self.text.push_str("];\n");
    }

    fn finish(mut self) -> String {
        self.text.push_str("}\n");
        self.text
    }
}

/// Whole graph, one edge per logical edge
#[must_use]
pub fn graph_document(graph: &Graph) -> String {
    let mut doc = Document::new(graph.is_directed(), "Graph");
    for vertex in graph.vertices() {
        doc.node(vertex, "shape=circle");
    }
    for edge in graph.logical_edges() {
        doc.edge(edge, None);
    }
    doc.finish()
}

/// Minimum spanning tree as an undirected graph
#[must_use]
pub fn spanning_tree_document(tree: &SpanningTree) -> String {
    let mut doc = Document::new(false, "Minimum spanning tree");
    doc.node(&tree.root, "shape=doublecircle");
    for edge in &tree.edges {
        doc.edge(edge, None);
    }
    doc.finish()
}

/// All directed edges with the Bellman-Ford parent tree highlighted
#[must_use]
pub fn shortest_path_document(graph: &Graph, tree: &ShortestPathTree) -> String {
    let used: HashSet<(&str, &str)> = tree.tree_edges().collect();
    let mut doc = Document::new(true, &format!("Bellman-Ford paths from {}", tree.source));
    for edge in graph.edges() {
        let style = if used.contains(&(edge.source.as_str(), edge.target.as_str())) {
            (HIGHLIGHT_BELLMAN, 2)
        } else {
            (DIMMED, 1)
        };
        doc.edge(edge, Some(style));
    }
    doc.finish()
}

/// All directed edges with the shortest paths from `source` highlighted
#[must_use]
pub fn all_pairs_document(graph: &Graph, source: &str, used: &BTreeSet<(String, String)>) -> String {
    let mut doc = Document::new(true, &format!("Shortest paths from {source}"));
    doc.node(
        source,
        &format!("color=\"{HIGHLIGHT_BELLMAN}\", style=filled, fillcolor=\"{SOURCE_FILL}\""),
    );
    for edge in graph.edges() {
        let key = (edge.source.clone(), edge.target.clone());
        let style = if used.contains(&key) {
            (HIGHLIGHT_FLOYD, 2)
        } else {
            (DIMMED, 1)
        };
        doc.edge(edge, Some(style));
    }
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{bellman_ford, floyd_warshall, prim};

    fn triangle() -> Graph {
        let pairs = [("A", "B", 1), ("B", "C", 2), ("A", "C", 4)];
        let edges = pairs
            .iter()
            .flat_map(|&(u, v, w)| [Edge::new(u, v, w), Edge::new(v, u, w)])
            .collect();
        Graph::build(vec!["A".into(), "B".into(), "C".into()], edges, false).unwrap()
    }

    #[test]
    fn test_graph_document_undirected() {
        let dot = graph_document(&triangle());

        assert!(dot.contains("graph {"));
        assert!(!dot.contains("digraph"));
        assert!(dot.contains("\"A\" -- \"B\" [label=\"1\"];"));
        assert!(!dot.contains("\"B\" -- \"A\""));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_spanning_tree_document() {
        let tree = prim(&triangle()).unwrap();
        let dot = spanning_tree_document(&tree);

        assert!(dot.contains("\"B\" -- \"C\" [label=\"2\"];"));
        assert!(!dot.contains("label=\"4\""));
    }

    #[test]
    fn test_shortest_path_highlight() {
        let graph = triangle();
        let tree = bellman_ford(&graph, "A").unwrap();
        let dot = shortest_path_document(&graph, &tree);

        assert!(dot.starts_with("// Bellman-Ford paths from A\ndigraph {"));
        assert!(dot.contains("\"B\" -> \"C\" [label=\"2\", color=\"red\", penwidth=2];"));
        assert!(dot.contains("\"A\" -> \"C\" [label=\"4\", color=\"gray\", penwidth=1];"));
    }

    #[test]
    fn test_all_pairs_highlight() {
        let graph = triangle();
        let all = floyd_warshall(&graph);
        let used = all.path_edges_from("C").unwrap();
        let dot = all_pairs_document(&graph, "C", &used);

        assert!(dot.contains("\"C\" [color=\"red\", style=filled, fillcolor=\"#ffcccc\"];"));
        assert!(dot.contains("\"C\" -> \"B\" [label=\"2\", color=\"green\", penwidth=2];"));
        assert!(dot.contains("\"C\" -> \"A\" [label=\"4\", color=\"gray\", penwidth=1];"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
