// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Diagram rendering for graphs and analysis results
//!
//! The renderer is chosen once, when the command is composed. Plotting
//! only reads the graph and the analysis.

pub mod dot;
pub mod graphviz;

use crate::analysis::Analysis;
use crate::config::Config;
use crate::graph::Graph;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub use graphviz::{DotSourceRenderer, GraphvizRenderer};

/// Something that can turn a DOT document into an output file
pub trait Renderer {
    /// File extension of the produced files
    fn extension(&self) -> &str;

    /// Render `document` into `dir/name.<extension>` and return the path
    ///
    /// # Errors
    ///
    /// Fails when the output cannot be produced.
    fn render(&self, document: &str, dir: &Path, name: &str) -> Result<PathBuf>;
}

/// Rendering capability resolved at composition time
pub enum Rendering {
    /// A renderer is ready to use
    Available(Box<dyn Renderer>),
    /// No renderer could be set up
    Unavailable {
        /// Why rendering is off
        reason: String,
    },
}

impl Rendering {
    /// Select a renderer from the configuration
    ///
    /// `image_format = "dot"` writes DOT sources and is always available.
    /// Any other format needs the Graphviz executable.
    #[must_use]
    pub fn select(config: &Config) -> Self {
        if config.image_format.eq_ignore_ascii_case("dot") {
            return Self::Available(Box::new(DotSourceRenderer));
        }

        match GraphvizRenderer::detect(&config.dot_command, &config.image_format) {
            Ok(renderer) => Self::Available(Box::new(renderer)),
            Err(reason) => Self::Unavailable {
                reason: format!("{reason}. Install Graphviz or set image_format = \"dot\""),
            },
        }
    }

    /// Check whether a renderer is available
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Render every diagram for one analysed graph into `dir`
///
/// Writes the whole graph, the spanning tree (undirected graphs), the
/// Bellman-Ford tree (when it succeeded) and one Floyd-Warshall diagram
/// per source vertex.
///
/// # Errors
///
/// Fails when the directory cannot be created or a renderer fails.
pub fn plot(
    renderer: &dyn Renderer,
    graph: &Graph,
    analysis: &Analysis,
    dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut written = vec![renderer.render(&dot::graph_document(graph), dir, stem)?];

    if let Some(Ok(tree)) = &analysis.spanning_tree {
        written.push(renderer.render(&dot::spanning_tree_document(tree), dir, "mst_tree")?);
    }

    if let Ok(tree) = &analysis.shortest_paths {
        written.push(renderer.render(
            &dot::shortest_path_document(graph, tree),
            dir,
            "bellman_paths",
        )?);
    }

    let mut stems = HashSet::new();
    for (pos, source) in graph.vertices().iter().enumerate() {
        let mut stem = format!("floyd_paths_{}", file_stem(source));
        if !stems.insert(stem.clone()) {
            stem = format!("{stem}_{pos}");
            stems.insert(stem.clone());
        }
        let used = match analysis.all_pairs.path_edges_from(source) {
            Ok(used) => used,
            Err(e) => {
                tracing::warn!("Skipping Floyd-Warshall diagram for {}: {}", source, e);
                continue;
            }
        };
        written.push(renderer.render(
            &dot::all_pairs_document(graph, source, &used),
            dir,
            &stem,
        )?);
    }

    for path in &written {
        tracing::info!("Rendered {}", path.display());
    }

    Ok(written)
}

/// Vertex label reduced to characters that are safe in a file name
///
/// Path separators and dots become `_`, so no label can leave `dir`.
fn file_stem(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '-' | '_') { c } else { '_' })
        .collect()
}
