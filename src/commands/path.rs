// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path command - prints one shortest path from the all-pairs matrices

use super::{load_graph, OutputOptions};
use crate::algorithms::floyd_warshall;
use crate::types::Distance;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct PathReport<'a> {
    from: &'a str,
    to: &'a str,
    distance: Distance,
    path: Vec<String>,
}

/// Run the path command
pub fn run(file: &Path, from: &str, to: &str, output: OutputOptions) -> Result<()> {
    let graph = load_graph(file)?;
    let all_pairs = floyd_warshall(&graph);
    if all_pairs.has_negative_cycle() {
        eprintln!("Warning: graph has a negative cycle, paths are undefined");
    }

    let path = all_pairs
        .reconstruct(from, to)
        .with_context(|| format!("Cannot find a path from {from} to {to}"))?;
    let distance = all_pairs.distance(from, to).unwrap_or(Distance::Infinite);

    if output.json {
        let report = PathReport {
            from,
            to,
            distance,
            path,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize path")?
        );
    } else if path.is_empty() {
        println!("No path from {from} to {to}");
    } else {
        println!("{}", path.join(" -> "));
        println!("Distance: {distance}");
    }

    Ok(())
}
