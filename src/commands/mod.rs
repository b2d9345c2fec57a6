// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod analyze;
pub mod completions;
pub mod config;
pub mod path;

use crate::graph::Graph;
use crate::reader;
use anyhow::{Context, Result};
use std::path::Path;

/// Output flags shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Print JSON instead of text
    pub json: bool,
    /// Emit ANSI colors in text output
    pub color: bool,
}

/// Read a DOT file and build its graph
pub(crate) fn load_graph(path: &Path) -> Result<Graph> {
    let description = reader::read_file(path)?;
    description
        .into_graph()
        .with_context(|| format!("Invalid graph in {}", path.display()))
}
