// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Analyze command - runs every engine over one graph file or a directory of them

use super::{load_graph, OutputOptions};
use crate::analysis::Analysis;
use crate::config::Config;
use crate::render::{self, Rendering};
use crate::report::{self, JsonReport, Style};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// File extensions picked up when analyzing a directory
const GRAPH_EXTENSIONS: &[&str] = &["dot", "gv"];

/// Arguments for the analyze command
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Graph file or directory of graph files
    pub path: PathBuf,
    /// Render diagrams
    pub plot: bool,
    /// Bellman-Ford source (first vertex if omitted)
    pub source: Option<String>,
    /// Override for the configured output directory
    pub output_dir: Option<PathBuf>,
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs, config: &Config, output: OutputOptions) -> Result<()> {
    let files = collect_inputs(&args.path)?;
    if files.is_empty() {
        bail!("No graph files (*.dot, *.gv) found in {}", args.path.display());
    }

    // Rendering capability is resolved once for the whole run
    let rendering = if args.plot {
        let rendering = Rendering::select(config);
        if let Rendering::Unavailable { reason } = &rendering {
            warn!("Rendering unavailable: {}", reason);
            eprintln!("Warning: rendering unavailable: {reason}");
        }
        Some(rendering)
    } else {
        None
    };

    let output_dir = args.output_dir.clone().unwrap_or_else(|| config.output_dir.clone());
    let single = files.len() == 1;
    let mut failures = 0usize;

    for (index, file) in files.iter().enumerate() {
        if !single && !output.json && index > 0 {
            println!();
        }
        let result = analyze_file(file, &args, output, rendering.as_ref(), &output_dir, !single);
        match result {
            Ok(()) => {}
            Err(e) if single => return Err(e),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {e:#}");
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} graphs failed", failures, files.len());
    }

    Ok(())
}

fn analyze_file(
    file: &Path,
    args: &AnalyzeArgs,
    output: OutputOptions,
    rendering: Option<&Rendering>,
    output_dir: &Path,
    header: bool,
) -> Result<()> {
    info!("Analyzing {}", file.display());

    let graph = load_graph(file)?;
    if graph.is_empty() {
        bail!("Graph in {} has no vertices", file.display());
    }

    let source = match &args.source {
        Some(s) => s.clone(),
        None => graph.label(0).to_string(),
    };
    let analysis = Analysis::run(&graph, &source)
        .with_context(|| format!("Cannot analyze {}", file.display()))?;

    let mut stdout = std::io::stdout().lock();
    if output.json {
        let report = JsonReport::new(&graph, &analysis, Some(file.display().to_string()));
        serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to serialize report")?;
        stdout.write_all(b"\n")?;
    } else {
        if header {
            writeln!(stdout, "# {}", file.display())?;
        }
        report::write_text(&mut stdout, &graph, &analysis, Style { color: output.color })?;
    }
    drop(stdout);

    if let Some(Rendering::Available(renderer)) = rendering {
        let stem = file
            .file_stem()
            .map_or_else(|| "graph".to_string(), |s| s.to_string_lossy().into_owned());
        let dir = output_dir.join(&stem);
        info!("Rendering {} diagrams into {}", renderer.extension(), dir.display());
        let written = render::plot(&**renderer, &graph, &analysis, &dir, &stem)?;
        if !output.json {
            println!();
            println!("Rendered {} diagrams to {}", written.len(), dir.display());
        }
    }

    Ok(())
}

/// Expand the input path into the list of graph files to analyze
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        bail!("No such file or directory: {}", path.display());
    }
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
        let is_graph = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| GRAPH_EXTENSIONS.contains(&e));
        if entry.file_type().is_file() && is_graph {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
