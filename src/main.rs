// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphwalk CLI - spanning trees and shortest paths over weighted DOT graphs

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use graphwalk::commands::{self, analyze::AnalyzeArgs, OutputOptions};
use graphwalk::config;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRAPHWALK_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Prim, Bellman-Ford and Floyd-Warshall over a graph file
    Analyze {
        /// DOT file, or a directory searched for *.dot and *.gv files
        path: std::path::PathBuf,

        /// Render diagrams of the graph and every result
        #[arg(long)]
        plot: bool,

        /// Bellman-Ford source vertex (defaults to the first vertex)
        #[arg(short, long)]
        source: Option<String>,

        /// Directory for rendered diagrams
        #[arg(short, long)]
        output_dir: Option<std::path::PathBuf>,
    },

    /// Print the shortest path between two vertices
    Path {
        /// DOT file
        file: std::path::PathBuf,

        /// Start vertex
        from: String,

        /// End vertex
        to: String,
    },

    /// Show the effective configuration
    Config {
        /// Print only this key
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = OutputOptions {
        json: cli.json,
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };

    // Execute command
    match cli.command {
        Commands::Analyze { path, plot, source, output_dir } => {
            let args = AnalyzeArgs { path, plot, source, output_dir };
            commands::analyze::run(args, &config, output)
        }
        Commands::Path { file, from, to } => {
            commands::path::run(&file, &from, &to, output)
        }
        Commands::Config { key } => {
            commands::config::run(&config, key.as_deref())
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
