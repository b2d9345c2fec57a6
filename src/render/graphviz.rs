// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Renderers that turn DOT documents into files

use super::Renderer;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Renders images by piping DOT into the Graphviz `dot` executable
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    command: String,
    format: String,
}

impl GraphvizRenderer {
    /// Probe for a working `dot` executable
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the executable cannot be run.
    pub fn detect(command: &str, format: &str) -> Result<Self, String> {
        let output = Command::new(command)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| format!("'{command}' could not be started: {e}"))?;

        if !output.status.success() {
            return Err(format!("'{command} -V' exited with {}", output.status));
        }

        // dot prints its version banner on stderr
        let banner = String::from_utf8_lossy(&output.stderr);
        tracing::debug!("Using {}", banner.trim());

        Ok(Self {
            command: command.to_string(),
            format: format.to_string(),
        })
    }
}

impl Renderer for GraphvizRenderer {
    fn extension(&self) -> &str {
        &self.format
    }

    fn render(&self, document: &str, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(format!("{name}.{}", self.format));

        let mut child = Command::new(&self.command)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(&path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start {}", self.command))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(document.as_bytes())
                .with_context(|| format!("Failed to send {name} to {}", self.command))?;
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for {}", self.command))?;
        if !output.status.success() {
            bail!(
                "{} failed on {}: {}",
                self.command,
                name,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(path)
    }
}

/// Writes the DOT documents themselves, no external tool needed
#[derive(Debug, Clone, Copy, Default)]
pub struct DotSourceRenderer;

impl Renderer for DotSourceRenderer {
    fn extension(&self) -> &str {
        "dot"
    }

    fn render(&self, document: &str, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(format!("{name}.dot"));
        fs::write(&path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
