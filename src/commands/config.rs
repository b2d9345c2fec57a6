// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command

use crate::config::{self, Config};
use anyhow::Result;

/// Print the effective configuration, or a single key of it
pub fn run(config: &Config, key: Option<&str>) -> Result<()> {
    match key {
        None => {
            if let Some(path) = config::default_path() {
                tracing::debug!("Default config file: {}", path.display());
            }
            print!("{}", config::to_toml(config)?);
        }
        Some("output_dir") => println!("{}", config.output_dir.display()),
        Some("dot_command") => println!("{}", config.dot_command),
        Some("image_format") => println!("{}", config.image_format),
        Some("log_level") => println!("{}", config.log_level),
        Some(other) => anyhow::bail!(
            "Unknown configuration key: {}. Valid: output_dir, dot_command, image_format, log_level",
            other
        ),
    }
    Ok(())
}
