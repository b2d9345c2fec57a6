// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "GRAPHWALK";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that receives rendered diagrams
    pub output_dir: PathBuf,
    /// Graphviz executable used for image rendering
    pub dot_command: String,
    /// Image format passed to Graphviz (`png`, `svg`, ...) or `dot` for sources only
    pub image_format: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            dot_command: "dot".to_string(),
            image_format: "png".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Default location of the configuration file
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "graphwalk")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from defaults, a TOML file and the environment
///
/// An explicit `path` must exist; the default location is optional.
/// `GRAPHWALK_*` variables override file values.
///
/// # Errors
///
/// Fails when the file cannot be parsed or a value has the wrong type.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut builder = config::Config::builder();

    match path {
        Some(p) => {
            builder = builder.add_source(config::File::from(p).required(true));
        }
        None => {
            if let Some(p) = default_path() {
                builder = builder.add_source(config::File::from(p.as_path()).required(false));
            }
        }
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .context("Failed to load configuration")?;

    settings
        .try_deserialize()
        .context("Invalid configuration")
}

/// Render a configuration as TOML
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}
