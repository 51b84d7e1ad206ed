//! Configuration file loading for stencil.
//!
//! Discovers and loads `stencil.toml` from the project root. CLI flags
//! take precedence over config file settings.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "stencil.toml";

/// Top-level configuration from stencil.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StencilConfig {
    /// Package layout settings.
    pub packages: PackagesConfig,

    /// Dependency installation settings.
    pub install: InstallConfig,
}

/// Packages section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackagesConfig {
    /// Folder new packages live under, relative to the project root.
    pub root: String,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            root: "packages".to_string(),
        }
    }
}

/// Install section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Whether to run the installer after scaffolding.
    pub enabled: bool,

    /// Command invoked in the project root to install dependencies.
    pub command: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: vec!["npm".to_string(), "install".to_string()],
        }
    }
}

/// Discover the stencil.toml config file in the project root.
///
/// Returns `None` if no config file is found.
pub fn discover_config(project_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a stencil.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<StencilConfig> {
    let contents =
        fs::read_to_string(path.as_std_path()).with_context(|| format!("read config file {path}"))?;
    parse_config(&contents).with_context(|| format!("parse config file {path}"))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<StencilConfig> {
    let config: StencilConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the project root, or return defaults if not found.
pub fn load_or_default(project_root: &Utf8Path) -> anyhow::Result<StencilConfig> {
    match discover_config(project_root) {
        Some(path) => load_config(&path),
        None => Ok(StencilConfig::default()),
    }
}
