//! Host configuration.
//!
//! Priority: CLI flags > `REMFORGE_OUT_DIR` > TOML file > defaults. The TOML
//! file is `--config PATH`, else `REMFORGE_CONFIG`, else `./remforge.toml`
//! when it exists.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use remforge_core::PacingConfig;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "remforge.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    /// Fixed RNG seed for reproducible runs. Unset means OS entropy.
    pub seed: Option<u64>,
    pub pacing: PacingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            seed: None,
            pacing: PacingConfig::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config")
    }

    /// Resolve and load the config file, then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("REMFORGE_CONFIG").ok().map(PathBuf::from))
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.is_file().then_some(local)
            });

        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                tracing::debug!("loaded config from {}", path.display());
                Self::from_toml(&content)
                    .with_context(|| format!("in config {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(dir) = std::env::var("REMFORGE_OUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}
