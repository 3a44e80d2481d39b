use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::Viewport;

/// Interactive viewer for layered agent graphs
#[derive(Parser, Debug, Default)]
#[command(name = "agent-graph")]
#[command(about = "Visualize an agent's neurons and weighted connections")]
pub struct Cli {
    /// Agent JSON file to show instead of the generated demo agents
    #[arg(long)]
    pub agent: Option<PathBuf>,

    /// Seed for the demo agent generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Graph area width
    #[arg(long)]
    pub width: Option<f32>,

    /// Graph area height
    #[arg(long)]
    pub height: Option<f32>,

    /// Write the first agent as SVG to this path and exit
    #[arg(long)]
    pub export_svg: Option<PathBuf>,

    /// JSON settings file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "agent_graph=debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: f32,
    pub height: f32,
    pub seed: Option<u64>,
    pub agent: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 820.0,
            height: 400.0,
            seed: None,
            agent: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Reads the settings file named by `--config` (if any) and overlays
    /// the explicit flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(width) = cli.width {
            settings.width = width;
        }
        if let Some(height) = cli.height {
            settings.height = height;
        }
        if cli.seed.is_some() {
            settings.seed = cli.seed;
        }
        if cli.agent.is_some() {
            settings.agent = cli.agent.clone();
        }
        if let Some(level) = &cli.log_level {
            settings.log_level = level.clone();
        }
        settings.viewport()?;
        Ok(settings)
    }

    pub fn viewport(&self) -> Result<Viewport> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(Viewport::new(self.width, self.height))
        } else {
            Err(Error::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}
