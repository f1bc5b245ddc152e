//! Configuration management.

use anyhow::{Context, Result};
use image2lcd_core::{CanvasSize, CANVAS_HEIGHT, CANVAS_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Canvas configuration
    #[serde(default)]
    pub canvas: CanvasConfig,
}

/// Canvas configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    CANVAS_WIDTH
}

fn default_height() -> u32 {
    CANVAS_HEIGHT
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Resolves the canvas size, command line values taking precedence.
    pub fn canvas_size(&self, width: Option<u32>, height: Option<u32>) -> Result<CanvasSize> {
        let width = width.unwrap_or(self.canvas.width);
        let height = height.unwrap_or(self.canvas.height);
        CanvasSize::new(width, height).context("Invalid canvas size")
    }
}
