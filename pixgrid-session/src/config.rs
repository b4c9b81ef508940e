//! Startup configuration for a drawing session.
//!
//! Everything here is fixed once the session is created.

use anyhow::Context;
use pixgrid_core::{Dimensions, GridError, Rgb, ToolKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;

/// Largest brush/eraser side, in cells.
pub const MAX_BRUSH_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub rows: usize,
    pub cols: usize,

    /// Maximum number of retained history entries, the initial one included.
    pub history_capacity: usize,

    /// Color of a fresh grid; the eraser paints this.
    pub background: Rgb,

    /// Paint color selected at startup.
    pub paint_color: Rgb,

    pub tool: ToolKind,
    pub brush_size: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            history_capacity: 20,
            background: Rgb::BLACK,
            paint_color: Rgb::WHITE,
            tool: ToolKind::Brush,
            brush_size: 1,
        }
    }
}

impl EditorConfig {
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Ok(Dimensions::new(self.rows, self.cols)?)
    }

    pub fn capacity(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.history_capacity).ok_or(ConfigError::ZeroHistoryCapacity)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        self.capacity()?;
        validate_brush_size(self.brush_size)?;
        Ok(())
    }
}

fn validate_brush_size(size: u32) -> Result<(), ConfigError> {
    if !(1..=MAX_BRUSH_SIZE).contains(&size) {
        tracing::error!(brush_size = size, "brush size out of range");
        return Err(ConfigError::InvalidBrushSize { size });
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("invalid brush size {size} (must be 1..=16)")]
    InvalidBrushSize { size: u32 },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Load and validate a JSON config file. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<EditorConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let config: EditorConfig = serde_json::from_str(&data).context("parse config json")?;
    config
        .validate()
        .with_context(|| format!("validate config file: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        rows = config.rows,
        cols = config.cols,
        history_capacity = config.history_capacity,
        "config loaded"
    );
    Ok(config)
}
