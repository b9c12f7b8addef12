//! Session configuration for the demo front end.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest board side the demo renderer can hold in one texture
pub const MAX_SIDE: usize = 4096;

/// How the board is seeded when a session starts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Seed {
    Empty,
    #[default]
    Random,
    /// Gosper glider gun at the top-left corner
    Gun,
}

/// Board, timing and palette settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    /// Cells per row.
    pub width: usize,
    /// Cells per column.
    pub height: usize,
    /// Edge length of one cell on screen, in pixels.
    pub cell_size: f32,
    /// Width of the border drawn between cells, in pixels.
    pub cell_padding: f32,
    /// Milliseconds between two steps while running.
    pub interval_ms: u64,
    /// Probability of a cell starting alive when seeded randomly.
    pub density: f64,
    pub seed: Seed,
    pub cell_color: [u8; 3],
    pub background_color: [u8; 3],
    pub border_color: [u8; 3],
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 80,
            cell_size: 10.0,
            cell_padding: 1.0,
            interval_ms: 10,
            density: 0.2,
            seed: Seed::Random,
            cell_color: [0, 0, 0],
            background_color: [255, 255, 255],
            border_color: [197, 197, 197],
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board must have at least one cell, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    #[error("board {width}x{height} exceeds {max} cells per side", max = MAX_SIDE)]
    BoardTooLarge { width: usize, height: usize },
    #[error("density {0} must be between 0.0 and 1.0")]
    DensityOutOfRange(f64),
    #[error("step interval must be at least 1 ms")]
    ZeroInterval,
    #[error("cell size {size} must exceed padding {padding}")]
    CellTooSmall { size: f32, padding: f32 },
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json")]
    Parse(#[from] serde_json::Error),
}

impl LifeConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.cell_size <= self.cell_padding {
            return Err(ConfigError::CellTooSmall {
                size: self.cell_size,
                padding: self.cell_padding,
            });
        }
        Ok(())
    }

    /// Step interval in seconds
    pub fn interval_secs(&self) -> f32 {
        self.interval_ms as f32 / 1000.0
    }

    /// On-screen size of the whole board in pixels
    pub fn board_pixels(&self) -> (f32, f32) {
        (
            self.width as f32 * self.cell_size + self.cell_padding,
            self.height as f32 * self.cell_size + self.cell_padding,
        )
    }
}
