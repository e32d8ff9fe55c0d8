//! JSON configuration for the `rover` server.
//!
//! Every field is optional. Missing fields fall back to a 10x10 grid with no
//! obstacles served on `localhost:16991`.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::directions::coordinate::Coordinate;
use crate::error::Result;
use crate::grid::{Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub const DEFAULT_LISTEN: &str = "localhost:16991";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: String,
    pub grid: GridConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            grid: GridConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    pub obstacles: Vec<Coordinate>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            obstacles: Vec::new(),
        }
    }
}

impl GridConfig {
    pub fn build(&self) -> Result<Grid> {
        Grid::new(self.width, self.height, self.obstacles.iter().copied())
    }
}

impl From<&Grid> for GridConfig {
    fn from(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            obstacles: grid.obstacles(),
        }
    }
}
