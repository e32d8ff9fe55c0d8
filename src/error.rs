//! Error types for the rover library.
//!
//! Navigation itself is total: unknown command characters are skipped and a
//! blocked move is reported through [`crate::grid::Obstruction`]. The variants
//! here cover building grids, parsing reports and loading configuration.

use thiserror::Error;

use crate::directions::coordinate::Coordinate;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("obstacle {obstacle} lies outside the {width}x{height} grid")]
    ObstacleOutOfBounds {
        obstacle: Coordinate,
        width: u32,
        height: u32,
    },

    #[error("position {position} lies outside the {width}x{height} grid")]
    PositionOutOfBounds {
        position: Coordinate,
        width: u32,
        height: u32,
    },

    #[error("position {position} is occupied by an obstacle")]
    PositionOnObstacle { position: Coordinate },

    #[error("unknown heading symbol {0:?}")]
    UnknownHeading(char),

    #[error("malformed report {0:?}")]
    MalformedReport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
