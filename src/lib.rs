//! Mars rover navigation over a wraparound grid.
//!
//! A rover starts at `0:0` facing North and consumes `R`, `L` and `M`
//! commands. Stepping off an edge re-enters from the opposite side, and a
//! move onto an obstacle is refused and reported with an `O:` prefix.
//!
//! ```
//! use rover_lib::{directions::coordinate::Coordinate, execute, grid::Grid};
//!
//! assert_eq!(execute("MMRMMLM", None), "2:3:N");
//!
//! let grid = Grid::with_obstacles([Coordinate::new(0, 3)]).unwrap();
//! assert_eq!(execute("MMMM", Some(&grid)), "O:0:2:N");
//! ```

pub mod command;
pub mod config;
pub mod directions;
pub mod error;
pub mod grid;
pub mod report;
pub mod rover;
pub mod server;

pub use crate::error::{Error, Result};

use crate::{grid::Grid, rover::Rover};

/// Runs `commands` on a fresh rover and renders its resting state as
/// `[O:]x:y:H`. Without a grid, the default 10x10 grid with no obstacles is used.
pub fn execute(commands: &str, grid: Option<&Grid>) -> String {
    let grid = grid.cloned().unwrap_or_default();
    Rover::on(grid).execute(commands).to_string()
}
