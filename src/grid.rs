use std::collections::HashSet;

use itertools::Itertools;

use crate::directions::{coordinate::Coordinate, direction::Direction};
use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: u32 = 10;
pub const DEFAULT_HEIGHT: u32 = 10;

/// A step that would land on an obstacle. The mover keeps its coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstruction {
    pub at: Coordinate,
}

/// Toroidal grid with a fixed obstacle set.
///
/// Stepping past any edge re-enters from the opposite one. Dimensions and
/// obstacles are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    obstacles: HashSet<Coordinate>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            obstacles: HashSet::new(),
        }
    }
}

impl Grid {
    pub fn new(
        width: u32,
        height: u32,
        obstacles: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut grid = Self {
            width,
            height,
            obstacles: HashSet::new(),
        };
        for obstacle in obstacles {
            if !grid.contains(obstacle) {
                return Err(Error::ObstacleOutOfBounds {
                    obstacle,
                    width,
                    height,
                });
            }
            grid.obstacles.insert(obstacle);
        }
        Ok(grid)
    }

    /// Default-sized grid with the given obstacles.
    pub fn with_obstacles(obstacles: impl IntoIterator<Item = Coordinate>) -> Result<Self> {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, obstacles)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Obstacles in (x, y) order.
    pub fn obstacles(&self) -> Vec<Coordinate> {
        self.obstacles.iter().copied().sorted().collect()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    pub fn is_obstacle(&self, coordinate: Coordinate) -> bool {
        self.obstacles.contains(&coordinate)
    }

    /// One step from `current` towards `heading`, wrapping at the edges.
    ///
    /// An off-grid `current` is first wrapped back onto the grid.
    pub fn move_to_next_coordinate_from(
        &self,
        current: Coordinate,
        heading: Direction,
    ) -> std::result::Result<Coordinate, Obstruction> {
        let (x, y) = (current.x % self.width, current.y % self.height);
        let next = match heading {
            Direction::North => Coordinate::new(x, (y + 1) % self.height),
            Direction::East => Coordinate::new((x + 1) % self.width, y),
            Direction::South => Coordinate::new(x, y.checked_sub(1).unwrap_or(self.height - 1)),
            Direction::West => Coordinate::new(x.checked_sub(1).unwrap_or(self.width - 1), y),
        };

        if self.is_obstacle(next) {
            Err(Obstruction { at: next })
        } else {
            Ok(next)
        }
    }

    /// ASCII map with the top row at `y = height - 1`.
    ///
    /// `.` is a free cell, `#` an obstacle, and the rover is drawn as its
    /// heading symbol.
    pub fn render(&self, rover: Coordinate, heading: Direction) -> String {
        (0..self.height)
            .rev()
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let cell = Coordinate::new(x, y);
                        if cell == rover {
                            heading.symbol()
                        } else if self.is_obstacle(cell) {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}
