use crate::command::Command;
use crate::directions::{coordinate::Coordinate, direction::Direction};
use crate::error::{Error, Result};
use crate::grid::{Grid, Obstruction};
use crate::report::Report;

/// Rover driven by `R`/`L`/`M` command strings over a [`Grid`].
///
/// Starts at the origin facing North. The obstruction flag tracks the most
/// recent move command only: a blocked move sets it, a successful move clears
/// it, and rotations leave it alone.
#[derive(Debug, Clone)]
pub struct Rover {
    grid: Grid,
    position: Coordinate,
    heading: Direction,
    obstructed: bool,
}

impl Default for Rover {
    fn default() -> Self {
        Self::on(Grid::default())
    }
}

impl Rover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(grid: Grid) -> Self {
        Self {
            grid,
            position: Coordinate::ORIGIN,
            heading: Direction::North,
            obstructed: false,
        }
    }

    /// Picks up from a previously rendered report.
    pub fn resume(grid: Grid, report: Report) -> Result<Self> {
        if !grid.contains(report.position) {
            return Err(Error::PositionOutOfBounds {
                position: report.position,
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.is_obstacle(report.position) {
            return Err(Error::PositionOnObstacle {
                position: report.position,
            });
        }
        Ok(Self {
            grid,
            position: report.position,
            heading: report.heading,
            obstructed: report.obstructed,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn is_obstructed(&self) -> bool {
        self.obstructed
    }

    pub fn report(&self) -> Report {
        Report {
            position: self.position,
            heading: self.heading,
            obstructed: self.obstructed,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::RotateRight => self.heading = self.heading.right(),
            Command::RotateLeft => self.heading = self.heading.left(),
            Command::Move => {
                match self
                    .grid
                    .move_to_next_coordinate_from(self.position, self.heading)
                {
                    Ok(next) => {
                        self.position = next;
                        self.obstructed = false;
                    }
                    Err(Obstruction { at }) => {
                        tracing::debug!(
                            "move {} from {} blocked by obstacle at {}",
                            self.heading,
                            self.position,
                            at
                        );
                        self.obstructed = true;
                    }
                }
            }
        }
        tracing::trace!(
            "{} -> {}:{}",
            command.symbol(),
            self.position,
            self.heading
        );
    }

    /// Runs every recognized command in `commands` and reports where the
    /// rover came to rest. The obstruction flag starts cleared on each call.
    pub fn execute(&mut self, commands: &str) -> Report {
        self.obstructed = false;
        let mut applied = 0usize;
        for command in Command::parse(commands) {
            self.apply(command);
            applied += 1;
        }
        let report = self.report();
        tracing::debug!(applied, %report, "executed command string");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocked_at_0_3() -> Rover {
        Rover::on(Grid::with_obstacles([Coordinate::new(0, 3)]).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let rover = Rover::new();
        assert_eq!(rover.position(), Coordinate::ORIGIN);
        assert_eq!(rover.heading(), Direction::North);
        assert!(!rover.is_obstructed());
        assert_eq!(rover.report().to_string(), "0:0:N");
    }

    #[test]
    fn test_apply_single_commands() {
        let mut rover = Rover::new();
        rover.apply(Command::RotateRight);
        assert_eq!(rover.heading(), Direction::East);
        rover.apply(Command::Move);
        assert_eq!(rover.position(), Coordinate::new(1, 0));
        rover.apply(Command::RotateLeft);
        rover.apply(Command::RotateLeft);
        assert_eq!(rover.heading(), Direction::West);
        rover.apply(Command::Move);
        rover.apply(Command::Move);
        assert_eq!(rover.position(), Coordinate::new(9, 0));
    }

    #[test]
    fn test_stops_short_of_obstacle() {
        let mut rover = blocked_at_0_3();
        assert_eq!(rover.execute("MMMM").to_string(), "O:0:2:N");
        assert_eq!(rover.position(), Coordinate::new(0, 2));
    }

    #[test]
    fn test_successful_move_clears_obstruction() {
        let mut rover = blocked_at_0_3();
        assert_eq!(rover.execute("MMMRM").to_string(), "1:2:E");
    }

    #[test]
    fn test_rotation_keeps_obstruction() {
        let mut rover = blocked_at_0_3();
        assert_eq!(rover.execute("MMMR").to_string(), "O:0:2:E");
    }

    #[test]
    fn test_each_execute_starts_unobstructed() {
        let mut rover = blocked_at_0_3();
        assert!(rover.execute("MMM").obstructed);
        assert_eq!(rover.execute("R").to_string(), "0:2:E");
    }

    #[test]
    fn test_state_carries_across_executes() {
        let mut rover = Rover::new();
        rover.execute("MM");
        assert_eq!(rover.execute("RMMLM").to_string(), "2:3:N");
    }

    #[test]
    fn test_resume_from_report() {
        let grid = Grid::default();
        let rover = Rover::resume(grid.clone(), "O:4:5:W".parse().unwrap()).unwrap();
        assert_eq!(rover.position(), Coordinate::new(4, 5));
        assert_eq!(rover.heading(), Direction::West);
        assert!(rover.is_obstructed());

        assert!(matches!(
            Rover::resume(grid, "10:0:N".parse().unwrap()),
            Err(Error::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_resume_refuses_obstacle_cell() {
        let grid = Grid::with_obstacles([Coordinate::new(0, 3)]).unwrap();
        assert!(matches!(
            Rover::resume(grid.clone(), "0:3:N".parse().unwrap()),
            Err(Error::PositionOnObstacle { position }) if position == Coordinate::new(0, 3)
        ));
        assert!(Rover::resume(grid, "0:2:N".parse().unwrap()).is_ok());
    }
}
