use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Heading of the rover. Serialized as its single-letter symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

/// Headings in clockwise order, starting from North.
const CLOCKWISE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    pub const ALL: [Direction; 4] = CLOCKWISE;

    const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Quarter turn clockwise.
    #[must_use]
    pub const fn right(self) -> Self {
        CLOCKWISE[(self.index() + 1) % CLOCKWISE.len()]
    }

    /// Quarter turn counter-clockwise.
    #[must_use]
    pub const fn left(self) -> Self {
        CLOCKWISE[(self.index() + CLOCKWISE.len() - 1) % CLOCKWISE.len()]
    }

    pub const fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        CLOCKWISE.into_iter().find(|d| d.symbol() == symbol)
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Direction::from_symbol(symbol).ok_or(Error::UnknownHeading(symbol))
    }
}

impl From<Direction> for char {
    fn from(direction: Direction) -> Self {
        direction.symbol()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_cycles_clockwise() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::East.right(), Direction::South);
        assert_eq!(Direction::South.right(), Direction::West);
        assert_eq!(Direction::West.right(), Direction::North);
    }

    #[test]
    fn test_left_cycles_counter_clockwise() {
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.left(), Direction::South);
        assert_eq!(Direction::South.left(), Direction::East);
        assert_eq!(Direction::East.left(), Direction::North);
    }

    #[test]
    fn test_rotations_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.right().left(), d);
            assert_eq!(d.left().right(), d);
            assert_eq!(d.right().right().right().right(), d);
            assert_eq!(d.left().left().left().left(), d);
        }
    }

    #[test]
    fn test_symbol_lookup() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_symbol(d.symbol()), Some(d));
            assert_eq!(Direction::try_from(d.symbol()).unwrap(), d);
        }
        assert_eq!(Direction::from_symbol('n'), None);
        assert!(matches!(
            Direction::try_from('X'),
            Err(Error::UnknownHeading('X'))
        ));
    }

    #[test]
    fn test_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Direction::West).unwrap(), r#""W""#);
        let d: Direction = serde_json::from_str(r#""S""#).unwrap();
        assert_eq!(d, Direction::South);
        assert!(serde_json::from_str::<Direction>(r#""Q""#).is_err());
    }
}
