use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the grid. Bounds are enforced by [`crate::grid::Grid`], not here.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> u32 {
        self.x
    }

    pub const fn y(&self) -> u32 {
        self.y
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Coordinate::new(2, 3), Coordinate::from((2, 3)));
        assert_ne!(Coordinate::new(2, 3), Coordinate::new(3, 2));
        assert_eq!(Coordinate::default(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_display_and_json_shape() {
        let c = Coordinate::new(4, 7);
        assert_eq!(c.to_string(), "4:7");
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"x":4,"y":7}"#);
        let back: Coordinate = serde_json::from_str(r#"{"x":4,"y":7}"#).unwrap();
        assert_eq!(back, c);
    }
}
