use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::directions::{coordinate::Coordinate, direction::Direction};
use crate::error::Error;

const OBSTRUCTED_PREFIX: &str = "O";

/// Resting state of a rover, rendered as `[O:]x:y:H`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "ReportBody")]
pub struct Report {
    pub position: Coordinate,
    pub heading: Direction,
    /// Set when the last move command was blocked.
    pub obstructed: bool,
}

#[derive(Serialize)]
struct ReportBody {
    report: String,
    x: u32,
    y: u32,
    heading: Direction,
    obstructed: bool,
}

impl From<Report> for ReportBody {
    fn from(report: Report) -> Self {
        Self {
            report: report.to_string(),
            x: report.position.x,
            y: report.position.y,
            heading: report.heading,
            obstructed: report.obstructed,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.obstructed {
            write!(f, "{OBSTRUCTED_PREFIX}:")?;
        }
        write!(f, "{}:{}", self.position, self.heading)
    }
}

/// Plain decimal digits only, so a parsed report renders back unchanged.
fn parse_component(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for Report {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedReport(s.to_string());

        let (obstructed, rest) = match s.split_once(':') {
            Some((OBSTRUCTED_PREFIX, rest)) => (true, rest),
            _ => (false, s),
        };

        let mut fields = rest.split(':');
        let (Some(x), Some(y), Some(heading), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };

        let x = parse_component(x).ok_or_else(malformed)?;
        let y = parse_component(y).ok_or_else(malformed)?;
        let mut symbol = heading.chars();
        let heading = match (symbol.next(), symbol.next()) {
            (Some(c), None) => Direction::try_from(c)?,
            _ => return Err(malformed()),
        };

        Ok(Self {
            position: Coordinate::new(x, y),
            heading,
            obstructed,
        })
    }
}
