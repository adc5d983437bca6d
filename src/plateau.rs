//! The grid rovers move on, and the four headings they can face.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// A rectangular plateau spanning `(0, 0)` to `(width, height)` inclusive.
///
/// Dimensions are not range-checked: a zero or negative size is accepted and
/// simply blocks movement at that edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plateau {
    pub width: i32,
    pub height: i32,
}

impl Plateau {
    /// Creates a plateau with the given upper-right corner.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The upper-right corner of the grid.
    pub fn upper_right(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Whether `cell` lies within `[0, width] × [0, height]`.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmple(self.upper_right()).all()
    }

    /// Whether a rover standing on `from` may take one step towards `heading`.
    ///
    /// Only the axis being moved along is checked: the upper edges block when
    /// the coordinate has already reached the dimension, the lower edges when
    /// it has reached zero.
    pub fn can_advance(&self, from: IVec2, heading: Direction) -> bool {
        match heading {
            Direction::North => from.y < self.height,
            Direction::East => from.x < self.width,
            Direction::South => from.y > 0,
            Direction::West => from.x > 0,
        }
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A cardinal heading, cyclically ordered clockwise `N → E → S → W → N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The clockwise neighbour (a right turn).
    pub fn next(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The counter-clockwise neighbour (a left turn).
    pub fn previous(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The heading facing the other way.
    pub fn opposite(self) -> Self {
        self.next().next()
    }

    /// Unit step on the grid when moving forward with this heading.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }

    /// Single-letter code used in input and reports.
    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Direction {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::North),
            "E" => Ok(Direction::East),
            "S" => Ok(Direction::South),
            "W" => Ok(Direction::West),
            other => Err(SimulationError::InvalidHeading(other.to_string())),
        }
    }
}
