//! Rover state and the commands that drive it.

use crate::error::SimulationError;
use crate::plateau::{Direction, Plateau};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and heading of a rover.
///
/// Displays as `"<x> <y> <heading>"`, the format used in simulation reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    /// Grid cell the rover currently occupies.
    pub position: IVec2,

    /// Direction the rover currently faces.
    pub heading: Direction,
}

impl RoverState {
    /// Creates a state at `(x, y)` facing `heading`.
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// Operations a rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Rotate 90 degrees counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    TurnRight,
    /// Advance one cell along the current heading (`M`).
    Move,
}

impl RoverOp {
    /// Maps a command character to its operation. Matching is case-sensitive.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(RoverOp::TurnLeft),
            'R' => Some(RoverOp::TurnRight),
            'M' => Some(RoverOp::Move),
            _ => None,
        }
    }
}

impl TryFrom<char> for RoverOp {
    type Error = SimulationError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(SimulationError::InvalidInstruction(symbol))
    }
}

/// A rover bound to the plateau it explores.
///
/// The plateau is borrowed read-only, so every rover of a run can share it.
#[derive(Clone, Debug)]
pub struct Rover<'a> {
    state: RoverState,
    plateau: &'a Plateau,
}

impl<'a> Rover<'a> {
    /// Places a rover in `state` on `plateau`.
    pub fn new(state: RoverState, plateau: &'a Plateau) -> Self {
        Self { state, plateau }
    }

    /// Current position and heading.
    pub fn state(&self) -> RoverState {
        self.state
    }

    /// The plateau this rover is bound to.
    pub fn plateau(&self) -> &Plateau {
        self.plateau
    }

    /// Turns 90 degrees counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.state.heading = self.state.heading.previous();
    }

    /// Turns 90 degrees clockwise.
    pub fn rotate_right(&mut self) {
        self.state.heading = self.state.heading.next();
    }

    /// Steps one cell forward, or stays put if the step would leave the plateau.
    ///
    /// Returns whether the rover actually moved.
    pub fn move_forward(&mut self) -> bool {
        let heading = self.state.heading;
        if !self.plateau.can_advance(self.state.position, heading) {
            tracing::trace!(state = %self.state, "move blocked at plateau edge");
            return false;
        }
        self.state.position += heading.offset();
        true
    }

    /// Performs a single operation.
    pub fn apply(&mut self, op: RoverOp) {
        match op {
            RoverOp::TurnLeft => self.rotate_left(),
            RoverOp::TurnRight => self.rotate_right(),
            RoverOp::Move => {
                self.move_forward();
            }
        }
    }

    /// Applies each command character of `instructions` in order.
    ///
    /// Stops at the first unknown character with
    /// [`SimulationError::InvalidInstruction`]. Commands before it have
    /// already taken effect.
    pub fn execute_instructions(&mut self, instructions: &str) -> Result<(), SimulationError> {
        for symbol in instructions.chars() {
            let op = RoverOp::try_from(symbol)?;
            self.apply(op);
            tracing::trace!(?op, state = %self.state, "applied");
        }
        Ok(())
    }

    /// Current state formatted as `"<x> <y> <heading>"`.
    pub fn report(&self) -> String {
        self.state.to_string()
    }
}
