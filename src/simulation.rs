//! Parses a mission plan and replays it rover by rover.
//!
//! The entry point is [`run_simulation`]. For finer control, parse once with
//! [`parse_mission`] and call [`Mission::run`] with a [`SimulationConfig`].

use crate::error::SimulationError;
use crate::plateau::{Direction, Plateau};
use crate::rover::{Rover, RoverState};

/// Configuration for a simulation run.
///
/// The default is permissive: starts outside the plateau are accepted and
/// instruction lines are unbounded.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfig {
    /// Reject rovers whose start cell lies outside the plateau.
    pub validate_start: bool,
    /// Maximum number of commands allowed on a single instruction line.
    pub max_instructions: Option<usize>,
}

impl SimulationConfig {
    /// Creates the default (permissive) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables rejection of starts outside the plateau.
    pub fn with_validate_start(mut self, validate: bool) -> Self {
        self.validate_start = validate;
        self
    }

    /// Caps the number of commands on each instruction line.
    pub fn with_max_instructions(mut self, limit: usize) -> Self {
        self.max_instructions = Some(limit);
        self
    }
}

/// One rover block: the raw start line and the commands the rover receives.
///
/// The start line is only interpreted when the rover's turn comes, so errors
/// surface in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverPlan {
    /// Raw `<x> <y> <heading>` line, trimmed.
    pub position: String,
    /// Raw command string; validated character by character while replaying.
    pub instructions: String,
}

impl RoverPlan {
    /// Resolves the start line into a [`RoverState`].
    pub fn start(&self) -> Result<RoverState, SimulationError> {
        parse_start(&self.position)
    }
}

/// A parsed input: the plateau and the rover blocks in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mission {
    pub plateau: Plateau,
    pub rovers: Vec<RoverPlan>,
}

impl Mission {
    /// Replays every rover in order and returns their final states.
    ///
    /// Each rover's start line is resolved at the beginning of its turn.
    /// Rovers are independent; they only share the plateau bounds. The first
    /// error aborts the run.
    pub fn run(&self, config: &SimulationConfig) -> Result<Vec<RoverState>, SimulationError> {
        let mut finals = Vec::with_capacity(self.rovers.len());

        for (index, plan) in self.rovers.iter().enumerate() {
            let start = plan.start()?;
            if config.validate_start && !self.plateau.contains(start.position) {
                return Err(SimulationError::StartOutOfBounds {
                    x: start.position.x,
                    y: start.position.y,
                    plateau: self.plateau,
                });
            }
            if let Some(limit) = config.max_instructions {
                let len = plan.instructions.chars().count();
                if len > limit {
                    return Err(SimulationError::InstructionLimit { limit, len });
                }
            }

            let mut rover = Rover::new(start, &self.plateau);
            rover.execute_instructions(&plan.instructions)?;
            tracing::debug!(rover = index, %start, end = %rover.state(), "rover finished");
            finals.push(rover.state());
        }

        Ok(finals)
    }
}

/// Splits the textual plan into a [`Mission`].
///
/// Lines are trimmed and blank lines dropped. The first line holds the plateau
/// dimensions and is parsed here; the rest must pair up as a start line
/// followed by an instruction line, and are kept as raw text until replay.
pub fn parse_mission(input: &str) -> Result<Mission, SimulationError> {
    let lines: Vec<&str> = input
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (plateau_line, blocks) = lines
        .split_first()
        .ok_or(SimulationError::MissingPlateau)?;
    if blocks.len() % 2 != 0 {
        return Err(SimulationError::MalformedRoverBlock);
    }

    let plateau = parse_plateau(plateau_line)?;
    let rovers: Vec<RoverPlan> = blocks
        .chunks_exact(2)
        .map(|pair| RoverPlan {
            position: pair[0].to_string(),
            instructions: pair[1].to_string(),
        })
        .collect();

    tracing::debug!(%plateau, rovers = rovers.len(), "parsed mission");
    Ok(Mission { plateau, rovers })
}

fn parse_plateau(line: &str) -> Result<Plateau, SimulationError> {
    let invalid = || SimulationError::InvalidPlateau {
        line: line.to_string(),
    };
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [width, height] => Ok(Plateau::new(
            width.parse().map_err(|_| invalid())?,
            height.parse().map_err(|_| invalid())?,
        )),
        _ => Err(invalid()),
    }
}

fn parse_start(line: &str) -> Result<RoverState, SimulationError> {
    let invalid = || SimulationError::InvalidPosition {
        line: line.to_string(),
    };
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [x, y, heading] => {
            let x = x.parse().map_err(|_| invalid())?;
            let y = y.parse().map_err(|_| invalid())?;
            let heading: Direction = heading.parse()?;
            Ok(RoverState::new(x, y, heading))
        }
        _ => Err(invalid()),
    }
}

/// Runs a full simulation with a custom configuration and returns the report.
pub fn run_simulation_with(
    input: &str,
    config: &SimulationConfig,
) -> Result<String, SimulationError> {
    let mission = parse_mission(input)?;
    let finals = mission.run(config)?;
    Ok(finals
        .iter()
        .map(RoverState::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Runs a full simulation with the default configuration.
///
/// Returns one `"<x> <y> <heading>"` line per rover, in input order, joined
/// with `\n`.
pub fn run_simulation(input: &str) -> Result<String, SimulationError> {
    run_simulation_with(input, &SimulationConfig::default())
}
