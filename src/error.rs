use crate::plateau::Plateau;
use thiserror::Error;

/// Everything that can abort a simulation run.
///
/// The first error encountered stops the whole run; no partial report is
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// No non-blank line was found.
    #[error("Input must contain plateau dimensions")]
    MissingPlateau,

    /// A rover position line has no matching instruction line.
    #[error("Each rover must have position and instruction lines")]
    MalformedRoverBlock,

    /// A command character outside `L`, `R`, `M`.
    #[error("Invalid instruction: {0}")]
    InvalidInstruction(char),

    /// The plateau line is not two integers.
    #[error("Invalid plateau dimensions: `{line}` (expected `<width> <height>`)")]
    InvalidPlateau {
        /// The offending line, trimmed.
        line: String,
    },

    /// A rover position line is not `<x> <y> <heading>`.
    #[error("Invalid rover position: `{line}` (expected `<x> <y> <heading>`)")]
    InvalidPosition {
        /// The offending line, trimmed.
        line: String,
    },

    /// The heading token is not one of `N`, `E`, `S`, `W`.
    #[error("Invalid heading: {0}")]
    InvalidHeading(String),

    /// The start cell lies outside the plateau (only with start validation enabled).
    #[error("Rover start ({x}, {y}) lies outside plateau {plateau}")]
    StartOutOfBounds { x: i32, y: i32, plateau: Plateau },

    /// An instruction line exceeds the configured limit.
    #[error("Instruction line has {len} commands, limit is {limit}")]
    InstructionLimit { limit: usize, len: usize },
}
