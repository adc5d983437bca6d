//! # plateau-rover
//!
//! A small simulator for robotic rovers exploring a rectangular plateau.
//!
//! The input is a plain-text plan: the plateau's upper-right corner, then one
//! block of two lines per rover (start position and heading, followed by a
//! string of `L`/`R`/`M` commands). Each rover is replayed independently
//! against the shared, read-only [`Plateau`] and its final position is
//! reported as `"x y H"`.
//!
//! ```
//! let report = plateau_rover::run_simulation("5 5\n1 2 N\nLMLMLMLMM").unwrap();
//! assert_eq!(report, "1 3 N");
//! ```

pub mod error;
pub mod plateau;
pub mod rover;
pub mod simulation;

pub use error::*;
pub use plateau::*;
pub use rover::*;
pub use simulation::*;
