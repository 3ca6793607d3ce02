//! Layer-by-layer solver for the 3x3x3 cube.
//!
//! The solver is a fixed pipeline of phases. The first two layers are seated
//! one piece at a time from [case tables](tables), all evaluated by the same
//! [dispatch routine](TablePhase::run). The cube is then turned over and the
//! [last layer](last_layer) is solved on the front face by reading the grid
//! after every move.
//!
//! [`solve()`] runs the pipeline silently and then replays it through the
//! simulation's animator.

pub mod case;
mod error;
pub mod last_layer;
mod solve;
pub mod tables;

#[cfg(test)]
mod tests;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::case::{Case, TablePhase};
    pub use crate::error::SolveError;
    pub use crate::solve::{PhaseStats, SolveStats, solve};
    pub use crate::tables::TABLE_PHASES;
}
