//! 3x3x3 cube model: topology, coordinate resolver, move engine, validator,
//! and move notation.
//!
//! The cube is stored as six 3x3 grids of [`Piece`]s. Each face has its own
//! local axes, and the [`Topology`] records how those axes line up across
//! every border. All movement between faces goes through the resolver.

#[macro_use]
extern crate lazy_static;

mod cube;
mod face;
mod moves;
pub mod notation;
mod piece;
mod resolver;
mod topology;
mod validate;

#[cfg(test)]
mod tests;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::cube::{CubeState, FaceGrid};
    pub use crate::face::{Direction, Face, FaceColor, Rotation, TwistDirection};
    pub use crate::moves::{FaceTurn, Slice, Step, Turn, Twist};
    pub use crate::notation::{FaceRef, ScriptError, ScriptMove};
    pub use crate::piece::{Cell, FACE_CELLS, PIECE_COUNT, Piece, PieceKind, SIDE_LEN};
    pub use crate::resolver::Cursor;
    pub use crate::topology::{Edge, FaceLinks, TOPOLOGY, Topology};
    pub use crate::validate::ValidationError;
}
