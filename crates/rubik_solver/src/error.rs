use rubik_core::{Cell, Piece, ScriptError, ValidationError};

/// Error that stops the solver.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A piece that should already be home is somewhere else.
    #[error("{label}: expected {piece} at {expected} but found it at {actual}")]
    Misplaced {
        label: &'static str,
        piece: Piece,
        expected: Cell,
        actual: Cell,
    },
    /// No case in the table matches the cell.
    #[error("{phase}: no case for piece at {cell}")]
    UnhandledCase { phase: &'static str, cell: Cell },
    /// Continuations did not settle.
    #[error("{phase}: too many continuations, last at {cell}")]
    ContinuationLimit { phase: &'static str, cell: Cell },
    /// The piece is not on the cube.
    #[error("piece {0} is missing")]
    PieceNotFound(Piece),
    /// A last-layer step did not reach its goal.
    #[error("{phase}: {detail}")]
    LastLayer { phase: &'static str, detail: String },
    #[error("bad move script: {0}")]
    Script(#[from] ScriptError),
    #[error("cube is inconsistent: {0}")]
    Invalid(#[from] ValidationError),
}
