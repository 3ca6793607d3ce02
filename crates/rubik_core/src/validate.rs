//! Consistency checks for a cube state.
//!
//! A state is consistent if it could have been reached from the solved cube
//! by physical moves, as far as can be told by looking at which stickers sit
//! next to each other. A single edge flipped in place still looks consistent.
//! Corners and centers are also checked for handedness, so a corner twisted in
//! place or a mirrored set of centers is caught.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::{Cell, CubeState, Direction, Face, Piece, PieceKind, SIDE_LEN, TOPOLOGY};

lazy_static! {
    /// For each piece, the pieces that share its cubie on a solved cube.
    static ref COLOCATION: HashMap<Piece, Partners> = {
        let solved = CubeState::new_solved();
        Cell::all()
            .map(|cell| (solved.piece_at(cell), partners(&solved, cell)))
            .collect()
    };

    /// Faces around each corner of the cube, in the order given by
    /// [`corner_directions()`], starting from each of the three faces.
    static ref CORNER_FACES: HashSet<[Face; 3]> = Cell::all()
        .filter(|cell| cell.kind() == PieceKind::Corner)
        .map(corner_faces)
        .collect();
}

/// Pieces that share a cubie with another piece. Corner partners are listed
/// in the order given by [`corner_directions()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Partners {
    None,
    Edge(Piece),
    Corner([Piece; 2]),
}

fn horizontal(cell: Cell) -> Direction {
    if cell.col == 0 {
        Direction::Left
    } else {
        Direction::Right
    }
}
fn vertical(cell: Cell) -> Direction {
    if cell.row == 0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Returns the directions from a corner cell to the other two stickers of its
/// cubie, going the same way around the corner on every face.
///
/// Rotating a face a quarter turn moves the top left corner to the top right
/// and turns left into up, so the order flips between the two diagonals.
fn corner_directions(cell: Cell) -> [Direction; 2] {
    if cell.col == cell.row {
        [horizontal(cell), vertical(cell)]
    } else {
        [vertical(cell), horizontal(cell)]
    }
}

/// Returns the faces that meet at a corner cell, starting with its own.
fn corner_faces(cell: Cell) -> [Face; 3] {
    let [a, b] = corner_directions(cell);
    [cell.face, TOPOLOGY.step(cell, a).face, TOPOLOGY.step(cell, b).face]
}

fn partners(cube: &CubeState, cell: Cell) -> Partners {
    let max = SIDE_LEN - 1;
    match cell.kind() {
        PieceKind::Center => Partners::None,
        PieceKind::Edge => {
            let direction = if cell.col == 0 || cell.col == max {
                horizontal(cell)
            } else {
                vertical(cell)
            };
            Partners::Edge(cube.neighbor(cell, direction))
        }
        PieceKind::Corner => {
            let [a, b] = corner_directions(cell);
            Partners::Corner([cube.neighbor(cell, a), cube.neighbor(cell, b)])
        }
    }
}

/// Inconsistency found in a cube state.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A piece appears in more than one cell.
    #[error("piece {piece} at {cell} also appears elsewhere")]
    DuplicatePiece { cell: Cell, piece: Piece },
    /// A center, edge, or corner piece sits in a cell of a different kind.
    #[error("{piece} at {cell} is a {expected} piece in a {actual} cell")]
    WrongKind {
        cell: Cell,
        piece: Piece,
        expected: PieceKind,
        actual: PieceKind,
    },
    /// An edge piece is next to a piece from a different edge cubie.
    #[error("edge {piece} at {cell} is next to {partner}")]
    BadEdgePartner {
        cell: Cell,
        piece: Piece,
        partner: Piece,
    },
    /// A corner piece is next to pieces from a different corner cubie, or
    /// next to the right pieces in the wrong order.
    #[error("corner {piece} at {cell} is next to {} and {}", partners[0], partners[1])]
    BadCornerPartners {
        cell: Cell,
        piece: Piece,
        partners: [Piece; 2],
    },
    /// Two opposite faces have centers that are not opposite colors.
    #[error("center {piece} at {cell} is opposite {opposite}")]
    BadOppositeCenters {
        cell: Cell,
        piece: Piece,
        opposite: Piece,
    },
    /// The centers are arranged as a mirror image of the solved cube.
    #[error("centers {} {} {} around {cell} are mirrored", pieces[0], pieces[1], pieces[2])]
    MirroredCenters { cell: Cell, pieces: [Piece; 3] },
}
impl ValidationError {
    /// Returns the cell where the inconsistency was found.
    pub fn cell(&self) -> Cell {
        match self {
            Self::DuplicatePiece { cell, .. }
            | Self::WrongKind { cell, .. }
            | Self::BadEdgePartner { cell, .. }
            | Self::BadCornerPartners { cell, .. }
            | Self::BadOppositeCenters { cell, .. }
            | Self::MirroredCenters { cell, .. } => *cell,
        }
    }
}

impl CubeState {
    /// Checks that the state is physically consistent, returning the first
    /// inconsistency found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let result = self.check_consistency();
        if let Err(e) = &result {
            log::warn!("invalid cube state: {e}");
        }
        result
    }

    /// Returns whether [`CubeState::validate()`] succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn check_consistency(&self) -> Result<(), ValidationError> {
        let mut duplicates = Cell::all().map(|cell| self.piece_at(cell)).duplicates();
        if let Some(piece) = duplicates.next() {
            let cell = Cell::all()
                .filter(|&cell| self.piece_at(cell) == piece)
                .nth(1)
                .unwrap_or(piece.home());
            return Err(ValidationError::DuplicatePiece { cell, piece });
        }

        for cell in Cell::all() {
            let piece = self.piece_at(cell);

            let (expected, actual) = (piece.kind(), cell.kind());
            if expected != actual {
                return Err(ValidationError::WrongKind {
                    cell,
                    piece,
                    expected,
                    actual,
                });
            }

            let Some(&expected) = COLOCATION.get(&piece) else {
                continue;
            };
            match partners(self, cell) {
                Partners::None => (),
                Partners::Edge(partner) => {
                    if expected != Partners::Edge(partner) {
                        return Err(ValidationError::BadEdgePartner {
                            cell,
                            piece,
                            partner,
                        });
                    }
                }
                Partners::Corner(partners) => {
                    if expected != Partners::Corner(partners) {
                        return Err(ValidationError::BadCornerPartners {
                            cell,
                            piece,
                            partners,
                        });
                    }
                }
            }
        }

        let topology = self.topology();
        for face in Face::iter() {
            let cell = Cell::center(face);
            let piece = self.piece_at(cell);
            let opposite = self.piece_at(Cell::center(topology.opposite(face)));
            if topology.opposite(piece.color) != opposite.color {
                return Err(ValidationError::BadOppositeCenters {
                    cell,
                    piece,
                    opposite,
                });
            }
        }

        // With opposites paired up, one corner decides the handedness.
        let corner = Cell::new(Face::F, 0, 0);
        let pieces = corner_faces(corner).map(|face| self.piece_at(Cell::center(face)));
        if !CORNER_FACES.contains(&pieces.map(|piece| piece.color)) {
            return Err(ValidationError::MirroredCenters {
                cell: corner,
                pieces,
            });
        }

        Ok(())
    }
}
