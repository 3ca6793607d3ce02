use std::fmt;

use itertools::Itertools;

use crate::{Cell, Direction, Face, FaceColor, Piece, SIDE_LEN, TOPOLOGY, Topology};

/// Contents of one face, indexed `[col][row]`.
pub type FaceGrid = [[Piece; SIDE_LEN as usize]; SIDE_LEN as usize];

/// Which piece sits in each of the 54 cells.
///
/// Moves permute pieces between cells but never create, destroy, or alter
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    grids: [FaceGrid; Face::COUNT],
}
impl Default for CubeState {
    fn default() -> Self {
        Self::new_solved()
    }
}
impl CubeState {
    /// Constructs a solved cube, with every piece in its home cell.
    pub fn new_solved() -> Self {
        let grids = Face::ALL.map(|face| {
            std::array::from_fn(|col| {
                std::array::from_fn(|row| Piece::new(face, col as u8 * SIDE_LEN + row as u8))
            })
        });
        Self { grids }
    }

    /// Returns the cube to the solved state.
    pub fn reset(&mut self) {
        *self = Self::new_solved();
    }

    /// Returns the adjacency graph that this cube's moves follow.
    pub fn topology(&self) -> &'static Topology {
        &TOPOLOGY
    }

    /// Returns the contents of a face.
    pub fn face_grid(&self, face: Face) -> &FaceGrid {
        &self.grids[face.index()]
    }

    /// Returns the piece in a cell.
    pub fn piece_at(&self, cell: Cell) -> Piece {
        self.grids[cell.face.index()][cell.col as usize][cell.row as usize]
    }
    pub(crate) fn set_piece(&mut self, cell: Cell, piece: Piece) {
        self.grids[cell.face.index()][cell.col as usize][cell.row as usize] = piece;
    }

    /// Returns the color of the sticker in a cell.
    pub fn color_at(&self, cell: Cell) -> FaceColor {
        self.piece_at(cell).face_color()
    }

    /// Returns the piece adjacent to `cell` in `direction`, which may be on
    /// another face.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Piece {
        self.piece_at(self.topology().step(cell, direction))
    }

    /// Returns the cell currently holding `piece`.
    ///
    /// Scans all 54 cells. Returns `None` only if the state has been
    /// corrupted, which moves never do.
    pub fn locate(&self, piece: Piece) -> Option<Cell> {
        Cell::all().find(|&cell| self.piece_at(cell) == piece)
    }

    /// Returns whether every piece is in its home cell.
    pub fn is_solved(&self) -> bool {
        Cell::all().all(|cell| self.piece_at(cell).home() == cell)
    }

    /// Returns whether every face shows a single color, which may be true
    /// even if centers have been moved by whole-cube rotations.
    pub fn is_color_solved(&self) -> bool {
        Face::iter().all(|face| Cell::all_on(face).map(|c| self.piece_at(c).color).all_equal())
    }

    /// Returns the row of pieces at `row` on `face`, from left to right.
    fn row(&self, face: Face, row: u8) -> impl Iterator<Item = Piece> + '_ {
        (0..SIDE_LEN).map(move |col| self.piece_at(Cell::new(face, col, row)))
    }
}

/// Prints the unfolded cube as a net of color letters.
///
/// ```text
///     RRR
///     RRR
///     RRR
/// WWW GGG YYY BBB
/// ...
/// ```
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gap = " ".repeat(SIDE_LEN as usize + 1);
        let letters = |face, row| {
            self.row(face, row)
                .map(|piece| piece.face_color().letter())
                .collect::<String>()
        };

        for row in 0..SIDE_LEN {
            writeln!(f, "{gap}{}", letters(Face::U, row))?;
        }
        for row in 0..SIDE_LEN {
            let line = [Face::L, Face::F, Face::R, Face::B]
                .into_iter()
                .map(|face| letters(face, row))
                .join(" ");
            writeln!(f, "{line}")?;
        }
        for row in 0..SIDE_LEN {
            writeln!(f, "{gap}{}", letters(Face::D, row))?;
        }
        Ok(())
    }
}
