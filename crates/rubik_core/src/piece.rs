use std::fmt;

use crate::{Face, FaceColor};

/// Number of cells along each side of a face.
pub const SIDE_LEN: u8 = 3;
/// Number of cells on each face.
pub const FACE_CELLS: usize = 9;
/// Total number of stickers on the cube.
pub const PIECE_COUNT: usize = Face::COUNT * FACE_CELLS;

/// Kind of cubie that a sticker belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum PieceKind {
    Center,
    Edge,
    Corner,
}
impl PieceKind {
    /// Returns the kind of sticker that lives at `(col, row)` of any face.
    pub fn at(col: u8, row: u8) -> Self {
        let col_border = col != 1;
        let row_border = row != 1;
        match (col_border, row_border) {
            (false, false) => PieceKind::Center,
            (true, true) => PieceKind::Corner,
            _ => PieceKind::Edge,
        }
    }
}

/// Permanent identity of a sticker.
///
/// Assigned when the cube is reset and never changed afterwards; moves only
/// change where a piece is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece {
    /// Face the piece started on, which is also its color.
    pub color: Face,
    /// Slot the piece started in, `3 * col + row`.
    pub slot: u8,
}
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.slot)
    }
}
impl Piece {
    /// Constructs a piece identity.
    pub const fn new(color: Face, slot: u8) -> Self {
        Self { color, slot }
    }

    /// Returns the cell where the piece sits on a solved cube.
    pub fn home(self) -> Cell {
        Cell::new(self.color, self.slot / SIDE_LEN, self.slot % SIDE_LEN)
    }
    /// Returns what kind of cubie the piece belongs to.
    pub fn kind(self) -> PieceKind {
        let home = self.home();
        PieceKind::at(home.col, home.row)
    }
    /// Returns the display color of the piece.
    pub fn face_color(self) -> FaceColor {
        self.color.color()
    }

    /// Returns an iterator over all 54 piece identities.
    pub fn all() -> impl Iterator<Item = Piece> {
        Face::iter().flat_map(|color| (0..FACE_CELLS as u8).map(move |slot| Piece::new(color, slot)))
    }
}

/// Location of a cell on the cube: face, column, and row.
///
/// Also used as a transient "selection index" pointing at one sticker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Face containing the cell.
    pub face: Face,
    /// Column, from 0 (left) to 2 (right).
    pub col: u8,
    /// Row, from 0 (top) to 2 (bottom).
    pub row: u8,
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{},{}", self.face, self.col, self.row)
    }
}
impl Cell {
    /// Constructs a cell.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `col` or `row` is out of range.
    pub const fn new(face: Face, col: u8, row: u8) -> Self {
        debug_assert!(col < SIDE_LEN && row < SIDE_LEN);
        Self { face, col, row }
    }
    /// Returns the center cell of a face.
    pub const fn center(face: Face) -> Self {
        Self::new(face, 1, 1)
    }

    /// Returns the slot number of the cell within its face, `3 * col + row`.
    pub fn slot(self) -> u8 {
        self.col * SIDE_LEN + self.row
    }
    /// Returns what kind of cubie occupies this cell.
    pub fn kind(self) -> PieceKind {
        PieceKind::at(self.col, self.row)
    }

    /// Returns an iterator over all cells of a face, in slot order.
    pub fn all_on(face: Face) -> impl Iterator<Item = Cell> {
        (0..SIDE_LEN).flat_map(move |col| (0..SIDE_LEN).map(move |row| Cell::new(face, col, row)))
    }
    /// Returns an iterator over all 54 cells.
    pub fn all() -> impl Iterator<Item = Cell> {
        Face::iter().flat_map(Cell::all_on)
    }
}
