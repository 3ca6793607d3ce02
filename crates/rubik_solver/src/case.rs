//! Case tables and the dispatch routine shared by the first two layers.

use rubik_core::notation::parse_script;
use rubik_core::{Cell, Face, Piece};
use rubik_view::CubeSimulation;
use smallvec::SmallVec;

use crate::SolveError;

/// Maximum number of continuations followed by one dispatch.
pub const MAX_CONTINUATIONS: usize = 4;

/// Set of faces, stored as a bitmask so that it can be built in a `const`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceSet(u8);
impl FaceSet {
    /// Constructs a set containing `faces`.
    pub const fn of(faces: &[Face]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < faces.len() {
            bits |= 1 << faces[i] as u8;
            i += 1;
        }
        Self(bits)
    }
    /// Returns whether `face` is in the set.
    pub fn contains(self, face: Face) -> bool {
        self.0 & (1 << face as u8) != 0
    }
    /// Returns an iterator over the faces in the set.
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::iter().filter(move |&f| self.contains(f))
    }
}

/// Cell assumed after a case's moves have run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Then {
    /// Cell on the face the piece was found on.
    Same {
        /// Column.
        col: u8,
        /// Row.
        row: u8,
    },
    /// Cell on another face.
    Cell(Cell),
}
impl Then {
    /// Returns the assumed cell, given the face of the cell that matched.
    pub fn resolve(self, current: Face) -> Cell {
        match self {
            Then::Same { col, row } => Cell::new(current, col, row),
            Then::Cell(cell) => cell,
        }
    }
}

/// One row of a case table.
///
/// A case matches a cell if the cell's face is in `faces` and its column and
/// row match wherever they are given. In `moves`, `*` stands for the face of
/// the matched cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Case {
    /// Faces on which the case applies.
    pub faces: FaceSet,
    /// Column, or `None` for any column.
    pub col: Option<u8>,
    /// Row, or `None` for any row.
    pub row: Option<u8>,
    /// Move script. An empty script marks a case that cannot occur on a
    /// reachable cube.
    pub moves: &'static str,
    /// Cell to match again after the moves, without locating the piece.
    pub then: Option<Then>,
}
impl Case {
    /// Case for one cell.
    pub const fn cell(face: Face, col: u8, row: u8, moves: &'static str) -> Self {
        Self::shared(&[face], col, row, moves)
    }
    /// Case for the same cell on each of several faces.
    pub const fn shared(faces: &[Face], col: u8, row: u8, moves: &'static str) -> Self {
        Self {
            faces: FaceSet::of(faces),
            col: Some(col),
            row: Some(row),
            moves,
            then: None,
        }
    }
    /// Case for any cell on a face.
    pub const fn face(face: Face, moves: &'static str) -> Self {
        Self {
            faces: FaceSet::of(&[face]),
            col: None,
            row: None,
            moves,
            then: None,
        }
    }
    /// Case that cannot occur on a reachable cube. It does nothing.
    pub const fn impossible(face: Face, col: u8, row: u8) -> Self {
        Self::cell(face, col, row, "")
    }

    /// Continues at another cell on the same face.
    pub const fn then_same(mut self, col: u8, row: u8) -> Self {
        self.then = Some(Then::Same { col, row });
        self
    }
    /// Continues at a cell on another face.
    pub const fn then_at(mut self, face: Face, col: u8, row: u8) -> Self {
        self.then = Some(Then::Cell(Cell::new(face, col, row)));
        self
    }

    /// Returns whether the case applies to `cell`.
    pub fn matches(&self, cell: Cell) -> bool {
        self.faces.contains(cell.face)
            && self.col.is_none_or(|c| c == cell.col)
            && self.row.is_none_or(|r| r == cell.row)
    }
}

/// Solver phase that seats one piece using a case table.
#[derive(Debug, Copy, Clone)]
pub struct TablePhase {
    /// Name used in diagnostics, such as `top 1`.
    pub label: &'static str,
    /// Piece to bring home.
    pub piece: Piece,
    /// Cases, tried in order.
    pub cases: &'static [Case],
}
impl TablePhase {
    /// Returns the cell where the piece belongs.
    pub fn target(&self) -> Cell {
        self.piece.home()
    }

    /// Returns the cases that run, in order, for a piece found at `cell`.
    ///
    /// The first matching case runs. If it names a continuation, matching
    /// starts over from the assumed cell, until a case without one runs or the
    /// assumed cell is the target.
    pub fn resolve(&self, mut cell: Cell) -> Result<SmallVec<[&'static Case; 4]>, SolveError> {
        let target = self.target();
        let mut path = SmallVec::new();
        if cell == target {
            return Ok(path);
        }
        for _ in 0..=MAX_CONTINUATIONS {
            let case = self
                .cases
                .iter()
                .find(|case| case.matches(cell))
                .ok_or(SolveError::UnhandledCase {
                    phase: self.label,
                    cell,
                })?;
            path.push(case);
            match case.then {
                Some(then) => {
                    cell = then.resolve(cell.face);
                    if cell == target {
                        return Ok(path);
                    }
                }
                None => return Ok(path),
            }
        }
        Err(SolveError::ContinuationLimit {
            phase: self.label,
            cell,
        })
    }

    /// Locates the piece and runs the cases for its cell as one group.
    ///
    /// Returns the number of moves made.
    pub fn run(&self, sim: &mut CubeSimulation) -> Result<usize, SolveError> {
        let cell = sim
            .state()
            .locate(self.piece)
            .ok_or(SolveError::PieceNotFound(self.piece))?;
        let path = self.resolve(cell)?;
        if path.is_empty() {
            log::trace!("{}: {} already home", self.label, self.piece);
            return Ok(0);
        }

        let before = sim.log().len();
        sim.begin_group();
        let result = Self::run_path(sim, &path, cell);
        sim.end_group();
        result?;

        let moves = sim.log().len() - before;
        log::debug!("{}: moved {} from {cell} in {moves} moves", self.label, self.piece);
        Ok(moves)
    }

    fn run_path(sim: &mut CubeSimulation, path: &[&Case], start: Cell) -> Result<(), SolveError> {
        let mut current = start;
        for case in path {
            let script = parse_script(case.moves).map_err(SolveError::from)?;
            sim.run_script(&script, current.face);
            if let Some(then) = case.then {
                current = then.resolve(current.face);
            }
        }
        Ok(())
    }
}
