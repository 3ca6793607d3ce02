//! Coordinate resolver: moving between cells, possibly across face borders.
//!
//! This is the only place that knows how the local axes of neighboring faces
//! line up. Everything else (moves, validation, piece lookup by neighbor)
//! goes through these functions.

use crate::{Cell, Direction, Face, Rotation, SIDE_LEN, Topology};

const MAX: u8 = SIDE_LEN - 1;

impl Topology {
    /// Returns the cell adjacent to `cell` in `direction`.
    ///
    /// When the step leaves the face, the coordinate along the border is
    /// remapped into the neighbor's axes. Stepping diagonally out of a corner
    /// is not possible; resolve one axis at a time.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        self.step_oriented(cell, direction, Rotation::ZERO).0
    }

    /// Returns the cell adjacent to `cell` in `direction` when `direction` is
    /// expressed relative to an in-flight `heading`, along with the updated
    /// heading.
    ///
    /// The heading accumulates the rotation of every border crossed, so
    /// walking the same `direction` keeps going "straight" around the cube.
    pub fn step_oriented(
        &self,
        cell: Cell,
        direction: Direction,
        heading: Rotation,
    ) -> (Cell, Rotation) {
        let local = direction.rotated(heading);
        let Cell { face, col, row } = cell;

        let within = match local {
            Direction::Left => col.checked_sub(1).map(|c| (c, row)),
            Direction::Right => (col < MAX).then(|| (col + 1, row)),
            Direction::Up => row.checked_sub(1).map(|r| (col, r)),
            Direction::Down => (row < MAX).then(|| (col, row + 1)),
        };
        if let Some((col, row)) = within {
            return (Cell::new(face, col, row), heading);
        }

        let edge = self.edge(face, local);
        let (col, row) = enter(local, edge.rotation, col, row);
        (Cell::new(edge.face, col, row), heading + edge.rotation)
    }

    /// Returns the 12 cells of the ring swept by moving line `index` of
    /// `face` in `direction`, starting with the 3 cells on `face`.
    ///
    /// Consecutive groups of 3 belong to consecutive faces around the ring,
    /// and each group is listed in the order of travel.
    pub fn ring(&self, face: Face, direction: Direction, index: u8) -> [Cell; 12] {
        let mut faces = [(face, Rotation::ZERO); 4];
        for i in 1..4 {
            let (prev_face, prev_heading) = faces[i - 1];
            let edge = self.edge(prev_face, direction.rotated(prev_heading));
            faces[i] = (edge.face, prev_heading + edge.rotation);
        }

        std::array::from_fn(|i| {
            let (face, heading) = faces[i / 3];
            let (col, row) = line_coords(direction, index, (i % 3) as u8);
            let (col, row) = heading.to_local(col, row);
            Cell::new(face, col, row)
        })
    }
}

/// Returns the coordinates on a neighbor face after leaving the current face
/// across the border in local direction `direction`, where the neighbor's
/// axes are rotated by `rotation`.
fn enter(direction: Direction, rotation: Rotation, col: u8, row: u8) -> (u8, u8) {
    let q = rotation.quarter_turns();
    match direction {
        Direction::Left => match q {
            0 => (MAX, row),
            2 => (0, MAX - row),
            1 => (row, 0),
            _ => (MAX - row, MAX),
        },
        Direction::Right => match q {
            0 => (0, row),
            2 => (MAX, MAX - row),
            1 => (row, MAX),
            _ => (MAX - row, 0),
        },
        Direction::Down => match q {
            0 => (col, 0),
            2 => (MAX - col, MAX),
            1 => (0, MAX - col),
            _ => (MAX, col),
        },
        Direction::Up => match q {
            0 => (col, MAX),
            2 => (MAX - col, 0),
            1 => (MAX, MAX - col),
            _ => (0, col),
        },
    }
}

/// Returns the screen-space coordinates of the `i`th cell of line `index`,
/// listed in the order that pieces travel when the line moves in
/// `direction`.
fn line_coords(direction: Direction, index: u8, i: u8) -> (u8, u8) {
    match direction {
        Direction::Left => (MAX - i, index),
        Direction::Right => (i, index),
        Direction::Down => (index, i),
        Direction::Up => (index, MAX - i),
    }
}

/// Selection cursor that can be walked around the cube.
///
/// The heading tracks how the cursor's "up" has turned while crossing
/// borders, so repeatedly moving in one direction circles the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Selected cell.
    pub cell: Cell,
    /// Accumulated rotation since the cursor was placed.
    pub heading: Rotation,
}
impl Default for Cursor {
    fn default() -> Self {
        Self::new(Cell::center(Face::F))
    }
}
impl Cursor {
    /// Constructs a cursor at `cell` with no accumulated rotation.
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            heading: Rotation::ZERO,
        }
    }

    /// Moves the cursor one cell in `direction`, relative to its heading.
    pub fn step(&mut self, topology: &Topology, direction: Direction) {
        (self.cell, self.heading) = topology.step_oriented(self.cell, direction, self.heading);
    }

    /// Returns the direction in the selected face's local axes that
    /// corresponds to `direction` as seen by the cursor.
    pub fn local_direction(&self, direction: Direction) -> Direction {
        direction.rotated(self.heading)
    }
}
