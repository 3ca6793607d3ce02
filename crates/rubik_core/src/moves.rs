//! Face twists, slice moves, and the engine that applies them.

use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::{Cell, CubeState, Direction, Face, SIDE_LEN, TwistDirection};

/// Quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Twist {
    /// Face to twist.
    pub face: Face,
    /// Direction to twist it, as seen when looking at the face.
    pub direction: TwistDirection,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}
impl Twist {
    /// Constructs a twist.
    pub const fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }
    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.face, self.direction.rev())
    }
}

/// Move of one line of a face in a direction, dragging the 12-cell ring
/// through it around the cube.
///
/// Lines are rows for [`Direction::Left`] and [`Direction::Right`] and
/// columns for [`Direction::Up`] and [`Direction::Down`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Slice {
    /// Face whose line is moved.
    pub face: Face,
    /// Direction to move the line.
    pub direction: Direction,
    /// Row or column index, from 0 to 2.
    #[cfg_attr(test, proptest(strategy = "0..3_u8"))]
    pub index: u8,
}
impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.face, self.direction, self.index)
    }
}
impl Slice {
    /// Constructs a slice move.
    pub const fn new(face: Face, direction: Direction, index: u8) -> Self {
        Self {
            face,
            direction,
            index,
        }
    }
    /// Returns whether the index names a line of the face.
    pub fn in_range(self) -> bool {
        self.index < SIDE_LEN
    }
    /// Returns the slice move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.face, self.direction.rev(), self.index)
    }

    /// Returns the step that this move is recorded as.
    ///
    /// Moving an outer line is the same as twisting the face on the other
    /// side of that border, so it becomes a [`Twist`]. Middle lines stay
    /// slices.
    pub fn canonical(self, cube: &CubeState) -> Step {
        use Direction::*;
        use TwistDirection::*;

        let links = cube.topology().links(self.face);
        let twist = match (self.direction, self.index) {
            (Left, 0) => Twist::new(links.up.face, Ccw),
            (Left, 2) => Twist::new(links.down.face, Cw),
            (Right, 0) => Twist::new(links.up.face, Cw),
            (Right, 2) => Twist::new(links.down.face, Ccw),
            (Down, 0) => Twist::new(links.left.face, Ccw),
            (Down, 2) => Twist::new(links.right.face, Cw),
            (Up, 0) => Twist::new(links.left.face, Cw),
            (Up, 2) => Twist::new(links.right.face, Ccw),
            _ => return Step::Slice(self),
        };
        Step::Twist(twist)
    }
}

/// Elementary reversible action recorded by the command log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Step {
    /// Face twist.
    Twist(Twist),
    /// Middle slice move.
    Slice(Slice),
}
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Twist(twist) => twist.fmt(f),
            Step::Slice(slice) => slice.fmt(f),
        }
    }
}
impl From<Twist> for Step {
    fn from(value: Twist) -> Self {
        Step::Twist(value)
    }
}
impl From<Slice> for Step {
    fn from(value: Slice) -> Self {
        Step::Slice(value)
    }
}
impl Step {
    /// Returns the step that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Step::Twist(twist) => Step::Twist(twist.inverse()),
            Step::Slice(slice) => Step::Slice(slice.inverse()),
        }
    }
}

/// Amount to turn a face in textual notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Turn {
    /// Clockwise quarter turn, written with no suffix.
    Cw,
    /// Counterclockwise quarter turn, written `'`.
    Ccw,
    /// Half turn, written `2`.
    Double,
}

/// Face turn as written in textual notation, such as `R'` or `U2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct FaceTurn {
    /// Face to turn.
    pub face: Face,
    /// How far to turn it.
    pub turn: Turn,
}
impl fmt::Display for FaceTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.turn {
            Turn::Cw => "",
            Turn::Ccw => "'",
            Turn::Double => "2",
        };
        write!(f, "{}{suffix}", self.face)
    }
}
impl From<Twist> for FaceTurn {
    fn from(value: Twist) -> Self {
        let turn = match value.direction {
            TwistDirection::Cw => Turn::Cw,
            TwistDirection::Ccw => Turn::Ccw,
        };
        Self {
            face: value.face,
            turn,
        }
    }
}
impl FaceTurn {
    /// Constructs a face turn.
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Returns the quarter twists that make up this turn.
    pub fn twists(self) -> SmallVec<[Twist; 2]> {
        let cw = Twist::new(self.face, TwistDirection::Cw);
        match self.turn {
            Turn::Cw => smallvec![cw],
            Turn::Ccw => smallvec![cw.inverse()],
            Turn::Double => smallvec![cw, cw],
        }
    }
}

impl CubeState {
    /// Twists a face a quarter turn.
    pub fn twist(&mut self, twist: Twist) {
        log::trace!("twist {twist}");

        let Twist { face, direction } = twist;
        self.rotate_face_grid(face, direction);

        let Some((border, edge)) = self.topology().aligned_neighbor(face) else {
            log::error!("face {face} has no aligned neighbor; ring not shifted");
            return;
        };
        // The clockwise ring motion, as seen from the aligned neighbor.
        let (ring_direction, index) = match border {
            Direction::Left => (Direction::Down, SIDE_LEN - 1),
            Direction::Right => (Direction::Up, 0),
            Direction::Down => (Direction::Right, 0),
            Direction::Up => (Direction::Left, SIDE_LEN - 1),
        };
        let ring_direction = match direction {
            TwistDirection::Cw => ring_direction,
            TwistDirection::Ccw => ring_direction.rev(),
        };
        self.shift_ring(edge.face, ring_direction, index);
    }

    /// Moves line `index` of `face` one step in `direction`, carrying the
    /// rest of its ring around the cube. The pieces of the face being
    /// uncovered or covered by the line are not rotated.
    ///
    /// An `index` outside the face is ignored with a warning.
    pub fn shift_ring(&mut self, face: Face, direction: Direction, index: u8) {
        if index >= SIDE_LEN {
            log::warn!("ignoring move of line {index} on face {face}");
            return;
        }
        let ring = self.topology().ring(face, direction, index);
        let pieces = ring.map(|cell| self.piece_at(cell));
        for (i, piece) in pieces.into_iter().enumerate() {
            self.set_piece(ring[(i + 3) % ring.len()], piece);
        }
    }

    /// Applies a slice move and returns the step it is recorded as.
    pub fn slice(&mut self, slice: Slice) -> Step {
        let step = slice.canonical(self);
        self.apply(step);
        step
    }

    /// Applies a step.
    pub fn apply(&mut self, step: Step) {
        match step {
            Step::Twist(twist) => self.twist(twist),
            Step::Slice(slice) => match slice.canonical(self) {
                Step::Twist(twist) => self.twist(twist),
                Step::Slice(slice) => {
                    log::trace!("slice {slice}");
                    self.shift_ring(slice.face, slice.direction, slice.index);
                }
            },
        }
    }

    fn rotate_face_grid(&mut self, face: Face, direction: TwistDirection) {
        let old = *self.face_grid(face);
        let max = SIDE_LEN - 1;
        for cell in Cell::all_on(face) {
            let (c, r) = (cell.col, cell.row);
            let (src_col, src_row) = match direction {
                TwistDirection::Cw => (max - r, c),
                TwistDirection::Ccw => (r, max - c),
            };
            self.set_piece(cell, old[src_col as usize][src_row as usize]);
        }
    }
}
