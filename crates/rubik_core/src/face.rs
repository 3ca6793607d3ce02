use std::fmt;
use std::ops::{Add, Neg};

use strum::{EnumIter, FromRepr, IntoEnumIterator};

/// Face of the cube.
///
/// The discriminant doubles as the face's home color index, so a piece's
/// [`crate::Piece::color`] is also a `Face`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, FromRepr)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum Face {
    /// Left
    L = 0,
    /// Up
    U = 1,
    /// Front
    F = 2,
    /// Down
    D = 3,
    /// Right
    R = 4,
    /// Back
    B = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;
    /// Notation letters, indexed by face.
    pub const SYMBOLS: &'static str = "LUFDRB";
    /// All faces in index order.
    pub const ALL: [Face; Self::COUNT] = [Face::L, Face::U, Face::F, Face::D, Face::R, Face::B];

    /// Returns an iterator over all faces in index order.
    pub fn iter() -> impl Iterator<Item = Face> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the index of the face, from 0 to 5.
    pub fn index(self) -> usize {
        self as usize
    }
    /// Returns the face with the given index, or `None` if it is out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Returns the notation letter for the face.
    pub fn symbol(self) -> char {
        match self {
            Face::L => 'L',
            Face::U => 'U',
            Face::F => 'F',
            Face::D => 'D',
            Face::R => 'R',
            Face::B => 'B',
        }
    }
    /// Returns the face for a notation letter, or `None` if the letter is not
    /// one of `LUFDRB`.
    pub fn from_symbol(c: char) -> Option<Self> {
        Face::iter().find(|f| f.symbol() == c)
    }

    /// Returns the color of stickers that start on this face.
    pub fn color(self) -> FaceColor {
        match self {
            Face::L => FaceColor::White,
            Face::U => FaceColor::Red,
            Face::F => FaceColor::Green,
            Face::D => FaceColor::Orange,
            Face::R => FaceColor::Yellow,
            Face::B => FaceColor::Blue,
        }
    }
}

/// Sticker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[allow(missing_docs)]
pub enum FaceColor {
    White,
    Red,
    Green,
    Orange,
    Yellow,
    Blue,
}
impl FaceColor {
    /// Returns a one-letter abbreviation of the color, used when printing the
    /// unfolded cube.
    pub fn letter(self) -> char {
        match self {
            FaceColor::White => 'W',
            FaceColor::Red => 'R',
            FaceColor::Green => 'G',
            FaceColor::Orange => 'O',
            FaceColor::Yellow => 'Y',
            FaceColor::Blue => 'B',
        }
    }
    /// Returns an RGB triple for the color.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            FaceColor::White => [255, 255, 255],
            FaceColor::Red => [255, 0, 0],
            FaceColor::Green => [0, 255, 0],
            FaceColor::Orange => [255, 127, 0],
            FaceColor::Yellow => [255, 255, 0],
            FaceColor::Blue => [0, 0, 255],
        }
    }
}

/// Direction within the local axes of a face.
///
/// Columns increase to the right and rows increase downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[allow(missing_docs)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Direction {
    /// Returns an iterator over all four directions.
    pub fn iter() -> impl Iterator<Item = Direction> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns the direction rotated by `rotation`. A quarter turn maps
    /// `Down -> Right -> Up -> Left -> Down`.
    #[must_use]
    pub fn rotated(self, rotation: Rotation) -> Self {
        let quarter = |d: Direction| match d {
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
        };
        (0..rotation.quarter_turns()).fold(self, |d, _| quarter(d))
    }

    /// Returns whether the direction moves along a row (changing the column).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the symbol used for slice moves in move scripts.
    pub fn symbol(self) -> char {
        match self {
            Direction::Left => '<',
            Direction::Right => '>',
            Direction::Up => '^',
            Direction::Down => 'v',
        }
    }
    /// Returns the direction for a slice symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        Direction::iter().find(|d| d.symbol() == c)
    }
}

/// Direction to twist a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TwistDirection {
    /// Clockwise
    Cw,
    /// Counterclockwise
    Ccw,
}
impl fmt::Display for TwistDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistDirection::Cw => Ok(()),
            TwistDirection::Ccw => write!(f, "'"),
        }
    }
}
impl TwistDirection {
    /// Returns the direction for a boolean `clockwise` flag.
    pub fn from_clockwise(clockwise: bool) -> Self {
        match clockwise {
            true => TwistDirection::Cw,
            false => TwistDirection::Ccw,
        }
    }
    /// Returns whether this is [`TwistDirection::Cw`].
    pub fn is_clockwise(self) -> bool {
        self == TwistDirection::Cw
    }
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            TwistDirection::Cw => TwistDirection::Ccw,
            TwistDirection::Ccw => TwistDirection::Cw,
        }
    }
}

/// Relative rotation between the axes of two faces, in degrees.
///
/// Always one of `0`, `90`, `180`, or `-90`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rotation(i16);
impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
impl Rotation {
    /// No rotation.
    pub const ZERO: Self = Self(0);
    /// Quarter turn.
    pub const QUARTER: Self = Self(90);
    /// Half turn.
    pub const HALF: Self = Self(180);
    /// Quarter turn in the negative direction.
    pub const NEG_QUARTER: Self = Self(-90);

    /// Constructs a rotation from a multiple of 90 degrees, normalized into
    /// the range `(-180, 180]`.
    pub const fn from_degrees(degrees: i16) -> Self {
        let mut d = degrees % 360;
        if d <= -180 {
            d += 360;
        } else if d > 180 {
            d -= 360;
        }
        Self(d)
    }
    /// Returns the rotation in degrees.
    pub fn degrees(self) -> i16 {
        self.0
    }
    /// Returns the number of positive quarter turns, from 0 to 3.
    pub fn quarter_turns(self) -> u8 {
        match self.0 {
            90 => 1,
            180 => 2,
            -90 => 3,
            _ => 0,
        }
    }

    /// Maps screen-space coordinates on a face reached with this rotation
    /// into the face's local `(column, row)`.
    pub fn to_local(self, col: u8, row: u8) -> (u8, u8) {
        match self.quarter_turns() {
            1 => (row, 2 - col),
            2 => (2 - col, 2 - row),
            3 => (2 - row, col),
            _ => (col, row),
        }
    }
}
impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Self) -> Self::Output {
        Rotation::from_degrees(self.0 + rhs.0)
    }
}
impl Neg for Rotation {
    type Output = Rotation;

    fn neg(self) -> Self::Output {
        Rotation::from_degrees(-self.0)
    }
}
