//! Textual move notation.
//!
//! There are two forms:
//!
//! - **Face notation**, such as `R U R' U2`, which is what users type. Parsing
//!   is lenient: unrecognized characters are skipped.
//! - **Move scripts**, which add slice moves such as `F<1` or `Lv0` and the
//!   placeholder face `*`. Scripts are parsed strictly.

use std::fmt;

use chumsky::prelude::*;
use itertools::Itertools;

use crate::{Direction, Face, FaceTurn, Slice, Turn};

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Face referenced by a move script.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum FaceRef {
    /// Whatever face the script is being run against, written `*`.
    Current,
    /// Specific face.
    Face(Face),
}
impl fmt::Display for FaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceRef::Current => write!(f, "*"),
            FaceRef::Face(face) => write!(f, "{face}"),
        }
    }
}
impl FaceRef {
    /// Returns the face referenced, substituting `current` for
    /// [`FaceRef::Current`].
    pub fn resolve(self, current: Face) -> Face {
        match self {
            FaceRef::Current => current,
            FaceRef::Face(face) => face,
        }
    }
}

/// One move in a move script.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum ScriptMove {
    /// Face turn, such as `R'` or `*2`.
    Turn {
        /// Face to turn.
        face: FaceRef,
        /// How far to turn it.
        turn: Turn,
    },
    /// Slice move, such as `F<1`.
    Slice(Slice),
}
impl fmt::Display for ScriptMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScriptMove::Turn { face, turn } => {
                let suffix = match turn {
                    Turn::Cw => "",
                    Turn::Ccw => "'",
                    Turn::Double => "2",
                };
                write!(f, "{face}{suffix}")
            }
            ScriptMove::Slice(slice) => write!(f, "{slice}"),
        }
    }
}
impl ScriptMove {
    /// Returns the face turn with [`FaceRef::Current`] replaced by
    /// `current`, or `None` for slice moves.
    pub fn face_turn(self, current: Face) -> Option<FaceTurn> {
        match self {
            ScriptMove::Turn { face, turn } => Some(FaceTurn::new(face.resolve(current), turn)),
            ScriptMove::Slice(_) => None,
        }
    }
}

/// Error produced by a malformed move script.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("bad move script {script:?}: {}", messages.join("; "))]
pub struct ScriptError {
    /// Script that failed to parse.
    pub script: String,
    /// Human-readable parse errors.
    pub messages: Vec<String>,
}

/// Parses face notation, skipping characters that are not face letters.
///
/// A face letter may be followed by `'` for a counterclockwise turn or `2`
/// for a half turn. Never fails.
pub fn parse_notation(s: &str) -> Vec<FaceTurn> {
    let tokens = lenient_notation().parse(s).into_output().unwrap_or_default();
    tokens
        .into_iter()
        .filter_map(|token| {
            token
                .map_err(|c| log::debug!("skipping unrecognized notation character {c:?}"))
                .ok()
        })
        .collect()
}

/// Renders face turns as notation that [`parse_notation()`] accepts.
pub fn encode_notation(turns: impl IntoIterator<Item = FaceTurn>) -> String {
    turns.into_iter().join(" ")
}

/// Parses a move script.
pub fn parse_script(s: &str) -> Result<Vec<ScriptMove>, ScriptError> {
    script().parse(s).into_result().map_err(|errors| ScriptError {
        script: s.to_owned(),
        messages: errors.into_iter().map(|e| e.to_string()).collect(),
    })
}

fn turn_suffix<'src>() -> impl Parser<'src, &'src str, Turn, Extra<'src>> + Clone {
    choice((just('\'').to(Turn::Ccw), just('2').to(Turn::Double)))
        .or_not()
        .map(|turn| turn.unwrap_or(Turn::Cw))
}

fn lenient_notation<'src>()
-> impl Parser<'src, &'src str, Vec<Result<FaceTurn, char>>, Extra<'src>> {
    any()
        .filter(|c: &char| !c.is_whitespace())
        .then(turn_suffix())
        .map(|(c, turn)| Face::from_symbol(c).map(|face| FaceTurn::new(face, turn)).ok_or(c))
        .padded()
        .repeated()
        .collect::<Vec<_>>()
        .padded()
        .then_ignore(end())
}

fn script<'src>() -> impl Parser<'src, &'src str, Vec<ScriptMove>, Extra<'src>> {
    let face = any()
        .try_map(|c: char, span| {
            Face::from_symbol(c).ok_or_else(|| Rich::custom(span, format!("unknown face {c:?}")))
        })
        .labelled("face");

    let direction = any()
        .try_map(|c: char, span| {
            Direction::from_symbol(c)
                .ok_or_else(|| Rich::custom(span, format!("unknown slice direction {c:?}")))
        })
        .labelled("slice direction");

    let index = one_of("012")
        .map(|c: char| c.to_digit(10).unwrap_or(0) as u8)
        .labelled("slice index");

    let slice = face
        .clone()
        .then(direction)
        .then(index)
        .map(|((face, direction), index)| ScriptMove::Slice(Slice::new(face, direction, index)));

    let face_ref = choice((just('*').to(FaceRef::Current), face.map(FaceRef::Face)));
    let turn = face_ref
        .then(turn_suffix())
        .map(|(face, turn)| ScriptMove::Turn { face, turn });

    choice((slice, turn))
        .padded()
        .repeated()
        .collect::<Vec<_>>()
        .padded()
        .then_ignore(end())
}
