use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::notation::{encode_notation, parse_notation, parse_script};
use crate::*;

fn scrambled(steps: &[Step]) -> CubeState {
    let mut cube = CubeState::new_solved();
    for &step in steps {
        cube.apply(step);
    }
    cube
}

#[test]
fn test_topology_antisymmetry() {
    for face in Face::iter() {
        for direction in Direction::iter() {
            let edge = TOPOLOGY.edge(face, direction);
            let back = TOPOLOGY
                .direction_to(edge.face, face)
                .expect("neighbor must border origin");
            let back_edge = TOPOLOGY.edge(edge.face, back);
            assert_eq!(face, back_edge.face);
            assert_eq!(Rotation::ZERO, edge.rotation + back_edge.rotation);
        }
    }
}

#[test]
fn test_opposite_faces() {
    assert_eq!(Face::R, TOPOLOGY.opposite(Face::L));
    assert_eq!(Face::D, TOPOLOGY.opposite(Face::U));
    assert_eq!(Face::B, TOPOLOGY.opposite(Face::F));
    for face in Face::iter() {
        assert_eq!(face, TOPOLOGY.opposite(TOPOLOGY.opposite(face)));
    }
}

#[test]
fn test_step_across_borders() {
    let step = |face, col, row, direction| TOPOLOGY.step(Cell::new(face, col, row), direction);

    assert_eq!(Cell::new(Face::F, 0, 1), step(Face::F, 1, 1, Direction::Left));
    assert_eq!(Cell::new(Face::L, 2, 1), step(Face::F, 0, 1, Direction::Left));
    assert_eq!(Cell::new(Face::L, 0, 0), step(Face::U, 0, 0, Direction::Left));
    assert_eq!(Cell::new(Face::F, 1, 0), step(Face::U, 1, 2, Direction::Down));
    assert_eq!(Cell::new(Face::B, 1, 2), step(Face::D, 1, 2, Direction::Down));
    assert_eq!(Cell::new(Face::B, 1, 0), step(Face::U, 1, 0, Direction::Up));
}

#[test]
fn test_step_there_and_back() {
    for cell in Cell::all() {
        for direction in Direction::iter() {
            let (there, heading) = TOPOLOGY.step_oriented(cell, direction, Rotation::ZERO);
            let (back, heading) = TOPOLOGY.step_oriented(there, direction.rev(), heading);
            assert_eq!(cell, back, "stepping {direction} from {cell}");
            assert_eq!(Rotation::ZERO, heading);
        }
    }
}

#[test]
fn test_rings() {
    for face in Face::iter() {
        for direction in Direction::iter() {
            for index in 0..3 {
                let ring = TOPOLOGY.ring(face, direction, index);
                let distinct: HashSet<Cell> = ring.iter().copied().collect();
                assert_eq!(12, distinct.len());
                assert!(ring[..3].iter().all(|cell| cell.face == face));
            }
        }
    }
}

#[test]
fn test_cursor_wraparound() {
    for direction in Direction::iter() {
        let mut cursor = Cursor::default();
        let mut faces_visited = HashSet::new();
        for _ in 0..12 {
            cursor.step(&TOPOLOGY, direction);
            faces_visited.insert(cursor.cell.face);
        }
        assert_eq!(Cursor::default(), cursor);
        assert_eq!(4, faces_visited.len());
    }
}

#[test]
fn test_solved_cube() {
    let cube = CubeState::new_solved();
    assert!(cube.is_solved());
    assert!(cube.is_valid());
    for piece in Piece::all() {
        assert_eq!(Some(piece.home()), cube.locate(piece));
    }
    assert_eq!(
        "    RRR\n    RRR\n    RRR\n\
         WWW GGG YYY BBB\nWWW GGG YYY BBB\nWWW GGG YYY BBB\n    \
         OOO\n    OOO\n    OOO\n",
        cube.to_string(),
    );
}

#[test]
fn test_twist_moves_ring() {
    let mut cube = CubeState::new_solved();
    cube.twist(Twist::new(Face::F, TwistDirection::Cw));

    // Border strips travel U -> L -> D -> R -> U.
    for i in 0..3 {
        assert_eq!(Face::D, cube.piece_at(Cell::new(Face::R, 0, i)).color);
        assert_eq!(Face::R, cube.piece_at(Cell::new(Face::U, i, 2)).color);
        assert_eq!(Face::U, cube.piece_at(Cell::new(Face::L, 2, i)).color);
        assert_eq!(Face::F, cube.piece_at(Cell::new(Face::F, i, 0)).color);
    }
    assert_eq!(Piece::new(Face::F, 8), cube.piece_at(Cell::new(Face::F, 2, 0)));
    assert!(cube.is_valid());
}

#[test]
fn test_outer_slices_are_twists() {
    let cube = CubeState::new_solved();
    let twist = |face, direction| Step::Twist(Twist::new(face, direction));

    assert_eq!(
        twist(Face::U, TwistDirection::Ccw),
        Slice::new(Face::F, Direction::Left, 0).canonical(&cube),
    );
    assert_eq!(
        twist(Face::R, TwistDirection::Cw),
        Slice::new(Face::F, Direction::Down, 2).canonical(&cube),
    );
    let middle = Slice::new(Face::F, Direction::Down, 1);
    assert_eq!(Step::Slice(middle), middle.canonical(&cube));
}

#[test]
fn test_out_of_range_slice_is_ignored() {
    let mut cube = CubeState::new_solved();
    let slice = Slice::new(Face::F, Direction::Left, 3);
    assert!(!slice.in_range());
    cube.apply(Step::Slice(slice));
    cube.shift_ring(Face::U, Direction::Down, 7);
    assert!(cube.is_solved());
}

#[test]
fn test_every_move_inverts() {
    let mut cube = CubeState::new_solved();
    for face in Face::iter() {
        for direction in Direction::iter() {
            for index in 0..3 {
                let step = cube.slice(Slice::new(face, direction, index));
                assert!(!cube.is_solved());
                assert!(cube.is_valid());
                cube.apply(step.inverse());
                assert!(cube.is_solved(), "{step} then {}", step.inverse());
            }
        }
        for direction in [TwistDirection::Cw, TwistDirection::Ccw] {
            let twist = Twist::new(face, direction);
            cube.twist(twist);
            cube.twist(twist.inverse());
            assert!(cube.is_solved(), "{twist} then {}", twist.inverse());
        }
    }
}

#[test]
fn test_sexy_move_order() {
    let mut cube = CubeState::new_solved();
    let sexy = parse_notation("R U R' U'");
    for i in 0..6 {
        assert_eq!(i == 0, cube.is_solved());
        for turn in &sexy {
            for twist in turn.twists() {
                cube.twist(twist);
            }
        }
    }
    assert!(cube.is_solved());
}

#[test]
fn test_validator_rejects_swapped_stickers() {
    // Two edge stickers from different cubies
    let mut cube = CubeState::new_solved();
    let a = Cell::new(Face::F, 0, 1);
    let b = Cell::new(Face::F, 1, 0);
    let (pa, pb) = (cube.piece_at(a), cube.piece_at(b));
    cube.set_piece(a, pb);
    cube.set_piece(b, pa);
    assert!(matches!(
        cube.validate(),
        Err(ValidationError::BadEdgePartner { .. }),
    ));

    // Two corner stickers from different cubies
    let mut cube = CubeState::new_solved();
    let a = Cell::new(Face::U, 0, 0);
    let b = Cell::new(Face::D, 2, 2);
    let (pa, pb) = (cube.piece_at(a), cube.piece_at(b));
    cube.set_piece(a, pb);
    cube.set_piece(b, pa);
    assert!(matches!(
        cube.validate(),
        Err(ValidationError::BadCornerPartners { .. }),
    ));

    // Edge sticker in a corner cell
    let mut cube = CubeState::new_solved();
    cube.set_piece(Cell::new(Face::B, 0, 0), Piece::new(Face::B, 1));
    let err = cube.validate().unwrap_err();
    assert!(matches!(
        err,
        ValidationError::DuplicatePiece { .. } | ValidationError::WrongKind { .. },
    ));

    // Centers swapped between adjacent faces
    let mut cube = CubeState::new_solved();
    cube.set_piece(Cell::center(Face::F), Piece::new(Face::U, 4));
    cube.set_piece(Cell::center(Face::U), Piece::new(Face::F, 4));
    assert!(matches!(
        cube.validate(),
        Err(ValidationError::BadOppositeCenters { .. }),
    ));
}

fn swapped(a: Cell, b: Cell) -> CubeState {
    let mut cube = CubeState::new_solved();
    let (pa, pb) = (cube.piece_at(a), cube.piece_at(b));
    cube.set_piece(a, pb);
    cube.set_piece(b, pa);
    cube
}

#[test]
fn test_validator_rejects_twisted_corner() {
    let cube = swapped(Cell::new(Face::L, 0, 0), Cell::new(Face::U, 0, 0));
    assert!(matches!(
        cube.validate(),
        Err(ValidationError::BadCornerPartners { .. }),
    ));
    let cube = swapped(Cell::new(Face::F, 2, 2), Cell::new(Face::R, 0, 2));
    assert!(!cube.is_valid());
}

#[test]
fn test_validator_rejects_mirrored_centers() {
    for (a, b) in [(Face::L, Face::R), (Face::U, Face::D), (Face::F, Face::B)] {
        let cube = swapped(Cell::center(a), Cell::center(b));
        assert!(matches!(
            cube.validate(),
            Err(ValidationError::MirroredCenters { .. }),
        ));
    }

    // Turning the whole cube keeps the centers' handedness.
    let mut cube = CubeState::new_solved();
    for index in 0..SIDE_LEN {
        cube.apply(Step::Slice(Slice::new(Face::F, Direction::Up, index)));
    }
    assert!(cube.is_valid());
}

#[test]
fn test_validator_rejects_every_sticker_swap() {
    let cells: Vec<Cell> = Cell::all().collect();
    let mut undetected = vec![];
    for (i, &a) in cells.iter().enumerate() {
        for &b in &cells[i + 1..] {
            if swapped(a, b).is_valid() {
                undetected.push((a, b));
            }
        }
    }

    // Only an edge flipped in place goes unnoticed.
    let is_edge_flip = |a: Cell, b: Cell| {
        a.kind() == PieceKind::Edge
            && a.face != b.face
            && Direction::iter().any(|d| TOPOLOGY.step(a, d) == b)
    };
    assert!(undetected.iter().all(|&(a, b)| is_edge_flip(a, b)), "{undetected:?}");
    assert_eq!(12, undetected.len());
}

#[test]
fn test_parse_notation() {
    let expected = vec![
        FaceTurn::new(Face::R, Turn::Cw),
        FaceTurn::new(Face::U, Turn::Ccw),
        FaceTurn::new(Face::F, Turn::Double),
    ];
    assert_eq!(expected, parse_notation("R U' F2"));
    assert_eq!(expected, parse_notation("  RU'F2  "));
    assert_eq!(expected, parse_notation("R x U' ? F2 q"));
    assert_eq!(Vec::<FaceTurn>::new(), parse_notation(""));
    assert_eq!(Vec::<FaceTurn>::new(), parse_notation("hello"));
    assert_eq!("R U' F2", encode_notation(expected));
}

#[test]
fn test_parse_script() {
    assert_eq!(
        vec![
            ScriptMove::Slice(Slice::new(Face::F, Direction::Left, 1)),
            ScriptMove::Turn {
                face: FaceRef::Current,
                turn: Turn::Ccw,
            },
            ScriptMove::Slice(Slice::new(Face::L, Direction::Down, 0)),
            ScriptMove::Turn {
                face: FaceRef::Face(Face::B),
                turn: Turn::Double,
            },
        ],
        parse_script("F<1 *' Lv0 B2").unwrap(),
    );
    assert_eq!(Vec::<ScriptMove>::new(), parse_script("").unwrap());

    let err = parse_script("F<3").unwrap_err();
    assert_eq!("F<3", err.script);
    assert!(!err.messages.is_empty());
    assert!(parse_script("X").is_err());
    assert!(parse_script("F^").is_err());
}

proptest! {
    #[test]
    fn proptest_four_twists_are_identity(steps: Vec<Step>, face: Face) {
        let mut cube = scrambled(&steps);
        let before = cube.clone();
        for _ in 0..4 {
            cube.twist(Twist::new(face, TwistDirection::Cw));
        }
        prop_assert_eq!(before, cube);
    }

    #[test]
    fn proptest_inverse_sequence_restores(steps: Vec<Step>) {
        let mut cube = scrambled(&steps);
        for &step in steps.iter().rev() {
            cube.apply(step.inverse());
        }
        prop_assert!(cube.is_solved());
    }

    #[test]
    fn proptest_pieces_conserved(steps: Vec<Step>) {
        let cube = scrambled(&steps);
        let pieces: HashSet<Piece> = Cell::all().map(|cell| cube.piece_at(cell)).collect();
        prop_assert_eq!(PIECE_COUNT, pieces.len());
        prop_assert!(cube.is_valid());
    }

    #[test]
    fn proptest_script_roundtrip(moves: Vec<ScriptMove>) {
        let s = moves.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(Ok(moves), parse_script(&s));
    }
}
