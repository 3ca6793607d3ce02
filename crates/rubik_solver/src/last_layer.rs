//! Last layer, solved on the front face after the cube has been turned around.
//!
//! Unlike the table phases, these read the live front grid after every move.

use rubik_core::{Cell, Direction, Face, Piece};
use rubik_view::CubeSimulation;

use crate::SolveError;

/// Color of the last layer once it has been turned to the front.
const LAST: Face = Face::B;

/// Flips two edges of the cross.
const CROSS_LINE: &str = "D' R' F' R F D";
/// Flips two edges of the cross, from an L shape.
const CROSS_ELL: &str = "D' F' R' F R D";
/// Swaps two adjacent corners.
const CORNER_SWAP: &str = "L' F R F' L F R' F2";
/// Twists three corners.
const ORIENT_CW: &str = "R F R' F R F2 R' F2";
/// Twists three corners the other way.
const ORIENT_CCW: &str = "R' F' R F' R' F2 R F2";
/// Cycles three edges.
const EDGE_CYCLE: &str = "R2 F' D' U R2 D U' F' R2";
/// Cycles three edges the other way.
const EDGE_CYCLE_REV: &str = "R2 F D' U R2 D U' F R2";

/// Edge cells of the front face.
const EDGES: [(u8, u8); 4] = [(0, 1), (1, 0), (1, 2), (2, 1)];
/// Corner cells of the front face.
const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// Maximum number of times a last-layer step repeats itself.
pub const MAX_RETRIES: usize = 4;

fn front(sim: &CubeSimulation, col: u8, row: u8) -> Piece {
    sim.state().piece_at(Cell::new(Face::F, col, row))
}
fn beside(sim: &CubeSimulation, col: u8, row: u8, direction: Direction) -> Piece {
    sim.state().neighbor(Cell::new(Face::F, col, row), direction)
}
fn is_last(sim: &CubeSimulation, col: u8, row: u8) -> bool {
    front(sim, col, row).color == LAST
}

/// Brings the last-layer edges to the front face, ignoring their order.
pub fn cross(sim: &mut CubeSimulation) -> Result<(), SolveError> {
    let done = |sim: &CubeSimulation| EDGES.iter().all(|&(c, r)| is_last(sim, c, r));
    if done(sim) {
        return Ok(());
    }

    let is_line = |sim: &CubeSimulation| {
        let (e1, e3, e5, e7) = (
            is_last(sim, 0, 1),
            is_last(sim, 1, 0),
            is_last(sim, 1, 2),
            is_last(sim, 2, 1),
        );
        (!e1 && !e7 && e3 && e5) || (e1 && e7 && !e3 && !e5)
    };
    let finish_line = |sim: &mut CubeSimulation| {
        if !is_last(sim, 0, 1) {
            sim.execute("F'");
        }
        sim.execute(CROSS_LINE);
    };
    let finish_ell = |sim: &mut CubeSimulation| {
        match (is_last(sim, 0, 1), is_last(sim, 1, 0)) {
            (false, false) => sim.execute("F2"),
            (true, false) => sim.execute("F'"),
            (false, true) => sim.execute("F"),
            (true, true) => (),
        }
        sim.execute(CROSS_ELL);
    };

    sim.begin_group();
    if is_line(sim) {
        finish_line(sim);
    } else if EDGES.iter().all(|&(c, r)| !is_last(sim, c, r)) {
        sim.execute(CROSS_LINE);
        if is_line(sim) {
            finish_line(sim);
        } else {
            finish_ell(sim);
        }
    } else {
        finish_ell(sim);
    }
    sim.end_group();

    if !done(sim) {
        return Err(SolveError::LastLayer {
            phase: "bottom cross",
            detail: "edges still missing from the cross".to_owned(),
        });
    }
    Ok(())
}

/// Returns the slot of the last-layer sticker on the corner cubie at `(col,
/// row)` of the front face.
fn corner_slot(sim: &CubeSimulation, col: u8, row: u8) -> u8 {
    let horizontal = if col == 0 {
        Direction::Left
    } else {
        Direction::Right
    };
    let vertical = if row == 0 {
        Direction::Up
    } else {
        Direction::Down
    };
    [front(sim, col, row), beside(sim, col, row, horizontal)]
        .into_iter()
        .find(|piece| piece.color == LAST)
        .unwrap_or_else(|| beside(sim, col, row, vertical))
        .slot
}

/// Turns the front face so that corner 0 is in the top left, and returns the
/// corner slots found at cells 0, 2, 6, and 8.
fn align_corners(sim: &mut CubeSimulation) -> [u8; 4] {
    let [c0, c2, c6, c8] = CORNERS.map(|(c, r)| corner_slot(sim, c, r));
    if c2 == 0 {
        sim.execute("F'");
        [c2, c8, c0, c6]
    } else if c6 == 0 {
        sim.execute("F");
        [c6, c0, c8, c2]
    } else if c8 == 0 {
        sim.execute("F2");
        [c8, c6, c2, c0]
    } else {
        [c0, c2, c6, c8]
    }
}

fn arrange_corners(sim: &mut CubeSimulation, retries: usize) -> Result<(), SolveError> {
    let [_, c2, c6, _] = align_corners(sim);
    match (c2, c6) {
        (2, 6) => (),
        (2, _) => sim.execute(CORNER_SWAP),
        (6, 2) => {
            sim.execute(CORNER_SWAP);
            if retries == 0 {
                return Err(SolveError::LastLayer {
                    phase: "bottom corner order",
                    detail: format!("corners still out of order after {MAX_RETRIES} swaps"),
                });
            }
            arrange_corners(sim, retries - 1)?;
        }
        (6, _) => sim.execute(&format!("F2 {CORNER_SWAP}")),
        (_, 2) => sim.execute(&format!("F' {CORNER_SWAP}")),
        _ => sim.execute(&format!("F {CORNER_SWAP}")),
    }
    Ok(())
}

/// Puts the last-layer corners in order around the front face, ignoring their
/// twist.
///
/// The final check may turn the front face to line corner 0 up, outside the
/// group.
pub fn corner_order(sim: &mut CubeSimulation) -> Result<(), SolveError> {
    sim.begin_group();
    let result = arrange_corners(sim, MAX_RETRIES);
    sim.end_group();
    result?;

    match align_corners(sim) {
        [_, 2, 6, _] => Ok(()),
        slots => Err(SolveError::LastLayer {
            phase: "bottom corner order",
            detail: format!("corner slots are {slots:?}"),
        }),
    }
}

fn count_oriented(sim: &CubeSimulation) -> usize {
    CORNERS.iter().filter(|&&(c, r)| is_last(sim, c, r)).count()
}

/// Twists the last-layer corners so that they all show the last-layer color on
/// the front face.
pub fn corner_orient(sim: &mut CubeSimulation) -> Result<(), SolveError> {
    let oriented = count_oriented(sim);
    if oriented == 4 {
        return Ok(());
    }
    let color_above = |sim: &CubeSimulation, col| beside(sim, col, 0, Direction::Up).color;

    sim.begin_group();
    let state = match oriented {
        0 => {
            let u1 = color_above(sim, 0);
            let u2 = color_above(sim, 2);
            let d1 = beside(sim, 0, 2, Direction::Down).color;
            let d2 = beside(sim, 2, 2, Direction::Down).color;
            if [u1, u2, d1, d2].iter().all(|&c| c != LAST) || (u1 == u2 && d1 == d2) {
                if u1 != LAST {
                    sim.execute("F'");
                }
                sim.execute(&format!("F' {ORIENT_CCW} F2 {ORIENT_CCW}"));
                7
            } else {
                match (u1 == LAST, u2 == LAST) {
                    (false, false) => sim.execute("F'"),
                    (true, false) => sim.execute("F2"),
                    (true, true) => sim.execute("F"),
                    (false, true) => (),
                }
                sim.execute(&format!("{ORIENT_CCW} F' {ORIENT_CCW}"));
                6
            }
        }
        1 => {
            if is_last(sim, 0, 2) {
                sim.execute("F'");
            }
            if is_last(sim, 2, 0) {
                sim.execute("F");
            }
            if is_last(sim, 2, 2) {
                sim.execute("F2");
            }
            if color_above(sim, 2) == LAST {
                sim.execute(ORIENT_CW);
                1
            } else {
                sim.execute(&format!("F {ORIENT_CCW}"));
                2
            }
        }
        2 => {
            let color = |col, row| front(sim, col, row).color;
            if color(0, 0) != color(2, 2) && color(0, 2) != color(2, 0) {
                match (is_last(sim, 0, 0), is_last(sim, 0, 2)) {
                    (false, false) => sim.execute("F2"),
                    (false, true) => sim.execute("F'"),
                    (true, false) => sim.execute("F"),
                    (true, true) => (),
                }
                if color_above(sim, 2) == LAST {
                    sim.execute(&format!("F2 {ORIENT_CW} {ORIENT_CCW}"));
                    4
                } else {
                    sim.execute(&format!("F' {ORIENT_CCW} F2 {ORIENT_CW}"));
                    3
                }
            } else {
                if !is_last(sim, 0, 0) {
                    sim.execute("F'");
                }
                if color_above(sim, 2) != LAST {
                    sim.execute("F2");
                }
                sim.execute(&format!("F' {ORIENT_CW} F' {ORIENT_CCW}"));
                5
            }
        }
        _ => 0,
    };
    for _ in 0..3 {
        if front(sim, 0, 0).slot != 0 {
            sim.execute("F'");
        }
    }
    sim.end_group();

    match count_oriented(sim) {
        4 => Ok(()),
        n => Err(SolveError::LastLayer {
            phase: "bottom corner orient",
            detail: format!("state {state} ({oriented} oriented) left {n} oriented"),
        }),
    }
}

fn edges_home(sim: &CubeSimulation) -> bool {
    EDGES
        .iter()
        .all(|&(c, r)| front(sim, c, r).slot == Cell::new(Face::F, c, r).slot())
}

fn cycle_edges(sim: &mut CubeSimulation, retries: usize) -> Result<(), SolveError> {
    if edges_home(sim) {
        return Ok(());
    }
    let slot = |sim: &CubeSimulation, col, row| front(sim, col, row).slot;

    if slot(sim, 0, 1) == 1 {
        match (slot(sim, 1, 0), slot(sim, 1, 2)) {
            (5, s5) if s5 != 3 => sim.execute(EDGE_CYCLE_REV),
            (3 | 5, _) => (),
            (_, 3) => sim.execute(EDGE_CYCLE),
            _ => (),
        }
    } else if slot(sim, 1, 0) == 3 {
        sim.execute("F");
        match (slot(sim, 1, 0), slot(sim, 1, 2)) {
            (1, 5) => sim.execute(EDGE_CYCLE_REV),
            (5, s5) if s5 != 3 => sim.execute(EDGE_CYCLE),
            _ => (),
        }
        sim.execute("F'");
    } else if slot(sim, 1, 2) == 5 {
        sim.execute("F'");
        match (slot(sim, 1, 0), slot(sim, 1, 2)) {
            (1, _) => (),
            (3, 1) => sim.execute(EDGE_CYCLE),
            (3, _) => (),
            (_, s5) if s5 != 1 => sim.execute(EDGE_CYCLE_REV),
            _ => (),
        }
        sim.execute("F");
    } else if slot(sim, 2, 1) == 7 {
        sim.execute("F2");
        match (slot(sim, 1, 0), slot(sim, 1, 2)) {
            (1, s5) if s5 != 3 => sim.execute(EDGE_CYCLE),
            (3, 1) => sim.execute(EDGE_CYCLE_REV),
            _ => (),
        }
        sim.execute("F2");
    } else {
        sim.execute(EDGE_CYCLE);
        if retries == 0 {
            return Err(SolveError::LastLayer {
                phase: "bottom middles",
                detail: format!("no edge home after {MAX_RETRIES} cycles"),
            });
        }
        cycle_edges(sim, retries - 1)?;
    }
    Ok(())
}

/// Puts the last-layer edges in order.
pub fn middles(sim: &mut CubeSimulation) -> Result<(), SolveError> {
    if edges_home(sim) {
        return Ok(());
    }

    sim.begin_group();
    let result = cycle_edges(sim, MAX_RETRIES);
    sim.end_group();
    result?;

    if !edges_home(sim) {
        let slots = EDGES.map(|(c, r)| front(sim, c, r).slot);
        return Err(SolveError::LastLayer {
            phase: "bottom middles",
            detail: format!("edge slots are {slots:?}"),
        });
    }
    Ok(())
}
