use rubik_core::{CubeState, Direction, Piece};
use rubik_view::CubeSimulation;
use smallvec::SmallVec;

use crate::{SolveError, TABLE_PHASES, last_layer};

/// Number of moves made by one phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PhaseStats {
    /// Phase name.
    pub label: &'static str,
    /// Moves made, counting each quarter turn and slice once.
    pub moves: usize,
}

/// Summary of a successful solve.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolveStats {
    /// Phases in the order they ran.
    pub phases: Vec<PhaseStats>,
}
impl SolveStats {
    /// Returns the total number of moves.
    pub fn moves(&self) -> usize {
        self.phases.iter().map(|p| p.moves).sum()
    }

    fn record(
        &mut self,
        sim: &mut CubeSimulation,
        label: &'static str,
        phase: impl FnOnce(&mut CubeSimulation) -> Result<(), SolveError>,
    ) -> Result<(), SolveError> {
        let before = sim.log().len();
        phase(sim)?;
        let moves = sim.log().len() - before;
        log::debug!("{label}: {moves} moves");
        self.phases.push(PhaseStats { label, moves });
        Ok(())
    }
}

/// Solves the cube.
///
/// The pipeline runs with animation off, recording every move in a fresh
/// command log. Whether or not it succeeds, everything it recorded is then
/// undone and redone with animation on, so that the animator shows the whole
/// solve. The animation flag is restored afterwards.
pub fn solve(sim: &mut CubeSimulation) -> Result<SolveStats, SolveError> {
    let animate = sim.animate();
    sim.set_animate(false);
    sim.clear_log();

    let mut stats = SolveStats::default();
    let result = run_pipeline(sim, &mut stats);

    sim.undo_all();
    sim.set_animate(true);
    sim.redo_all();
    sim.set_animate(animate);

    match &result {
        Ok(()) => log::info!("solved in {} moves", stats.moves()),
        Err(e) => log::warn!("solve failed after {} moves: {e}", sim.log().len()),
    }
    result.map(|()| stats)
}

fn run_pipeline(sim: &mut CubeSimulation, stats: &mut SolveStats) -> Result<(), SolveError> {
    let mut placed = SmallVec::<[Piece; 16]>::new();
    for phase in &TABLE_PHASES {
        stats.record(sim, phase.label, |sim| phase.run(sim).map(drop))?;
        placed.push(phase.piece);
        check_home(sim.state(), phase.label, placed.iter().copied())?;
        sim.validate()?;
    }

    stats.record(sim, "turn over", |sim| {
        turn_over(sim);
        Ok(())
    })?;
    stats.record(sim, "bottom cross", last_layer::cross)?;
    stats.record(sim, "bottom corner order", last_layer::corner_order)?;
    stats.record(sim, "bottom corner orient", last_layer::corner_orient)?;
    stats.record(sim, "bottom middles", last_layer::middles)?;
    stats.record(sim, "turn back", |sim| {
        turn_over(sim);
        Ok(())
    })?;

    check_home(sim.state(), "solved", Piece::all())?;
    sim.validate()?;
    Ok(())
}

/// Turns the whole cube so that the back face is in front.
fn turn_over(sim: &mut CubeSimulation) {
    sim.begin_group();
    sim.rotate_cube(Direction::Left);
    sim.rotate_cube(Direction::Left);
    sim.end_group();
}

fn check_home(
    cube: &CubeState,
    label: &'static str,
    pieces: impl IntoIterator<Item = Piece>,
) -> Result<(), SolveError> {
    for piece in pieces {
        let expected = piece.home();
        let actual = cube.locate(piece).ok_or(SolveError::PieceNotFound(piece))?;
        if actual != expected {
            return Err(SolveError::Misplaced {
                label,
                piece,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
