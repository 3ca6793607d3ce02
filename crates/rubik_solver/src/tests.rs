use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rubik_core::notation::parse_script;
use rubik_core::{Cell, CubeState, Direction, Face, Piece, Step, TwistDirection};
use rubik_prefs::SimPrefs;
use rubik_view::{AnimationFuture, Animator, CubeSimulation};

use crate::tables::{TOP_1, TOP_4};
use crate::*;

#[derive(Debug, Default, Clone)]
struct CountingAnimator {
    steps: Arc<Mutex<Vec<Step>>>,
}
impl Animator for CountingAnimator {
    fn animate(&mut self, _cube: &CubeState, step: Step) -> AnimationFuture {
        self.steps.lock().push(step);
        Box::pin(std::future::ready(()))
    }
}

fn scrambled(seed: u64) -> CubeSimulation {
    let mut sim = CubeSimulation::default();
    sim.randomize_with_seed(seed);
    sim
}

#[test]
fn test_table_scripts_parse() {
    for phase in &TABLE_PHASES {
        for case in phase.cases {
            if let Err(e) = parse_script(case.moves) {
                panic!("{}: {:?} does not parse: {e}", phase.label, case.moves);
            }
        }
    }
}

#[test]
fn test_tables_cover_every_cell() {
    for phase in &TABLE_PHASES {
        let target = phase.target();
        for cell in Cell::all().filter(|c| c.kind() == target.kind() && *c != target) {
            let path = phase
                .resolve(cell)
                .unwrap_or_else(|e| panic!("{} at {cell}: {e}", phase.label));
            assert!(!path.is_empty(), "{} at {cell}", phase.label);
        }
        assert!(phase.resolve(target).unwrap().is_empty());
    }
}

#[test]
fn test_continuation() {
    let path = TOP_1.resolve(Cell::new(Face::U, 2, 1)).unwrap();
    let moves: Vec<&str> = path.iter().map(|case| case.moves).collect();
    assert_eq!(vec!["*2", "Uv0"], moves);

    let path = TOP_4.resolve(Cell::center(Face::L)).unwrap();
    assert_eq!(1, path.len());
    assert_eq!("L>1", path[0].moves);
}

#[test]
fn test_table_phase_seats_piece() {
    let mut sim = CubeSimulation::default();
    sim.slice(Face::F, Direction::Left, 1);
    sim.clear_log();
    assert_ne!(Some(TOP_4.target()), sim.state().locate(TOP_4.piece));

    let moves = TOP_4.run(&mut sim).unwrap();
    assert!(moves > 0);
    assert_eq!(Some(TOP_4.target()), sim.state().locate(TOP_4.piece));
    assert_eq!(1, sim.log().entry_count());

    assert_eq!(0, TOP_4.run(&mut sim).unwrap());
}

#[test]
fn test_bad_script_closes_group() {
    const BROKEN: TablePhase = TablePhase {
        label: "broken",
        piece: Piece::new(Face::F, 4),
        cases: &[Case::face(Face::L, "L>1 L>9")],
    };

    let mut sim = CubeSimulation::default();
    sim.slice(Face::F, Direction::Left, 1);
    sim.clear_log();
    assert!(matches!(BROKEN.run(&mut sim), Err(SolveError::Script(_))));
    assert!(sim.log().is_empty());

    // Later moves are not swallowed by a group left open.
    sim.twist(Face::R, TwistDirection::Cw);
    sim.twist(Face::U, TwistDirection::Cw);
    assert_eq!(2, sim.log().entry_count());
}

#[test]
fn test_solve_solved_cube() {
    let mut sim = CubeSimulation::default();
    let stats = solve(&mut sim).unwrap();
    assert!(sim.is_solved());
    // Turning over and back is all that happens.
    assert_eq!(12, stats.moves());
    assert_eq!(stats.moves(), sim.log().len());
}

#[test]
fn test_solve_many_scrambles() {
    for seed in 0..200 {
        let mut sim = scrambled(seed);
        let stats = solve(&mut sim).unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert!(sim.is_solved(), "seed {seed}");
        assert!(sim.validate().is_ok());
        assert_eq!(stats.moves(), sim.log().len());
    }
}

#[test]
fn test_solve_after_notation() {
    let mut sim = CubeSimulation::default();
    sim.execute("R U R' U' F2 B L' D2");
    solve(&mut sim).unwrap();
    assert!(sim.is_solved());
}

#[test]
fn test_solve_replays_through_animator() {
    let animator = CountingAnimator::default();
    let steps = Arc::clone(&animator.steps);
    let mut sim = scrambled(7).with_animator(animator);
    let start = sim.state().clone();

    solve(&mut sim).unwrap();
    assert!(sim.is_solved());
    assert!(!sim.animate());

    // Only the replay is animated.
    let steps = steps.lock();
    assert_eq!(sim.log().steps(), *steps);
    let mut cube = start;
    for &step in steps.iter() {
        cube.apply(step);
    }
    assert!(cube.is_solved());
}

#[test]
fn test_solve_keeps_animation_on() {
    let animator = CountingAnimator::default();
    let steps = Arc::clone(&animator.steps);
    let mut sim = CubeSimulation::new(SimPrefs {
        animate: true,
        ..Default::default()
    })
    .with_animator(animator);
    sim.randomize_with_seed(3);
    assert!(steps.lock().is_empty());

    solve(&mut sim).unwrap();
    assert!(sim.animate());
    assert_eq!(sim.log().len(), steps.lock().len());
}

#[test]
fn test_solve_is_undoable() {
    let mut sim = scrambled(11);
    let start = sim.state().clone();
    let stats = solve(&mut sim).unwrap();
    assert!(stats.phases.iter().any(|p| p.label == "bottom cross"));
    sim.undo_all();
    assert_eq!(&start, sim.state());
}

#[test]
fn test_error_messages() {
    let e = SolveError::UnhandledCase {
        phase: "top 1",
        cell: Cell::new(Face::U, 0, 1),
    };
    assert!(e.to_string().starts_with("top 1: "));
}

proptest! {
    #[test]
    fn proptest_solve(seed: u64) {
        let mut sim = scrambled(seed);
        prop_assert!(solve(&mut sim).is_ok());
        prop_assert!(sim.is_solved());
    }
}
