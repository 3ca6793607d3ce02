use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use rubik_core::{CubeState, Direction, Face, Slice, Step, Twist, TwistDirection};
use rubik_prefs::SimPrefs;

use crate::*;

fn twist(face: Face, direction: TwistDirection) -> Step {
    Step::Twist(Twist::new(face, direction))
}

/// Animator that remembers each step along with the state it was about to be
/// applied to.
#[derive(Debug, Default, Clone)]
struct RecordingAnimator {
    seen: Arc<Mutex<Vec<(Step, CubeState)>>>,
}
impl Animator for RecordingAnimator {
    fn animate(&mut self, cube: &CubeState, step: Step) -> AnimationFuture {
        self.seen.lock().push((step, cube.clone()));
        Box::pin(std::future::ready(()))
    }
}

#[test]
fn test_group_undoes_as_one_step() {
    let mut sim = CubeSimulation::default();
    sim.begin_group();
    sim.twist(Face::R, TwistDirection::Cw);
    sim.twist(Face::U, TwistDirection::Cw);
    sim.slice(Face::F, Direction::Left, 1);
    sim.end_group();
    let scrambled = sim.state().clone();

    assert_eq!(3, sim.log().len());
    assert_eq!(1, sim.log().entry_count());

    assert!(sim.undo());
    assert!(sim.is_solved());
    assert!(!sim.log().has_undo());
    assert!(sim.log().has_redo());

    assert!(sim.redo());
    assert_eq!(&scrambled, sim.state());
    assert!(!sim.log().has_redo());
}

#[test]
fn test_ungrouped_undo() {
    let mut sim = CubeSimulation::new(SimPrefs {
        group_undo: false,
        ..Default::default()
    });
    sim.begin_group();
    sim.twist(Face::R, TwistDirection::Cw);
    sim.twist(Face::U, TwistDirection::Cw);
    sim.end_group();

    assert_eq!(2, sim.log().entry_count());
    sim.undo();
    assert!(!sim.is_solved());
    sim.undo();
    assert!(sim.is_solved());
}

#[test]
fn test_nested_and_empty_groups() {
    let mut log = CommandLog::new(true);
    log.begin_group();
    log.end_group();
    assert_eq!(0, log.entry_count());

    let r = twist(Face::R, TwistDirection::Cw);
    let u = twist(Face::U, TwistDirection::Ccw);
    log.begin_group();
    log.record(r);
    log.begin_group();
    log.record(u);
    log.end_group();
    log.end_group();

    assert_eq!(1, log.entry_count());
    assert_eq!(2, log.len());
    assert_eq!(vec![r, u], log.steps());
    assert_eq!("(R (U'))", log.to_notation());
    assert_eq!(
        Some(Entry::Group(vec![
            Entry::Step(r),
            Entry::Group(vec![Entry::Step(u)]),
        ])),
        log.undo(),
    );
}

#[test]
fn test_out_of_range_slice_is_not_recorded() {
    let mut sim = CubeSimulation::default();
    sim.slice(Face::F, Direction::Left, 3);
    sim.slice_double(Face::R, Direction::Up, 200);
    assert!(sim.is_solved());
    assert!(sim.log().is_empty());
}

#[test]
fn test_record_clears_redo() {
    let mut sim = CubeSimulation::default();
    sim.twist(Face::F, TwistDirection::Cw);
    sim.undo();
    assert!(sim.log().has_redo());
    sim.twist(Face::B, TwistDirection::Cw);
    assert!(!sim.log().has_redo());
    assert!(!sim.redo());
}

#[test]
fn test_undo_closes_open_group() {
    let mut sim = CubeSimulation::default();
    sim.begin_group();
    sim.twist(Face::L, TwistDirection::Ccw);
    sim.twist(Face::D, TwistDirection::Cw);
    assert!(sim.log().has_undo());
    assert!(sim.undo());
    assert!(sim.is_solved());
    assert!(!sim.log().has_undo());
}

#[test]
fn test_execute_and_undo_all() {
    let mut sim = CubeSimulation::default();
    sim.execute("R U R' U' F2 ?? B'");
    assert_eq!(7, sim.log().len());
    assert!(!sim.is_solved());
    sim.undo_all();
    assert!(sim.is_solved());
    sim.redo_all();
    assert_eq!(7, sim.log().len());
    assert!(!sim.is_solved());
}

#[test]
fn test_sexy_move_through_simulation() {
    let mut sim = CubeSimulation::default();
    for _ in 0..6 {
        sim.execute("R U R' U'");
    }
    assert!(sim.is_solved());
    assert_eq!(24, sim.log().len());
}

#[test]
fn test_rotate_cube() {
    let mut sim = CubeSimulation::default();
    sim.rotate_cube(Direction::Left);
    assert!(!sim.is_solved());
    assert!(sim.state().is_color_solved());
    assert_eq!(
        vec![
            twist(Face::U, TwistDirection::Ccw),
            Step::Slice(Slice::new(Face::F, Direction::Left, 1)),
            twist(Face::D, TwistDirection::Cw),
        ],
        sim.log().steps(),
    );
    for _ in 0..3 {
        sim.rotate_cube(Direction::Left);
    }
    assert!(sim.is_solved());
}

#[test]
fn test_animation_precedes_mutation() {
    let animator = RecordingAnimator::default();
    let seen = Arc::clone(&animator.seen);
    let mut sim = CubeSimulation::new(SimPrefs {
        animate: true,
        ..Default::default()
    })
    .with_animator(animator);

    sim.twist(Face::R, TwistDirection::Cw);
    sim.slice(Face::F, Direction::Down, 1);
    sim.undo();
    sim.undo();

    let seen = seen.lock();
    let steps: Vec<Step> = seen.iter().map(|(step, _)| *step).collect();
    let r = twist(Face::R, TwistDirection::Cw);
    let m = Step::Slice(Slice::new(Face::F, Direction::Down, 1));
    assert_eq!(vec![r, m, m.inverse(), r.inverse()], steps);

    // Each animation saw the state from before its own move.
    assert!(seen[0].1.is_solved());
    for window in seen.windows(2) {
        let (step, before) = &window[0];
        let mut after = before.clone();
        after.apply(*step);
        assert_eq!(after, window[1].1);
    }
}

#[test]
fn test_no_animation_when_disabled() {
    let animator = RecordingAnimator::default();
    let seen = Arc::clone(&animator.seen);
    let mut sim = CubeSimulation::default().with_animator(animator);
    sim.execute("F B");
    assert!(seen.lock().is_empty());
}

#[test]
fn test_delay_animator_completes() {
    let mut animator = DelayAnimator::new(Duration::from_millis(1));
    let cube = CubeState::new_solved();
    pollster::block_on(animator.animate(&cube, twist(Face::F, TwistDirection::Cw)));

    let mut sim = CubeSimulation::new(SimPrefs {
        animate: true,
        ..Default::default()
    })
    .with_animator(animator);
    sim.execute("F F'");
    assert!(sim.is_solved());
}

#[test]
fn test_randomize_is_deterministic() {
    let mut a = CubeSimulation::default();
    let mut b = CubeSimulation::default();
    a.randomize_with_seed(42);
    b.randomize_with_seed(42);

    assert_eq!(a.state(), b.state());
    assert!(!a.is_solved());
    assert!(a.validate().is_ok());
    assert!(a.log().is_empty());
    assert!(!a.animate());

    a.reset();
    assert!(a.is_solved());
}

#[test]
fn test_randomize_restores_animation() {
    let animator = RecordingAnimator::default();
    let seen = Arc::clone(&animator.seen);
    let mut sim = CubeSimulation::new(SimPrefs {
        animate: true,
        ..Default::default()
    })
    .with_animator(animator);
    sim.randomize();
    assert!(seen.lock().is_empty());
    assert!(sim.animate());
}

#[test]
fn test_cursor_moves() {
    let mut sim = CubeSimulation::default();
    sim.move_cursor(Direction::Up);
    assert_eq!(0, sim.cursor().cell.row);

    // Top row of the front face moving left is a twist of the up face.
    sim.cursor_slice(Direction::Left);
    assert_eq!(vec![twist(Face::U, TwistDirection::Ccw)], sim.log().steps());

    sim.cursor_twist(TwistDirection::Cw);
    assert_eq!(
        Some(&twist(Face::F, TwistDirection::Cw)),
        sim.log().steps().last(),
    );

    sim.undo_all();
    assert!(sim.is_solved());
}
