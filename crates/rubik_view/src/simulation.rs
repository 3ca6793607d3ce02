use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rubik_core::notation::parse_notation;
use rubik_core::{
    CubeState, Cursor, Direction, Face, ScriptMove, Slice, Step, TOPOLOGY, Twist, TwistDirection,
    ValidationError,
};
use rubik_prefs::SimPrefs;
use smallvec::SmallVec;

use crate::{Animator, CommandLog, NoAnimation};

/// Cube simulation, which manages the cube state, command log, animation,
/// and selection cursor.
#[derive(Debug)]
pub struct CubeSimulation {
    /// Latest cube state.
    state: CubeState,
    /// Behavior toggles.
    prefs: SimPrefs,
    /// Undo/redo history.
    log: CommandLog,
    /// Presents each move before it is applied.
    animator: Box<dyn Animator>,
    /// Selected cell.
    cursor: Cursor,
}
impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(SimPrefs::default())
    }
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube and no animation.
    pub fn new(prefs: SimPrefs) -> Self {
        Self {
            state: CubeState::new_solved(),
            log: CommandLog::new(prefs.group_undo),
            prefs,
            animator: Box::new(NoAnimation),
            cursor: Cursor::default(),
        }
    }
    /// Replaces the animator.
    #[must_use]
    pub fn with_animator(mut self, animator: impl Animator + 'static) -> Self {
        self.set_animator(animator);
        self
    }
    /// Replaces the animator.
    pub fn set_animator(&mut self, animator: impl Animator + 'static) {
        self.animator = Box::new(animator);
    }

    /// Returns the latest cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the command log.
    pub fn log(&self) -> &CommandLog {
        &self.log
    }
    /// Returns the preferences.
    pub fn prefs(&self) -> &SimPrefs {
        &self.prefs
    }
    /// Returns the selection cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns whether moves wait for the animator.
    pub fn animate(&self) -> bool {
        self.prefs.animate
    }
    /// Sets whether moves wait for the animator.
    pub fn set_animate(&mut self, animate: bool) {
        self.prefs.animate = animate;
    }
    /// Sets whether grouped moves undo as one unit.
    pub fn set_group_undo(&mut self, group_undo: bool) {
        self.prefs.group_undo = group_undo;
        self.log.set_grouping(group_undo);
    }
    /// Sets whether the cube is checked for consistency after every move.
    pub fn set_validate(&mut self, validate: bool) {
        self.prefs.validate = validate;
    }

    /// Twists a face a quarter turn.
    pub fn twist(&mut self, face: Face, direction: TwistDirection) {
        self.do_step(Step::Twist(Twist::new(face, direction)));
    }
    /// Twists a face a half turn, recorded as two quarter turns.
    pub fn twist_double(&mut self, face: Face) {
        self.twist(face, TwistDirection::Cw);
        self.twist(face, TwistDirection::Cw);
    }
    /// Moves row or column `index` of `face` in `direction`.
    ///
    /// Outer rows and columns are recorded as a twist of the neighboring
    /// face. An `index` outside the face is ignored with a warning and not
    /// recorded.
    pub fn slice(&mut self, face: Face, direction: Direction, index: u8) {
        let slice = Slice::new(face, direction, index);
        if !slice.in_range() {
            log::warn!("ignoring slice {slice}: no line {index} on face {face}");
            return;
        }
        self.do_step(slice.canonical(&self.state));
    }
    /// Moves row or column `index` of `face` twice in `direction`.
    pub fn slice_double(&mut self, face: Face, direction: Direction, index: u8) {
        self.slice(face, direction, index);
        self.slice(face, direction, index);
    }
    /// Rotates the whole cube by moving every line of the front face in
    /// `direction`.
    pub fn rotate_cube(&mut self, direction: Direction) {
        for index in 0..3 {
            self.slice(Face::F, direction, index);
        }
    }

    /// Executes face notation such as `R U R' U'`, skipping anything that is
    /// not a face turn.
    pub fn execute(&mut self, notation: &str) {
        for turn in parse_notation(notation) {
            for twist in turn.twists() {
                self.do_step(Step::Twist(twist));
            }
        }
    }
    /// Executes a parsed move script, with `current` standing in for the
    /// placeholder face.
    pub fn run_script(&mut self, script: &[ScriptMove], current: Face) {
        for &m in script {
            match m {
                ScriptMove::Turn { .. } => {
                    let twists: SmallVec<[Twist; 2]> =
                        m.face_turn(current).map(|t| t.twists()).unwrap_or_default();
                    for twist in twists {
                        self.do_step(Step::Twist(twist));
                    }
                }
                ScriptMove::Slice(slice) => self.slice(slice.face, slice.direction, slice.index),
            }
        }
    }

    /// Starts a group of moves that undo as one unit.
    pub fn begin_group(&mut self) {
        self.log.begin_group();
    }
    /// Finishes the innermost group of moves.
    pub fn end_group(&mut self) {
        self.log.end_group();
    }

    /// Undoes the most recent entry. Returns `false` if there was nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.log.undo() else {
            return false;
        };
        for step in entry.steps().into_iter().rev() {
            self.perform(step.inverse());
        }
        true
    }
    /// Redoes the most recently undone entry. Returns `false` if there was
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.log.redo() else {
            return false;
        };
        for step in entry.steps() {
            self.perform(step);
        }
        true
    }
    /// Undoes everything in the log.
    pub fn undo_all(&mut self) {
        while self.undo() {}
    }
    /// Redoes everything that has been undone.
    pub fn redo_all(&mut self) {
        while self.redo() {}
    }
    /// Discards the command log without changing the cube.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Resets the cube to the solved state and discards the log.
    pub fn reset(&mut self) {
        self.state.reset();
        self.log.clear();
        self.cursor = Cursor::default();
    }

    /// Scrambles the cube with a random seed and returns the seed.
    pub fn randomize(&mut self) -> u64 {
        let seed = rand::rng().random();
        self.randomize_with_seed(seed);
        seed
    }
    /// Scrambles the cube deterministically from `seed`, then discards the
    /// log.
    ///
    /// Each random move picks a face, one of six operations (four slice
    /// directions and two twist directions), and a line index. The scramble
    /// stops early if the cube becomes inconsistent.
    pub fn randomize_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let animate = std::mem::replace(&mut self.prefs.animate, false);

        let moves = self.prefs.scramble_moves;
        for i in 0..moves {
            let face = Face::ALL[rng.random_range(0..Face::COUNT)];
            let op = rng.random_range(0..6);
            let index = rng.random_range(0..3);
            let step = match op {
                0 => Slice::new(face, Direction::Up, index).canonical(&self.state),
                1 => Slice::new(face, Direction::Down, index).canonical(&self.state),
                2 => Slice::new(face, Direction::Left, index).canonical(&self.state),
                3 => Slice::new(face, Direction::Right, index).canonical(&self.state),
                4 => Step::Twist(Twist::new(face, TwistDirection::Cw)),
                _ => Step::Twist(Twist::new(face, TwistDirection::Ccw)),
            };
            self.perform(step);
            if let Err(e) = self.state.validate() {
                log::warn!("scramble stopped after move {} of {moves} ({step}): {e}", i + 1);
                break;
            }
        }
        log::debug!("scrambled with seed {seed}");

        self.log.clear();
        self.prefs.animate = animate;
    }

    /// Moves the cursor one cell in `direction`, possibly onto another face.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.step(&TOPOLOGY, direction);
    }
    /// Moves the line through the cursor in `direction`, as seen by the
    /// cursor. Horizontal moves use the cursor's row and vertical moves use
    /// its column.
    pub fn cursor_slice(&mut self, direction: Direction) {
        let cell = self.cursor.cell;
        let direction = self.cursor.local_direction(direction);
        let index = if direction.is_horizontal() {
            cell.row
        } else {
            cell.col
        };
        self.slice(cell.face, direction, index);
    }
    /// Twists the face under the cursor.
    pub fn cursor_twist(&mut self, direction: TwistDirection) {
        self.twist(self.cursor.cell.face, direction);
    }

    /// Checks the cube for consistency.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.state.validate()
    }
    /// Returns whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Applies a user-level move, records it, and validates if enabled.
    fn do_step(&mut self, step: Step) {
        self.perform(step);
        self.log.record(step);
        if self.prefs.validate {
            // Failures are logged by `validate()`.
            let _ = self.state.validate();
        }
    }
    /// Waits for the animation if enabled, then applies a move without
    /// recording it.
    fn perform(&mut self, step: Step) {
        if self.prefs.animate {
            pollster::block_on(self.animator.animate(&self.state, step));
        }
        self.state.apply(step);
    }
}
