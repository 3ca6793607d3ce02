use std::time::Duration;

use rubik_core::{CubeState, Step};
use rubik_view::{AnimationFuture, Animator, DelayAnimator};

/// Animator that prints each move and the resulting net, then waits.
#[derive(Debug, Copy, Clone)]
pub(crate) struct TerminalAnimator {
    delay: DelayAnimator,
}
impl TerminalAnimator {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            delay: DelayAnimator::new(duration),
        }
    }
}
impl Animator for TerminalAnimator {
    fn animate(&mut self, cube: &CubeState, step: Step) -> AnimationFuture {
        let mut after = cube.clone();
        after.apply(step);
        println!("{step}\n{after}");
        self.delay.animate(cube, step)
    }
}
