use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

use parking_lot::Mutex;
use rubik_core::{CubeState, Step};

/// Future that resolves when an animation has finished.
pub type AnimationFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Presents moves to the user before they are applied.
///
/// The simulation awaits the returned future before mutating the cube, so
/// moves are always shown one at a time and in order.
pub trait Animator: fmt::Debug + Send {
    /// Starts animating `step`, which is about to be applied to `cube`.
    fn animate(&mut self, cube: &CubeState, step: Step) -> AnimationFuture;
}

/// Animator that finishes immediately.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoAnimation;
impl Animator for NoAnimation {
    fn animate(&mut self, _cube: &CubeState, _step: Step) -> AnimationFuture {
        Box::pin(std::future::ready(()))
    }
}

/// Animator that waits a fixed duration for each move, timed on a background
/// thread.
#[derive(Debug, Copy, Clone)]
pub struct DelayAnimator {
    /// Time to wait per move.
    pub duration: Duration,
}
impl DelayAnimator {
    /// Constructs an animator that waits `duration` for each move.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}
impl Animator for DelayAnimator {
    fn animate(&mut self, _cube: &CubeState, step: Step) -> AnimationFuture {
        log::trace!("animating {step} for {:?}", self.duration);

        let state = Arc::new(Mutex::new(TimerState::default()));
        let duration = self.duration;
        let timer_state = Arc::clone(&state);
        std::thread::spawn(move || {
            std::thread::sleep(duration);
            let mut state = timer_state.lock();
            state.done = true;
            if let Some(waker) = state.waker.take() {
                waker.wake();
            }
        });
        Box::pin(TimerFuture { state })
    }
}

#[derive(Debug, Default)]
struct TimerState {
    done: bool,
    waker: Option<Waker>,
}

struct TimerFuture {
    state: Arc<Mutex<TimerState>>,
}
impl Future for TimerFuture {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.state.lock();
        if state.done {
            Poll::Ready(())
        } else {
            state.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}
