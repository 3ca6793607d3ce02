//! Cube simulation controller, to ensure consistent behavior across
//! frontends.
//!
//! [`CubeSimulation`] owns the cube state and is the only way to mutate it.
//! Every move goes through the command log so that it can be undone, and
//! through the [`Animator`] so that a frontend can show it.

mod animation;
mod history;
mod simulation;

#[cfg(test)]
mod tests;

pub use animation::{AnimationFuture, Animator, DelayAnimator, NoAnimation};
pub use history::{CommandLog, Entry};
pub use simulation::CubeSimulation;
