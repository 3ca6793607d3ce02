use serde::{Deserialize, Serialize};

/// Preferences that change how the simulation behaves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SimPrefs {
    /// Whether to wait for an animation before applying each move.
    pub animate: bool,
    /// Whether moves made together (such as one solver phase) undo as a
    /// single step.
    pub group_undo: bool,
    /// Whether to check the cube for consistency after every move.
    pub validate: bool,
    /// Number of random moves in a scramble.
    pub scramble_moves: u32,
    /// Duration of each move animation, in milliseconds.
    pub animation_ms: u64,
}
impl Default for SimPrefs {
    fn default() -> Self {
        Self {
            animate: false,
            group_undo: true,
            validate: false,
            scramble_moves: 30,
            animation_ms: 500,
        }
    }
}
