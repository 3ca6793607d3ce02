use serde::{Deserialize, Serialize};

/// Rendering hints. These have no effect on the cube itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayPrefs {
    /// Whether to shade stickers by their home slot.
    pub shade: bool,
    /// Whether to print slot numbers on stickers.
    pub number: bool,
    /// Whether to show three faces at once.
    pub show3: bool,
}
impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            shade: true,
            number: false,
            show3: false,
        }
    }
}
