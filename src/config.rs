use crate::algorithm::Algorithm;
use crate::GRID_SIZE;

/// Settings an editing session starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EditorConfig {
    /// Width and height of the grid in cells.
    pub grid_size: usize,
    /// Algorithm selected when the session starts.
    pub algorithm: Algorithm,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            algorithm: Algorithm::Bfs,
        }
    }
}
