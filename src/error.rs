//! Error types for searching and editing.
//!
//! "No path" is not an error: searches report it as `Ok(None)`.

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors raised by [GridModel](crate::grid_model::GridModel) and the search engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("coordinate {coordinate} lies outside the {size}x{size} grid")]
    InvalidCoordinate { coordinate: Coordinate, size: usize },

    #[error("unknown algorithm {0:?}, expected one of BFS, DFS, UCS, Greedy, A*")]
    UnknownAlgorithm(String),
}

/// What already occupies a cell the editor was asked to place something on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Robot,
    Goal,
    Obstacle,
}

impl core::fmt::Display for Occupant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Occupant::Robot => write!(f, "robot"),
            Occupant::Goal => write!(f, "goal"),
            Occupant::Obstacle => write!(f, "obstacle"),
        }
    }
}

/// Errors raised by [GridEditor](crate::editor::GridEditor).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Coordinate),

    #[error("cell {cell} is already occupied by the {occupant}")]
    CellOccupied { cell: Coordinate, occupant: Occupant },

    #[error("place both the robot and the goal on the grid")]
    MissingEndpoints,

    #[error(transparent)]
    Search(#[from] SearchError),
}
