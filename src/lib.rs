//! # grid_search
//!
//! Route finding for a robot on a square grid with blocked cells. Five interchangeable
//! strategies share one grid model and one expansion loop:
//!
//! | Strategy | Frontier | Ranked by | Shortest path? |
//! |---|---|---|---|
//! | BFS | FIFO queue | insertion order | yes |
//! | DFS | LIFO stack | reverse insertion order | no |
//! | UCS | min-priority queue | moves so far | yes |
//! | Greedy | min-priority queue | Manhattan distance to goal | no |
//! | A* | min-priority queue | (moves + distance, moves) | yes |
//!
//! Movement is 4-directional with unit cost. Neighbours are always expanded left, right, up,
//! down, and priority queues pop equal keys in insertion order, so every search is
//! deterministic. A cell is marked visited when popped, not when pushed.
//!
//! ```
//! use grid_search::{search, Algorithm, Coordinate, GridModel};
//!
//! let mut grid = GridModel::new(5);
//! grid.add_obstacle(Coordinate::new(1, 0)).unwrap();
//! let path = search(Algorithm::Astar, &grid, Coordinate::new(0, 0), Coordinate::new(2, 0))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.steps(), 4);
//! ```
pub mod algorithm;
pub mod config;
pub mod coordinate;
pub mod editor;
pub mod engine;
pub mod error;
pub mod grid_model;
pub mod path;
pub mod search_context;
pub mod solver;

pub use algorithm::Algorithm;
pub use config::EditorConfig;
pub use coordinate::Coordinate;
pub use editor::{EditAction, GridEditor, PlacementMode};
pub use engine::{search, search_by_name, SearchEngine, SearchTrace};
pub use error::{EditorError, Occupant, SearchError};
pub use grid_model::GridModel;
pub use path::Path;

/// Default grid dimension.
pub const GRID_SIZE: usize = 20;
/// A cell has at most four orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
