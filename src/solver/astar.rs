use crate::coordinate::Coordinate;
use crate::search_context::PriorityFrontier;
use crate::solver::{heuristic, GridSolver};

/// A* search. Partial paths are ranked by `(f, g)` where `g` is the number of moves so far and
/// `f = g + h`. Comparing the tuple lexicographically breaks ties on `f` towards the cheaper
/// path; remaining ties fall back to insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier<(u32, u32)>;

    fn name(&self) -> &'static str {
        "A*"
    }

    fn key(&self, node: &Coordinate, cost: u32, goal: &Coordinate) -> (u32, u32) {
        (cost + heuristic(node, goal), cost)
    }
}
