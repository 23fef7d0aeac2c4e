use crate::coordinate::Coordinate;
use crate::search_context::PriorityFrontier;
use crate::solver::{heuristic, GridSolver};

/// Greedy best-first search. Partial paths are ranked by the heuristic distance of their last
/// cell to the goal alone, ignoring the cost already spent, so the result is not optimal.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    type Frontier = PriorityFrontier<u32>;

    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn key(&self, node: &Coordinate, _: u32, goal: &Coordinate) -> u32 {
        heuristic(node, goal)
    }
}
