use crate::coordinate::Coordinate;
use crate::search_context::FifoFrontier;
use crate::solver::GridSolver;

/// Breadth-first search. Partial paths are expanded in the order they were pushed, so the first
/// path to reach the goal has the fewest moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier;

    fn name(&self) -> &'static str {
        "BFS"
    }

    fn key(&self, _: &Coordinate, _: u32, _: &Coordinate) {}
}
