use crate::coordinate::Coordinate;
use crate::search_context::PriorityFrontier;
use crate::solver::GridSolver;

/// Uniform-cost search keyed on the number of moves so far. With unit step cost this expands
/// in the same order as breadth-first search, but tracks the cost explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCostSolver;

impl GridSolver for UniformCostSolver {
    type Frontier = PriorityFrontier<u32>;

    fn name(&self) -> &'static str {
        "UCS"
    }

    fn key(&self, _: &Coordinate, cost: u32, _: &Coordinate) -> u32 {
        cost
    }
}
