use crate::coordinate::Coordinate;
use crate::search_context::LifoFrontier;
use crate::solver::GridSolver;

/// Depth-first search. The most recently pushed partial path is expanded next, which makes the
/// last neighbour in expansion order (down) the preferred direction. Paths are valid but
/// generally not shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = LifoFrontier;

    fn name(&self) -> &'static str {
        "DFS"
    }

    fn key(&self, _: &Coordinate, _: u32, _: &Coordinate) {}
}
