use crate::coordinate::Coordinate;
use crate::grid_model::GridModel;
use crate::path::Path;
use crate::search_context::{Frontier, SearchContext};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;
pub mod uniform_cost;

/// Manhattan distance, the heuristic used by the informed solvers. Admissible and consistent
/// on a 4-connected grid with unit step cost.
pub fn heuristic(p1: &Coordinate, p2: &Coordinate) -> u32 {
    p1.manhattan_distance(p2)
}

/// A search strategy over a [GridModel]. Strategies differ only in the frontier they expand
/// from and the key each pushed partial path is ranked by; the expansion loop itself lives in
/// [SearchContext::search].
pub trait GridSolver {
    type Frontier: Frontier;

    /// Short display name, matching the name [Algorithm](crate::Algorithm) parses.
    fn name(&self) -> &'static str;

    /// Key for a partial path ending at `node` after `cost` moves.
    fn key(
        &self,
        node: &Coordinate,
        cost: u32,
        goal: &Coordinate,
    ) -> <Self::Frontier as Frontier>::Key;

    /// Computes a path from `start` to `goal` using a fresh [SearchContext].
    /// Bounds are not checked here; see [SearchEngine](crate::SearchEngine) for the checked entry point.
    fn get_path(&self, grid: &GridModel, start: Coordinate, goal: Coordinate) -> Option<Path>
    where
        Self: Sized,
    {
        SearchContext::new().search(self, grid, start, goal)
    }
}
