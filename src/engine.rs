use log::debug;

use crate::algorithm::Algorithm;
use crate::coordinate::Coordinate;
use crate::error::SearchError;
use crate::grid_model::GridModel;
use crate::path::Path;
use crate::search_context::SearchContext;

/// Result of [SearchEngine::trace]: the path, if any, and every cell expanded on the way in
/// expansion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTrace {
    pub path: Option<Path>,
    pub expanded: Vec<Coordinate>,
}

/// Runs searches on a [GridModel], reusing its buffers between calls. The grid is borrowed
/// immutably for the whole search, so it cannot change half way through.
#[derive(Debug, Default)]
pub struct SearchEngine {
    context: SearchContext,
}

impl SearchEngine {
    pub fn new() -> SearchEngine {
        SearchEngine::default()
    }

    /// Searches for a path from `start` to `goal` with `algorithm`. `Ok(None)` means no path
    /// exists under the current obstacles. Fails fast if either endpoint is off the grid.
    pub fn search(
        &mut self,
        algorithm: Algorithm,
        grid: &GridModel,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Option<Path>, SearchError> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        debug!("{}: searching from {} to {}", algorithm, start, goal);
        Ok(algorithm.run(&mut self.context, grid, start, goal))
    }

    /// Like [search](Self::search) but selects the algorithm by name.
    pub fn search_by_name(
        &mut self,
        name: &str,
        grid: &GridModel,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Option<Path>, SearchError> {
        self.search(name.parse()?, grid, start, goal)
    }

    /// Like [search](Self::search) but also reports which cells were expanded.
    pub fn trace(
        &mut self,
        algorithm: Algorithm,
        grid: &GridModel,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<SearchTrace, SearchError> {
        let path = self.search(algorithm, grid, start, goal)?;
        Ok(SearchTrace {
            path,
            expanded: self.context.expanded().copied().collect(),
        })
    }
}

/// One-off search with a fresh [SearchEngine].
pub fn search(
    algorithm: Algorithm,
    grid: &GridModel,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Option<Path>, SearchError> {
    SearchEngine::new().search(algorithm, grid, start, goal)
}

/// One-off search selecting the algorithm by one of the names `BFS`, `DFS`, `UCS`, `Greedy`, `A*`.
pub fn search_by_name(
    name: &str,
    grid: &GridModel,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Option<Path>, SearchError> {
    SearchEngine::new().search_by_name(name, grid, start, goal)
}
