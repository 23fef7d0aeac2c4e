use core::fmt;
use std::str::FromStr;

use crate::coordinate::Coordinate;
use crate::error::SearchError;
use crate::grid_model::GridModel;
use crate::path::Path;
use crate::search_context::SearchContext;
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BfsSolver;
use crate::solver::dfs::DfsSolver;
use crate::solver::greedy::GreedySolver;
use crate::solver::uniform_cost::UniformCostSolver;
use crate::solver::GridSolver;

/// Selects one of the five search strategies. Parses from and prints as the names
/// `BFS`, `DFS`, `UCS`, `Greedy` and `A*`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    UniformCost,
    Greedy,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::UniformCost,
        Algorithm::Greedy,
        Algorithm::Astar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => BfsSolver.name(),
            Algorithm::Dfs => DfsSolver.name(),
            Algorithm::UniformCost => UniformCostSolver.name(),
            Algorithm::Greedy => GreedySolver.name(),
            Algorithm::Astar => AstarSolver.name(),
        }
    }

    /// Whether the strategy always returns a path with the fewest moves.
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::UniformCost | Algorithm::Astar
        )
    }

    /// Runs the selected solver in `context`. Bounds must have been checked by the caller.
    pub(crate) fn run(
        &self,
        context: &mut SearchContext,
        grid: &GridModel,
        start: Coordinate,
        goal: Coordinate,
    ) -> Option<Path> {
        match self {
            Algorithm::Bfs => context.search(&BfsSolver, grid, start, goal),
            Algorithm::Dfs => context.search(&DfsSolver, grid, start, goal),
            Algorithm::UniformCost => context.search(&UniformCostSolver, grid, start, goal),
            Algorithm::Greedy => context.search(&GreedySolver, grid, start, goal),
            Algorithm::Astar => context.search(&AstarSolver, grid, start, goal),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_owned()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SearchError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Algorithm> for String {
    fn from(a: Algorithm) -> Self {
        a.name().to_owned()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
