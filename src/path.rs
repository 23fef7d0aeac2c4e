use core::fmt;
use itertools::Itertools;

use crate::coordinate::Coordinate;
use crate::grid_model::GridModel;

/// A route from start to goal, both inclusive. Consecutive cells are 4-adjacent and no cell repeats.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Coordinate>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Coordinate>) -> Path {
        debug_assert!(!cells.is_empty());
        Path { cells }
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }
    /// Number of cells, including start and goal.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Number of moves, one less than [len](Self::len).
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
    pub fn start(&self) -> Coordinate {
        self.cells[0]
    }
    pub fn goal(&self) -> Coordinate {
        self.cells[self.cells.len() - 1]
    }
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.cells.contains(c)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.cells.iter()
    }
    pub fn into_vec(self) -> Vec<Coordinate> {
        self.cells
    }

    /// Checks that this is a legal route from `start` to `goal` on `grid`: correct endpoints,
    /// unit orthogonal moves, every cell in bounds, no repeated cell and no obstacle other than
    /// the start itself (a blocked start is still explored).
    pub fn is_valid_on(&self, grid: &GridModel, start: Coordinate, goal: Coordinate) -> bool {
        if self.cells.is_empty() || self.start() != start || self.goal() != goal {
            return false;
        }
        let adjacent = self
            .cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b));
        let legal_cells = self
            .cells
            .iter()
            .enumerate()
            .all(|(i, c)| grid.in_bounds(*c) && (i == 0 || !grid.is_obstacle(*c)));
        adjacent && legal_cells && self.cells.iter().all_unique()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Path {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cells.iter().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(i32, i32)]) -> Path {
        Path::new(cells.iter().map(|&c| c.into()).collect())
    }

    #[test]
    fn accessors() {
        let p = path(&[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), Coordinate::new(0, 0));
        assert_eq!(p.goal(), Coordinate::new(1, 1));
        assert!(p.contains(&Coordinate::new(1, 0)));
        assert_eq!(p.to_string(), "(0, 0) -> (1, 0) -> (1, 1)");
    }

    #[test]
    fn validity() {
        let mut grid = GridModel::new(3);
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(1, 1);
        assert!(path(&[(0, 0), (1, 0), (1, 1)]).is_valid_on(&grid, start, goal));
        // Diagonal move
        assert!(!path(&[(0, 0), (1, 1)]).is_valid_on(&grid, start, goal));
        // Wrong endpoint
        assert!(!path(&[(0, 0), (1, 0)]).is_valid_on(&grid, start, goal));
        // Repeated cell
        assert!(!path(&[(0, 0), (1, 0), (0, 0), (0, 1), (1, 1)]).is_valid_on(&grid, start, goal));
        grid.add_obstacle(Coordinate::new(1, 0)).unwrap();
        assert!(!path(&[(0, 0), (1, 0), (1, 1)]).is_valid_on(&grid, start, goal));
        // A blocked start is allowed
        grid.add_obstacle(start).unwrap();
        assert!(path(&[(0, 0), (0, 1), (1, 1)]).is_valid_on(&grid, start, goal));
    }
}
