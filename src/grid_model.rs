use core::fmt;
use fxhash::FxHashSet;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coordinate::Coordinate;
use crate::error::SearchError;
use crate::N_SMALLVEC_SIZE;

/// [GridModel] is a square grid of `size` x `size` cells together with the set of blocked cells.
/// In addition it maintains information about connected components of free cells using a
/// [UnionFind] structure, which callers can query through [reachable](Self::reachable).
#[derive(Clone, Debug)]
pub struct GridModel {
    size: usize,
    obstacles: FxHashSet<Coordinate>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for GridModel {
    fn default() -> GridModel {
        GridModel::new(crate::GRID_SIZE)
    }
}

impl GridModel {
    /// Creates an obstacle-free grid. A grid of size 0 has no valid coordinates.
    pub fn new(size: usize) -> GridModel {
        let mut grid = GridModel {
            size,
            obstacles: FxHashSet::default(),
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.size && (c.y as usize) < self.size
    }

    /// Fails with [SearchError::InvalidCoordinate] if `c` is off the grid.
    pub fn check_bounds(&self, c: Coordinate) -> Result<(), SearchError> {
        if self.in_bounds(c) {
            Ok(())
        } else {
            Err(SearchError::InvalidCoordinate {
                coordinate: c,
                size: self.size,
            })
        }
    }

    /// The in-bounds orthogonal neighbours of `c` in the fixed order left, right, up, down.
    /// Obstacles are not filtered here; that is up to the caller.
    pub fn neighbors(&self, c: Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        c.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.in_bounds(*n))
            .collect()
    }

    /// In bounds and not blocked.
    pub fn can_move_to(&self, c: Coordinate) -> bool {
        self.in_bounds(c) && !self.is_obstacle(c)
    }

    pub fn is_obstacle(&self, c: Coordinate) -> bool {
        self.obstacles.contains(&c)
    }

    /// Blocks a cell, returning whether it was free before. Blocking may split a component, so
    /// the components are flagged as dirty.
    pub fn add_obstacle(&mut self, c: Coordinate) -> Result<bool, SearchError> {
        self.check_bounds(c)?;
        let added = self.obstacles.insert(c);
        if added {
            self.components_dirty = true;
        }
        Ok(added)
    }

    /// Frees a cell, returning whether it was blocked. Joins the cell with the components of its
    /// free neighbours.
    pub fn remove_obstacle(&mut self, c: Coordinate) -> bool {
        if !self.obstacles.remove(&c) {
            return false;
        }
        let ix = self.get_ix(c);
        for n in self.neighbors(c) {
            if !self.is_obstacle(n) {
                let n_ix = self.get_ix(n);
                self.components.union(ix, n_ix);
            }
        }
        true
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
        self.generate_components();
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Coordinate> {
        self.obstacles.iter()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }

    fn get_ix(&self, c: Coordinate) -> usize {
        c.y as usize * self.size + c.x as usize
    }

    /// Retrieves the component id a given free [Coordinate] belongs to.
    pub fn get_component(&self, c: &Coordinate) -> usize {
        self.components.find(self.get_ix(*c))
    }

    /// Checks if `start` and `goal` are free cells on the same connected component.
    /// Call [update](Self::update) first if obstacles were added since the last generation.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if `start` and `goal` are not on the same component of free cells.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            !self
                .components
                .equiv(self.get_ix(*start), self.get_ix(*goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components for {0}x{0} grid", self.size);
        self.components = UnionFind::new(self.size * self.size);
        self.components_dirty = false;
        let size = self.size as i32;
        for y in 0..size {
            for x in 0..size {
                let c = Coordinate::new(x, y);
                if self.is_obstacle(c) {
                    continue;
                }
                let ix = self.get_ix(c);
                // Looking right and down is enough to cover every edge once.
                for n in [Coordinate::new(x + 1, y), Coordinate::new(x, y + 1)] {
                    if self.can_move_to(n) {
                        let n_ix = self.get_ix(n);
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.size as i32;
        for y in 0..size {
            let row = (0..size)
                .map(|x| {
                    if self.is_obstacle(Coordinate::new(x, y)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
