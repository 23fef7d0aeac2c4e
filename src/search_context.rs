//! The search loop shared by every solver, along with the frontier structures it runs on.
//!
//! Every push onto a frontier appends a [PathNode] to an arena. The node holds the index of the
//! node it was expanded from, so following parents from any node yields exactly the partial path
//! that was pushed, without storing a copy of that path per frontier entry.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::{debug, info};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::coordinate::Coordinate;
use crate::grid_model::GridModel;
use crate::path::Path;
use crate::solver::GridSolver;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

/// One pushed partial path: its last cell, the node it extends and its length in moves.
#[derive(Clone, Copy, Debug)]
pub struct PathNode {
    pub pos: Coordinate,
    pub parent: usize,
    pub cost: u32,
}

/// The set of partial paths awaiting expansion, referenced by arena index.
pub trait Frontier: Default {
    type Key;

    fn push(&mut self, key: Self::Key, node: usize);
    fn pop(&mut self) -> Option<usize>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Keys are ignored.
#[derive(Default, Debug)]
pub struct FifoFrontier {
    queue: VecDeque<usize>,
}

impl Frontier for FifoFrontier {
    type Key = ();

    fn push(&mut self, _: (), node: usize) {
        self.queue.push_back(node);
    }
    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Keys are ignored.
#[derive(Default, Debug)]
pub struct LifoFrontier {
    stack: Vec<usize>,
}

impl Frontier for LifoFrontier {
    type Key = ();

    fn push(&mut self, _: (), node: usize) {
        self.stack.push(node);
    }
    fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

struct SmallestKeyHolder<K> {
    key: K,
    seq: usize,
    node: usize,
}

impl<K: Ord> Eq for SmallestKeyHolder<K> {}

impl<K: Ord> PartialEq for SmallestKeyHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestKeyHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestKeyHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest key wins, and among equal keys the entry
        // pushed first wins.
        match other.key.cmp(&self.key) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Min-priority queue that pops the smallest key first and is stable among equal keys.
pub struct PriorityFrontier<K> {
    heap: BinaryHeap<SmallestKeyHolder<K>>,
    seq: usize,
}

impl<K: Ord> Default for PriorityFrontier<K> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<K: Ord> Frontier for PriorityFrontier<K> {
    type Key = K;

    fn push(&mut self, key: K, node: usize) {
        self.heap.push(SmallestKeyHolder {
            key,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }
    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|holder| holder.node)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Buffers reused across searches: the node arena and the visited set. The visited set keeps
/// insertion order, so after a search it lists cells in the order they were expanded.
#[derive(Debug, Default)]
pub struct SearchContext {
    pub nodes: Vec<PathNode>,
    pub visited: FxIndexSet<Coordinate>,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.visited.clear();
    }

    /// Cells expanded by the last search, in expansion order.
    pub fn expanded(&self) -> impl Iterator<Item = &Coordinate> {
        self.visited.iter()
    }

    /// Runs `solver` from `start` to `goal`. A cell is marked visited when it is popped, not when
    /// it is pushed, so it may sit on the frontier several times but is expanded at most once.
    /// The start is seeded without checking it for an obstacle; neighbours that are obstacles
    /// are never pushed.
    pub fn search<S: GridSolver>(
        &mut self,
        solver: &S,
        grid: &GridModel,
        start: Coordinate,
        goal: Coordinate,
    ) -> Option<Path> {
        self.clear();
        let mut frontier = S::Frontier::default();
        self.nodes.push(PathNode {
            pos: start,
            parent: NO_PARENT,
            cost: 0,
        });
        frontier.push(solver.key(&start, 0, &goal), 0);

        while let Some(index) = frontier.pop() {
            let PathNode { pos, cost, .. } = self.nodes[index];
            if !self.visited.insert(pos) {
                continue;
            }
            if pos == goal {
                debug!(
                    "{}: reached {} after expanding {} cells",
                    solver.name(),
                    goal,
                    self.visited.len()
                );
                return Some(self.reverse_path(index));
            }
            for successor in grid.neighbors(pos) {
                if self.visited.contains(&successor) || grid.is_obstacle(successor) {
                    continue;
                }
                let new_cost = cost + 1;
                let n = self.nodes.len();
                self.nodes.push(PathNode {
                    pos: successor,
                    parent: index,
                    cost: new_cost,
                });
                frontier.push(solver.key(&successor, new_cost, &goal), n);
            }
        }
        info!(
            "{}: no path from {} to {} ({} cells expanded)",
            solver.name(),
            start,
            goal,
            self.visited.len()
        );
        None
    }

    fn reverse_path(&self, end: usize) -> Path {
        let mut cells: Vec<Coordinate> =
            std::iter::successors(Some(end), |&i| match self.nodes[i].parent {
                NO_PARENT => None,
                parent => Some(parent),
            })
            .map(|i| self.nodes[i].pos)
            .collect();
        cells.reverse();
        Path::new(cells)
    }
}
