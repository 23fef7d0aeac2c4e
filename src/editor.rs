//! An editing session over a [GridModel]: placing the robot, the goal and obstacles, undoing
//! edits, picking an algorithm and keeping the last computed path.
//!
//! This is the state a graphical front end drives. It renders to text through [fmt::Display]
//! and has no drawing dependency of its own.
use core::fmt;
use log::{debug, info, warn};

use crate::algorithm::Algorithm;
use crate::config::EditorConfig;
use crate::coordinate::Coordinate;
use crate::engine::SearchEngine;
use crate::error::{EditorError, Occupant};
use crate::grid_model::GridModel;
use crate::path::Path;

/// What a click on a cell places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementMode {
    Robot,
    #[default]
    Obstacle,
    Goal,
}

/// A recorded edit. Robot and goal moves remember the position they replaced so they can be
/// undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditAction {
    Robot {
        placed: Coordinate,
        previous: Option<Coordinate>,
    },
    Goal {
        placed: Coordinate,
        previous: Option<Coordinate>,
    },
    Obstacle(Coordinate),
}

#[derive(Debug)]
pub struct GridEditor {
    grid: GridModel,
    robot: Option<Coordinate>,
    goal: Option<Coordinate>,
    mode: PlacementMode,
    algorithm: Algorithm,
    history: Vec<EditAction>,
    path: Option<Path>,
    engine: SearchEngine,
}

impl Default for GridEditor {
    fn default() -> GridEditor {
        GridEditor::from_config(&EditorConfig::default())
    }
}

impl GridEditor {
    pub fn new(size: usize) -> GridEditor {
        GridEditor::from_config(&EditorConfig {
            grid_size: size,
            ..EditorConfig::default()
        })
    }

    pub fn from_config(config: &EditorConfig) -> GridEditor {
        GridEditor {
            grid: GridModel::new(config.grid_size),
            robot: None,
            goal: None,
            mode: PlacementMode::default(),
            algorithm: config.algorithm,
            history: Vec::new(),
            path: None,
            engine: SearchEngine::new(),
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }
    pub fn robot(&self) -> Option<Coordinate> {
        self.robot
    }
    pub fn goal(&self) -> Option<Coordinate> {
        self.goal
    }
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn history(&self) -> &[EditAction] {
        &self.history
    }
    /// The path from the last successful [find_path](Self::find_path), cleared by any edit.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn set_mode(&mut self, mode: PlacementMode) {
        self.mode = mode;
    }

    fn occupant(&self, cell: Coordinate) -> Option<Occupant> {
        if self.grid.is_obstacle(cell) {
            Some(Occupant::Obstacle)
        } else if self.robot == Some(cell) {
            Some(Occupant::Robot)
        } else if self.goal == Some(cell) {
            Some(Occupant::Goal)
        } else {
            None
        }
    }

    /// Places whatever the current mode selects on `cell`. The robot and the goal may share a
    /// cell, but neither may share one with an obstacle. Placing an obstacle where one already
    /// is changes nothing and is not recorded.
    pub fn place(&mut self, cell: Coordinate) -> Result<(), EditorError> {
        if !self.grid.in_bounds(cell) {
            warn!("Rejected placement at {}: outside the grid", cell);
            return Err(EditorError::OutOfBounds(cell));
        }
        let action = match (self.mode, self.occupant(cell)) {
            (PlacementMode::Obstacle, Some(Occupant::Obstacle)) => return Ok(()),
            (PlacementMode::Obstacle, Some(occupant))
            | (PlacementMode::Robot | PlacementMode::Goal, Some(occupant @ Occupant::Obstacle)) => {
                warn!("Rejected placement at {}: occupied by the {}", cell, occupant);
                return Err(EditorError::CellOccupied { cell, occupant });
            }
            (PlacementMode::Obstacle, None) => {
                self.grid.add_obstacle(cell)?;
                EditAction::Obstacle(cell)
            }
            (PlacementMode::Robot, _) => EditAction::Robot {
                placed: cell,
                previous: self.robot.replace(cell),
            },
            (PlacementMode::Goal, _) => EditAction::Goal {
                placed: cell,
                previous: self.goal.replace(cell),
            },
        };
        debug!("Applied {:?}", action);
        self.history.push(action);
        self.path = None;
        Ok(())
    }

    /// Reverts the most recent recorded edit and returns it.
    pub fn undo(&mut self) -> Option<EditAction> {
        let action = self.history.pop()?;
        match action {
            EditAction::Robot { previous, .. } => self.robot = previous,
            EditAction::Goal { previous, .. } => self.goal = previous,
            EditAction::Obstacle(cell) => {
                self.grid.remove_obstacle(cell);
            }
        }
        debug!("Undid {:?}", action);
        self.path = None;
        Some(action)
    }

    /// Clears robot, goal, obstacles, history and path. The grid size and the selected
    /// algorithm stay.
    pub fn reset(&mut self) {
        info!("Resetting editor");
        self.grid.clear_obstacles();
        self.robot = None;
        self.goal = None;
        self.history.clear();
        self.path = None;
    }

    /// Searches from the robot to the goal with the selected algorithm and keeps the result.
    /// `Ok(None)` means no path exists.
    pub fn find_path(&mut self) -> Result<Option<&Path>, EditorError> {
        let (Some(start), Some(goal)) = (self.robot, self.goal) else {
            return Err(EditorError::MissingEndpoints);
        };
        self.path = self
            .engine
            .search(self.algorithm, &self.grid, start, goal)?;
        if self.path.is_none() {
            info!("No path found from {} to {}", start, goal);
        }
        Ok(self.path.as_ref())
    }

    /// Switches algorithm, dropping the old path and recomputing it if both endpoints are
    /// placed. The grid itself is left untouched.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<Option<&Path>, EditorError> {
        self.algorithm = algorithm;
        self.path = None;
        if self.robot.is_some() && self.goal.is_some() {
            self.find_path()
        } else {
            Ok(None)
        }
    }

    pub fn set_algorithm_by_name(&mut self, name: &str) -> Result<Option<&Path>, EditorError> {
        let algorithm = name.parse()?;
        self.set_algorithm(algorithm)
    }
}

impl fmt::Display for GridEditor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.grid.size() as i32;
        for y in 0..size {
            let row = (0..size)
                .map(|x| {
                    let c = Coordinate::new(x, y);
                    if self.robot == Some(c) {
                        'R'
                    } else if self.goal == Some(c) {
                        'G'
                    } else if self.grid.is_obstacle(c) {
                        '#'
                    } else if self.path.as_ref().is_some_and(|p| p.contains(&c)) {
                        '*'
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    fn editor_with_endpoints(size: usize, robot: (i32, i32), goal: (i32, i32)) -> GridEditor {
        let mut editor = GridEditor::new(size);
        editor.set_mode(PlacementMode::Robot);
        editor.place(robot.into()).unwrap();
        editor.set_mode(PlacementMode::Goal);
        editor.place(goal.into()).unwrap();
        editor.set_mode(PlacementMode::Obstacle);
        editor
    }

    #[test]
    fn defaults() {
        let editor = GridEditor::default();
        assert_eq!(editor.grid().size(), crate::GRID_SIZE);
        assert_eq!(editor.algorithm(), Algorithm::Bfs);
        assert_eq!(editor.mode(), PlacementMode::Obstacle);
    }

    #[test]
    fn find_path_requires_endpoints() {
        let mut editor = GridEditor::new(4);
        assert_eq!(editor.find_path(), Err(EditorError::MissingEndpoints));
        editor.set_mode(PlacementMode::Robot);
        editor.place(Coordinate::new(0, 0)).unwrap();
        assert_eq!(editor.find_path(), Err(EditorError::MissingEndpoints));
        // Switching algorithm without endpoints just records the choice.
        assert_eq!(editor.set_algorithm(Algorithm::Astar), Ok(None));
        assert_eq!(editor.algorithm(), Algorithm::Astar);
    }

    #[test]
    fn overlap_is_rejected() {
        let mut editor = editor_with_endpoints(4, (0, 0), (3, 3));
        assert_eq!(
            editor.place(Coordinate::new(0, 0)),
            Err(EditorError::CellOccupied {
                cell: Coordinate::new(0, 0),
                occupant: Occupant::Robot
            })
        );
        assert_eq!(
            editor.place(Coordinate::new(3, 3)),
            Err(EditorError::CellOccupied {
                cell: Coordinate::new(3, 3),
                occupant: Occupant::Goal
            })
        );
        editor.place(Coordinate::new(1, 1)).unwrap();
        editor.set_mode(PlacementMode::Goal);
        assert_eq!(
            editor.place(Coordinate::new(1, 1)),
            Err(EditorError::CellOccupied {
                cell: Coordinate::new(1, 1),
                occupant: Occupant::Obstacle
            })
        );
        // Robot and goal may coincide.
        editor.place(Coordinate::new(0, 0)).unwrap();
        assert_eq!(editor.find_path().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn out_of_bounds_placement() {
        let mut editor = GridEditor::new(4);
        assert_eq!(
            editor.place(Coordinate::new(4, 1)),
            Err(EditorError::OutOfBounds(Coordinate::new(4, 1)))
        );
        assert!(editor.history().is_empty());
    }

    #[test]
    fn duplicate_obstacle_not_recorded() {
        let mut editor = GridEditor::new(4);
        editor.place(Coordinate::new(2, 2)).unwrap();
        editor.place(Coordinate::new(2, 2)).unwrap();
        assert_eq!(editor.history().len(), 1);
        assert_eq!(editor.grid().obstacle_count(), 1);
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut editor = editor_with_endpoints(4, (0, 0), (3, 3));
        editor.set_mode(PlacementMode::Robot);
        editor.place(Coordinate::new(1, 0)).unwrap();
        editor.set_mode(PlacementMode::Obstacle);
        editor.place(Coordinate::new(2, 2)).unwrap();

        assert_eq!(
            editor.undo(),
            Some(EditAction::Obstacle(Coordinate::new(2, 2)))
        );
        assert!(!editor.grid().is_obstacle(Coordinate::new(2, 2)));
        editor.undo();
        assert_eq!(editor.robot(), Some(Coordinate::new(0, 0)));
        editor.undo();
        assert_eq!(editor.goal(), None);
        editor.undo();
        assert_eq!(editor.robot(), None);
        assert_eq!(editor.undo(), None);
    }

    #[test]
    fn edits_clear_path_and_reselection_recomputes() {
        let mut editor = editor_with_endpoints(5, (0, 0), (4, 0));
        assert_eq!(editor.find_path().unwrap().unwrap().steps(), 4);
        editor.place(Coordinate::new(2, 0)).unwrap();
        assert!(editor.path().is_none());

        let steps = editor
            .set_algorithm(Algorithm::Astar)
            .unwrap()
            .map(|p| p.steps());
        assert_eq!(steps, Some(6));
        assert_eq!(editor.grid().obstacle_count(), 1);

        assert_eq!(
            editor.set_algorithm_by_name("Dijkstra"),
            Err(EditorError::Search(SearchError::UnknownAlgorithm(
                "Dijkstra".to_owned()
            )))
        );
        assert!(editor.set_algorithm_by_name("DFS").unwrap().is_some());
        assert_eq!(editor.algorithm(), Algorithm::Dfs);
    }

    #[test]
    fn no_path_is_not_an_error() {
        let mut editor = editor_with_endpoints(3, (0, 0), (2, 0));
        for y in 0..3 {
            editor.place(Coordinate::new(1, y)).unwrap();
        }
        assert_eq!(editor.find_path(), Ok(None));
    }

    #[test]
    fn reset_keeps_algorithm() {
        let mut editor = editor_with_endpoints(4, (0, 0), (3, 3));
        editor.place(Coordinate::new(1, 1)).unwrap();
        editor.set_algorithm(Algorithm::Greedy).unwrap();
        editor.reset();
        assert_eq!(editor.robot(), None);
        assert_eq!(editor.goal(), None);
        assert_eq!(editor.grid().obstacle_count(), 0);
        assert!(editor.history().is_empty());
        assert!(editor.path().is_none());
        assert_eq!(editor.algorithm(), Algorithm::Greedy);
    }

    #[test]
    fn render() {
        let mut editor = editor_with_endpoints(3, (0, 0), (2, 0));
        editor.place(Coordinate::new(1, 0)).unwrap();
        editor.place(Coordinate::new(1, 1)).unwrap();
        editor.find_path().unwrap();
        assert_eq!(editor.to_string(), "R#G\n*#*\n***\n");
    }
}
