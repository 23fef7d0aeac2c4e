use grid_search::{Coordinate, GridEditor, PlacementMode};

// Drives an editing session the way a front end would: place the robot, the goal and a wall,
// find a path, switch algorithm, then undo the last edit.

fn main() {
    let mut editor = GridEditor::new(8);
    editor.set_mode(PlacementMode::Robot);
    editor.place(Coordinate::new(0, 3)).unwrap();
    editor.set_mode(PlacementMode::Goal);
    editor.place(Coordinate::new(7, 3)).unwrap();
    editor.set_mode(PlacementMode::Obstacle);
    for y in 1..7 {
        editor.place(Coordinate::new(3, y)).unwrap();
    }

    for name in ["BFS", "DFS", "Greedy"] {
        match editor.set_algorithm_by_name(name) {
            Ok(Some(path)) => println!("{name}: {} steps", path.steps()),
            Ok(None) => println!("{name}: no path found"),
            Err(e) => println!("{name}: {e}"),
        }
        print!("{}", editor);
        println!();
    }

    if let Err(e) = editor.place(Coordinate::new(0, 3)) {
        println!("{e}");
    }
    editor.undo();
    editor.find_path().unwrap();
    print!("{}", editor);
}
