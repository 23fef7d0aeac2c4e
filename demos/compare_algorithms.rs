use grid_search::{Algorithm, Coordinate, GridModel, SearchEngine};

// Runs all five algorithms on the same 10x10 map and reports path length and the number of
// cells each one expanded.

fn main() {
    let mut grid = GridModel::new(10);
    for y in 0..8 {
        grid.add_obstacle(Coordinate::new(4, y)).unwrap();
    }
    for x in 5..9 {
        grid.add_obstacle(Coordinate::new(x, 5)).unwrap();
    }
    print!("{}", grid);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(9, 0);
    let mut engine = SearchEngine::new();
    for algorithm in Algorithm::ALL {
        let trace = engine.trace(algorithm, &grid, start, end).unwrap();
        match trace.path {
            Some(path) => println!(
                "{:>6}: {} steps, {} cells expanded",
                algorithm,
                path.steps(),
                trace.expanded.len()
            ),
            None => println!("{:>6}: no path found", algorithm),
        }
    }
}
