use grid_search::{search, Algorithm, Coordinate, GridModel};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = GridModel::new(3);
    grid.add_obstacle(Coordinate::new(1, 1)).unwrap();
    print!("{}", grid);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(2, 2);
    let path = search(Algorithm::Bfs, &grid, start, end).unwrap().unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
