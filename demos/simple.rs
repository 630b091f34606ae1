use grid_astar::{find_path, PathResult, PathingGrid};
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// S  #
//  # #
//  # #
//  # G
// S marks the start
// G marks the goal
fn main() {
    let mut grid = PathingGrid::new(4, 400);
    grid.set_barrier(3, 0);
    grid.set_barrier(1, 1);
    grid.set_barrier(3, 1);
    grid.set_barrier(1, 2);
    grid.set_barrier(3, 2);
    grid.set_barrier(1, 3);
    grid.compute_neighbours();
    let start = Point::new(0, 0);
    let goal = Point::new(3, 3);
    match find_path(&grid, start, goal, &mut ()).unwrap() {
        PathResult::Found { path, cost } => {
            println!("A path of cost {} has been found:", cost);
            // The path runs from the goal back toward the start.
            for p in path.iter().rev() {
                println!("{:?}", p);
            }
        }
        other => println!("{:?}", other),
    }
}
