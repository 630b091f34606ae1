use grid_astar::{find_path, PathResult, PathingGrid, SearchFlow, SearchObserver};
use grid_util::point::Point;

/// Collects what a rendering layer would draw: the cells expanded so far and
/// the reconstructed path cells.
#[derive(Default)]
struct TraceObserver {
    expanded: Vec<Point>,
    path: Vec<Point>,
}

impl SearchObserver<Point> for TraceObserver {
    fn expanded(&mut self, node: &Point) -> SearchFlow {
        self.expanded.push(*node);
        SearchFlow::Continue
    }

    fn path_node(&mut self, node: &Point) {
        self.path.push(*node);
    }
}

fn main() {
    let n = 12;
    let mut grid = PathingGrid::new(n, 600);
    for y in 0..9 {
        grid.set_barrier(5, y);
    }
    for x in 5..11 {
        grid.set_barrier(x, 9);
    }
    grid.compute_neighbours();

    let start = Point::new(2, 2);
    let goal = Point::new(9, 2);
    let mut observer = TraceObserver::default();
    let result = find_path(&grid, start, goal, &mut observer).unwrap();

    match &result {
        PathResult::Found { cost, .. } => println!("Found a path of cost {}:", cost),
        other => println!("{:?}", other),
    }
    for y in 0..n as i32 {
        for x in 0..n as i32 {
            let p = Point::new(x, y);
            let c = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if !grid.passable(p) {
                '#'
            } else if observer.path.contains(&p) {
                '*'
            } else if observer.expanded.contains(&p) {
                'o'
            } else {
                '.'
            };
            print!("{}", c);
        }
        println!();
    }
    println!("{} cells expanded", observer.expanded.len());
}
