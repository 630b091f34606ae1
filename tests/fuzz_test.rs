//! Fuzzes the search by checking for many random grids that a path is found
//! exactly when a BFS over the same neighbour relation can reach the goal,
//! and that every found path is valid: contiguous, passable, free of corner
//! cuts and priced correctly.
use grid_astar::{convert_cost_to_unit_cost_float, find_path, PathResult, PathingGrid, C, D};
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::{HashSet, VecDeque};

fn random_grid(n: usize, rng: &mut StdRng) -> PathingGrid {
    let mut grid = PathingGrid::new(n, n * 10);
    for x in 0..n {
        for y in 0..n {
            if rng.gen_bool(0.4) {
                grid.set_barrier(x, y);
            }
        }
    }
    grid.compute_neighbours();
    grid
}

fn random_passable_point(grid: &PathingGrid, rng: &mut StdRng) -> Point {
    loop {
        let p = Point::new(
            rng.gen_range(0..grid.total_rows()) as i32,
            rng.gen_range(0..grid.total_rows()) as i32,
        );
        if grid.passable(p) {
            return p;
        }
    }
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    for y in 0..grid.total_rows() as i32 {
        for x in 0..grid.total_rows() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.passable(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Breadth-first reachability over the same cached neighbour masks the
/// search uses.
fn bfs_reachable(grid: &PathingGrid, start: Point, goal: Point) -> bool {
    let mut seen: HashSet<Point> = HashSet::new();
    let mut queue: VecDeque<Point> = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for neighbour in grid.neighbours_of(current) {
            if seen.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    false
}

fn assert_valid_path(grid: &PathingGrid, start: Point, goal: Point, path: &[Point], cost: i32) {
    assert_eq!(*path.first().unwrap(), goal);
    assert!(!path.contains(&start));
    let mut chain = vec![start];
    chain.extend(path.iter().rev());
    let mut total = 0;
    for w in chain.windows(2) {
        let (from, to) = (w[0], w[1]);
        // A step to a cell the grid itself lists as a neighbour is passable,
        // adjacent and not a corner cut all at once.
        assert!(
            grid.neighbours_of(from).contains(&to),
            "step {} -> {} is not a legal move",
            from,
            to
        );
        total += if from.x != to.x && from.y != to.y { D } else { C };
    }
    assert_eq!(total, cost);
    assert!(convert_cost_to_unit_cost_float(cost) > 0.0);
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let start = random_passable_point(&grid, &mut rng);
        let goal = random_passable_point(&grid, &mut rng);
        if start == goal {
            continue;
        }
        let reachable = bfs_reachable(&grid, start, goal);
        let result = find_path(&grid, start, goal, &mut ()).unwrap();
        match &result {
            PathResult::Found { path, cost } => {
                if !reachable {
                    visualize_grid(&grid, &start, &goal);
                    panic!("path found to an unreachable goal");
                }
                assert_valid_path(&grid, start, goal, path, *cost);
            }
            PathResult::NotFound => {
                if reachable {
                    visualize_grid(&grid, &start, &goal);
                    panic!("no path found to a reachable goal");
                }
            }
            PathResult::Cancelled => unreachable!("no observer cancels here"),
        }
        // Byte-identical results on a repeated run.
        assert_eq!(find_path(&grid, start, goal, &mut ()).unwrap(), result);
    }
}
