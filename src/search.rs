//! Grid-level search surface: precondition checks, step costs, Manhattan
//! heuristic, and the [find_path] entry point.

use crate::astar::{astar_observed, SearchObserver, SearchStatus};
use crate::error::{SearchError, SearchResult};
use crate::pathing_grid::PathingGrid;
use crate::{C, D};
use grid_util::point::Point;
use log::info;

/// Outcome of a [find_path] run whose preconditions held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// A path was found. `path` is ordered from the goal back toward the
    /// start and excludes the start itself; `cost` is the goal's g-score in
    /// fixed-point tenths (see [convert_cost_to_unit_cost_float](crate::convert_cost_to_unit_cost_float)).
    Found { path: Vec<Point>, cost: i32 },
    /// The frontier emptied without reaching the goal; final for this grid
    /// state.
    NotFound,
    /// The observer cancelled the search; the grid is untouched.
    Cancelled,
}

/// Manhattan distance scaled to fixed-point cost units. Deliberately kept
/// even though it overestimates the true cost of diagonal shortcuts (a
/// diagonal step covers Manhattan distance 2 at cost 1.4): the search stays
/// complete and deterministic but may return a non-shortest path.
pub fn heuristic(p1: &Point, p2: &Point) -> i32 {
    ((p1.x - p2.x).abs() + (p1.y - p2.y).abs()) * C
}

/// [D] for a diagonal step (both coordinates differ), [C] for a straight one.
/// Only meaningful for adjacent cells.
pub fn step_cost(from: &Point, to: &Point) -> i32 {
    if from.x != to.x && from.y != to.y {
        D
    } else {
        C
    }
}

/// Searches for a path from `start` to `goal` over the grid's cached
/// neighbour masks, reporting each expansion and each reconstructed path cell
/// to `observer`.
///
/// Precondition: [compute_neighbours](PathingGrid::compute_neighbours) has
/// run since the last barrier edit. The engine cannot detect stale masks and
/// will silently search the grid they were computed against.
///
/// Rejects out-of-bounds endpoints, `start == goal` and endpoints on
/// barriers with a [SearchError] before any expansion happens.
pub fn find_path<O: SearchObserver<Point>>(
    grid: &PathingGrid,
    start: Point,
    goal: Point,
    observer: &mut O,
) -> SearchResult<PathResult> {
    let size = grid.total_rows();
    for cell in [start, goal] {
        if !grid.in_bounds(cell.x, cell.y) {
            return Err(SearchError::OutOfBounds { cell, size });
        }
    }
    if start == goal {
        return Err(SearchError::StartIsGoal(start));
    }
    for cell in [start, goal] {
        if !grid.passable(cell) {
            return Err(SearchError::Barrier(cell));
        }
    }

    info!("Searching for a path from {} to {}", start, goal);
    let status = astar_observed(
        &start,
        |node| {
            let from = *node;
            grid.neighbours_of(from)
                .into_iter()
                .map(move |p| (p, step_cost(&from, &p)))
        },
        |point| heuristic(point, &goal),
        |point| *point == goal,
        observer,
    );
    Ok(match status {
        SearchStatus::Found { path, cost } => {
            info!("Found a {}-step path of cost {}", path.len(), cost);
            PathResult::Found { path, cost }
        }
        SearchStatus::Exhausted => {
            info!("Frontier exhausted, no path from {} to {}", start, goal);
            PathResult::NotFound
        }
        SearchStatus::Cancelled => {
            info!("Search from {} to {} cancelled", start, goal);
            PathResult::Cancelled
        }
    })
}
