//! # grid_astar
//!
//! Grid-based pathfinding with an observable A*-family search. Cells on a
//! square grid are either passable or barriers; movement is 8-directional with
//! cardinal cost 1.0 and diagonal cost 1.4, and a diagonal move is refused
//! when it would cut the corner between two orthogonally blocking barriers.
//!
//! The search reports progress through a [SearchObserver] hook, which a
//! presentation layer can use to visualise expansions and the reconstructed
//! path, and which doubles as the cooperative cancellation point. The
//! heuristic is plain Manhattan distance, which overestimates on diagonal
//! shortcuts; paths are therefore deterministic and complete but not
//! guaranteed shortest. See [search::find_path] for details.
//!
//! ```
//! use grid_astar::{find_path, PathResult, PathingGrid};
//! use grid_util::point::Point;
//!
//! let mut grid = PathingGrid::new(5, 500);
//! grid.set_barrier(2, 1);
//! grid.set_barrier(2, 2);
//! grid.set_barrier(2, 3);
//! grid.compute_neighbours();
//! match find_path(&grid, Point::new(0, 2), Point::new(4, 2), &mut ()).unwrap() {
//!     PathResult::Found { path, cost } => {
//!         assert_eq!(path.first(), Some(&Point::new(4, 2)));
//!         assert!(cost > 0);
//!     }
//!     other => panic!("expected a path, got {:?}", other),
//! }
//! ```
pub mod astar;
pub mod error;
pub mod pathing_grid;
pub mod search;

pub use astar::{SearchFlow, SearchObserver, SearchStatus};
pub use error::{SearchError, SearchResult};
pub use pathing_grid::PathingGrid;
pub use search::{find_path, PathResult};

/// Cost of a cardinal (straight) step, in fixed-point tenths.
pub const C: i32 = 10;
/// Cost of a diagonal step, in fixed-point tenths (1.4 exactly).
pub const D: i32 = 14;

/// Inline capacity of neighbour lists; a cell has at most 8 neighbours.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Converts an integer cost to the floating point equivalent where cardinal
/// steps have cost 1.0 and diagonal steps cost 1.4.
pub fn convert_cost_to_unit_cost_float(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}
