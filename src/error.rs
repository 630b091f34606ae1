//! Error types for search preconditions.
//!
//! A missing path is not an error; it surfaces as
//! [PathResult::NotFound](crate::PathResult::NotFound). Errors are reserved
//! for inputs the search refuses to run on.

use grid_util::point::Point;
use thiserror::Error;

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Precondition violations rejected before a search starts. Inputs are never
/// silently corrected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A start or goal coordinate lies outside the grid.
    #[error("cell {cell} is out of bounds for a {size}x{size} grid")]
    OutOfBounds { cell: Point, size: usize },

    /// Start and goal denote the same cell.
    #[error("start and goal are the same cell {0}")]
    StartIsGoal(Point),

    /// The start or goal cell is a barrier.
    #[error("cell {0} is a barrier")]
    Barrier(Point),
}
