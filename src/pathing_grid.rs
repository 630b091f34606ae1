//! Square grid of passable/barrier cells with cached neighbour masks.

use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use grid_util::point::Point;
use smallvec::SmallVec;

/// Offsets of the eight neighbours in expansion order: south, north, east,
/// west, then north-west, north-east, south-west, south-east. `x` is the
/// column and `y` the row, with `y` growing southward.
pub(crate) const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// [PathingGrid] owns an N×N [BoolGrid] of cell values that determine whether
/// a cell is a barrier ([true]) or passable ([false]), along with a cached
/// neighbour bitmask per cell in [u8] format for fast lookups during search.
/// Bit `i` of a mask corresponds to [NEIGHBOUR_OFFSETS]`[i]`.
///
/// The masks are refreshed only by [compute_neighbours](Self::compute_neighbours);
/// editing barriers does not touch them. Running a search against masks that
/// predate the latest edits silently searches the old grid, so callers must
/// recompute before every search that follows an edit.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub neighbours: SimpleGrid<u8>,
    cell_size: usize,
}

impl PathingGrid {
    /// Creates a `rows`×`rows` all-passable grid occupying a square of
    /// `total_size` pixels on the caller's side. The per-cell size is the
    /// integer quotient; callers wanting exact tiling should round
    /// `total_size` to a multiple of `rows`.
    pub fn new(rows: usize, total_size: usize) -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::new(rows, rows, false),
            neighbours: SimpleGrid::new(rows, rows, 0),
            cell_size: total_size / rows,
        }
    }

    /// The fixed dimension N of the N×N grid.
    pub fn total_rows(&self) -> usize {
        self.grid.width
    }

    /// Side length of a single cell as derived at construction. Presentation
    /// data only; the search never reads it.
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    /// A cell is passable when it is in bounds and not a barrier.
    pub fn passable(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// Marks a cell as a barrier. The cell's coordinates must be in bounds.
    pub fn set_barrier(&mut self, x: usize, y: usize) {
        self.grid.set(x, y, true);
    }

    /// Resets a cell to passable. A no-op on cells that already are, so
    /// clearing is idempotent. The coordinates must be in bounds.
    pub fn clear(&mut self, x: usize, y: usize) {
        self.grid.set(x, y, false);
    }

    /// Whether neighbour `i` of `pos` is reachable in a single move: in
    /// bounds, passable, and for diagonals not blocked by both orthogonal
    /// cells between `pos` and the target. A single orthogonal barrier does
    /// not block a diagonal; straight moves only require the target itself
    /// to be passable.
    fn neighbour_passable(&self, pos: Point, i: usize) -> bool {
        let (dx, dy) = NEIGHBOUR_OFFSETS[i];
        let target = Point::new(pos.x + dx, pos.y + dy);
        if !self.passable(target) {
            return false;
        }
        if dx != 0 && dy != 0 {
            // Both orthogonal cells are in bounds whenever the diagonal
            // target is.
            let corner_a = self.grid.get((pos.x + dx) as usize, pos.y as usize);
            let corner_b = self.grid.get(pos.x as usize, (pos.y + dy) as usize);
            if corner_a && corner_b {
                return false;
            }
        }
        true
    }

    /// Recomputes the neighbour mask of every cell against the current
    /// barrier state. Must be called after barrier edits and before the next
    /// search; see the type-level note on staleness.
    pub fn compute_neighbours(&mut self) {
        for x in 0..self.grid.width {
            for y in 0..self.grid.height {
                let pos = Point::new(x as i32, y as i32);
                let mut mask = 0u8;
                for i in 0..8 {
                    if self.neighbour_passable(pos, i) {
                        mask |= 1 << i;
                    }
                }
                self.neighbours.set(x, y, mask);
            }
        }
    }

    /// Decodes the cached neighbour mask of `pos` into points, in the fixed
    /// order of [NEIGHBOUR_OFFSETS].
    pub fn neighbours_of(&self, pos: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        let mask = self.neighbours.get_point(pos);
        NEIGHBOUR_OFFSETS
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &(dx, dy))| Point::new(pos.x + dx, pos.y + dy))
            .collect()
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        writeln!(f, "\nNeighbours:")?;
        for y in 0..self.neighbours.height {
            let values = (0..self.neighbours.width)
                .map(|x| self.neighbours.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(pairs: &[(i32, i32)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// An interior cell of an empty grid has all eight neighbours, listed in
    /// the fixed S, N, E, W, NW, NE, SW, SE order.
    #[test]
    fn neighbour_order_is_fixed() {
        let mut grid = PathingGrid::new(3, 300);
        grid.compute_neighbours();
        let neighbours = grid.neighbours_of(Point::new(1, 1));
        assert_eq!(
            neighbours.to_vec(),
            points(&[
                (1, 2),
                (1, 0),
                (2, 1),
                (0, 1),
                (0, 0),
                (2, 0),
                (0, 2),
                (2, 2)
            ])
        );
    }

    /// Out-of-bounds directions contribute no neighbour.
    #[test]
    fn corner_cell_neighbours() {
        let mut grid = PathingGrid::new(3, 300);
        grid.compute_neighbours();
        let neighbours = grid.neighbours_of(Point::new(0, 0));
        assert_eq!(neighbours.to_vec(), points(&[(0, 1), (1, 0), (1, 1)]));
    }

    /// A diagonal is excluded only when both orthogonal cells between the
    /// cell and the diagonal target are barriers.
    #[test]
    fn corner_cut_requires_both_blockers() {
        let mut grid = PathingGrid::new(3, 300);
        grid.set_barrier(1, 0);
        grid.set_barrier(0, 1);
        grid.compute_neighbours();
        let neighbours = grid.neighbours_of(Point::new(1, 1));
        assert!(!neighbours.contains(&Point::new(0, 0)));

        grid.clear(0, 1);
        grid.compute_neighbours();
        let neighbours = grid.neighbours_of(Point::new(1, 1));
        assert!(neighbours.contains(&Point::new(0, 0)));
    }

    /// A barrier cell is no one's neighbour, but straight moves are blocked
    /// only by the target cell itself.
    #[test]
    fn barrier_excluded_from_neighbours() {
        let mut grid = PathingGrid::new(3, 300);
        grid.set_barrier(1, 0);
        grid.compute_neighbours();
        assert!(!grid.neighbours_of(Point::new(1, 1)).contains(&Point::new(1, 0)));
        assert!(grid.neighbours_of(Point::new(1, 1)).contains(&Point::new(2, 0)));
    }

    /// Barrier edits leave the cached masks untouched until the explicit
    /// recompute.
    #[test]
    fn neighbour_cache_is_explicit() {
        let mut grid = PathingGrid::new(3, 300);
        grid.compute_neighbours();
        grid.set_barrier(1, 0);
        assert!(grid.neighbours_of(Point::new(1, 1)).contains(&Point::new(1, 0)));
        grid.compute_neighbours();
        assert!(!grid.neighbours_of(Point::new(1, 1)).contains(&Point::new(1, 0)));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut grid = PathingGrid::new(3, 300);
        grid.clear(1, 1);
        assert!(grid.passable(Point::new(1, 1)));
        grid.set_barrier(1, 1);
        grid.clear(1, 1);
        grid.clear(1, 1);
        assert!(grid.passable(Point::new(1, 1)));
    }

    #[test]
    fn cell_size_uses_integer_division() {
        assert_eq!(PathingGrid::new(10, 805).cell_size(), 80);
        assert_eq!(PathingGrid::new(10, 800).cell_size(), 80);
    }
}
