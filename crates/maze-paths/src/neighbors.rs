//! The path graph view: which grid-adjacent cells count as neighbours.
//!
//! Generation and solving ask different questions about the same four
//! cardinal cells. Both go through [`NeighborQuery`] so the boundary logic
//! lives in one place.

use maze_core::{MazeGrid, Point, Side};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Predicate selecting which in-bounds cardinal neighbours are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborQuery {
    /// Cells the generator has not reached yet; walls are ignored.
    Unvisited,
    /// Cells connected to the query point (no wall on the shared side).
    Open,
}

/// Append the neighbours of `p` selected by `query` into `buf`, in north,
/// east, south, west order.
pub fn collect_neighbors(grid: &MazeGrid, p: Point, query: NeighborQuery, buf: &mut Vec<Point>) {
    for side in Side::ALL {
        let Some(n) = grid.neighbor(p, side) else {
            continue;
        };
        let keep = match query {
            NeighborQuery::Unvisited => !grid.visited(n),
            NeighborQuery::Open => {
                let open = grid.is_open(p, side);
                debug_assert_eq!(
                    open,
                    grid.is_open(n, side.opposite()),
                    "asymmetric wall between {p} and {n}"
                );
                open
            }
        };
        if keep {
            buf.push(n);
        }
    }
}

/// Cached neighbour computation helper.
///
/// Owns a small buffer so repeated queries do not allocate.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Neighbours of `p` in `grid` selected by `query`.
    pub fn query(&mut self, grid: &MazeGrid, p: Point, query: NeighborQuery) -> &[Point] {
        self.buf.clear();
        collect_neighbors(grid, p, query, &mut self.buf);
        &self.buf
    }
}

impl Pather for MazeGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        collect_neighbors(self, p, NeighborQuery::Open, buf);
    }
}

impl WeightedPather for MazeGrid {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for MazeGrid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unvisited_ignores_walls_and_bounds() {
        let mut g = MazeGrid::new(3, 3);
        g.mark_visited(Point::new(1, 0));
        let mut nb = Neighbors::new();
        let got = nb.query(&g, Point::new(1, 1), NeighborQuery::Unvisited).to_vec();
        // North (1,0) is visited; east, south, west remain in order.
        assert_eq!(got, vec![Point::new(2, 1), Point::new(1, 2), Point::new(0, 1)]);

        let corner = nb.query(&g, Point::new(0, 0), NeighborQuery::Unvisited).to_vec();
        assert_eq!(corner, vec![Point::new(0, 1)]);
    }

    #[test]
    fn open_follows_carved_walls() {
        let mut g = MazeGrid::new(3, 3);
        let c = Point::new(1, 1);
        let mut nb = Neighbors::new();
        assert!(nb.query(&g, c, NeighborQuery::Open).is_empty());

        g.carve(c, Point::new(1, 0));
        g.carve(c, Point::new(0, 1));
        let got = nb.query(&g, c, NeighborQuery::Open).to_vec();
        assert_eq!(got, vec![Point::new(1, 0), Point::new(0, 1)]);

        let back = nb.query(&g, Point::new(0, 1), NeighborQuery::Open).to_vec();
        assert_eq!(back, vec![c]);
    }

    #[test]
    fn grid_pather_uses_open_edges() {
        let mut g = MazeGrid::new(2, 1);
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let mut buf = Vec::new();
        g.neighbors(a, &mut buf);
        assert!(buf.is_empty());

        g.carve(a, b);
        g.neighbors(a, &mut buf);
        assert_eq!(buf, vec![b]);
        assert_eq!(g.cost(a, b), 1);
        assert_eq!(g.estimate(a, Point::new(1, 5)), 6);
    }
}
