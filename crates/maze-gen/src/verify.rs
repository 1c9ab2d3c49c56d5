//! Structural checks on generated mazes.

use maze_core::{MazeGrid, Point};
use maze_paths::{PathRange, UNREACHABLE};

/// Whether the open connections of `grid` form a spanning tree: mirrored
/// walls, one connected component and exactly `len - 1` connections.
pub fn is_perfect(grid: &MazeGrid) -> bool {
    if grid.is_empty() || grid.check_symmetry().is_some() {
        return false;
    }
    if grid.open_connections() != grid.len() - 1 {
        return false;
    }
    let mut pr = PathRange::new(grid.bounds());
    pr.cc_map_all(grid) == 1
}

/// Number of steps between `from` and `to` through open connections, found
/// by exhaustive breadth-first search. `None` if `to` is unreachable.
pub fn tree_distance(grid: &MazeGrid, from: Point, to: Point) -> Option<i32> {
    let mut pr = PathRange::new(grid.bounds());
    pr.bfs_map(grid, &[from], i32::MAX);
    let d = pr.bfs_at(to);
    (d != UNREACHABLE).then_some(d)
}
