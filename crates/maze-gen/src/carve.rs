//! Randomized depth-first carving ("recursive backtracker").
//!
//! Starting from the grid origin, the generator repeatedly knocks down the
//! wall to a random unvisited neighbour and moves there, backtracking along
//! an explicit stack when it reaches a dead end. Every cell is joined to the
//! maze exactly once, so the result is a spanning tree of the grid.

use maze_core::{MazeGrid, Point};
use maze_paths::{NeighborQuery, Neighbors};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chooser::{NeighborChooser, RandomChooser};

/// Summary of a carving run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarveStats {
    /// Number of walls removed (`rows * cols - 1` for a non-empty grid).
    pub carved: usize,
    /// Deepest the backtracking stack got.
    pub max_depth: usize,
}

/// Maze generator operating on a [`MazeGrid`].
pub struct MazeGen<C: NeighborChooser> {
    pub chooser: C,
    pub grid: MazeGrid,
    stack: Vec<Point>,
    nbrs: Neighbors,
}

impl<C: NeighborChooser> MazeGen<C> {
    /// Create a generator for `grid`, picking neighbours with `chooser`.
    pub fn with_grid(grid: MazeGrid, chooser: C) -> Self {
        Self {
            chooser,
            grid,
            stack: Vec::new(),
            nbrs: Neighbors::new(),
        }
    }

    /// Carve the whole grid, starting from the origin.
    ///
    /// Runs to completion. A 1×1 grid returns immediately with nothing
    /// carved; an empty grid is left untouched.
    pub fn carve_backtracker(&mut self) -> CarveStats {
        let Self {
            chooser,
            grid,
            stack,
            nbrs,
        } = self;
        let mut stats = CarveStats::default();

        let start = grid.bounds().min;
        if !grid.mark_visited(start) {
            return stats;
        }
        stack.clear();
        stack.push(start);
        let mut current = start;

        while !stack.is_empty() {
            let unvisited = nbrs.query(grid, current, NeighborQuery::Unvisited);
            if unvisited.is_empty() {
                if let Some(p) = stack.pop() {
                    current = p;
                }
                continue;
            }

            let pick = chooser.choose(unvisited).min(unvisited.len() - 1);
            let next = unvisited[pick];
            grid.carve(current, next);
            stack.push(next);
            grid.mark_visited(next);
            current = next;

            stats.carved += 1;
            stats.max_depth = stats.max_depth.max(stack.len());
        }

        log::debug!(
            "carved {} walls in {}x{} grid, max depth {}",
            stats.carved,
            grid.rows(),
            grid.cols(),
            stats.max_depth
        );
        stats
    }

    /// Consume the generator and return the grid.
    pub fn into_grid(self) -> MazeGrid {
        self.grid
    }
}

impl MazeGen<RandomChooser<StdRng>> {
    /// Generator whose choices are fully determined by `seed`.
    pub fn seeded(grid: MazeGrid, seed: u64) -> Self {
        Self::with_grid(grid, RandomChooser(StdRng::seed_from_u64(seed)))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_serde() {
        let mut mg = MazeGen::seeded(MazeGrid::new(4, 4), 11);
        let stats = mg.carve_backtracker();
        let json = serde_json::to_string(&stats).unwrap();
        let back: CarveStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
