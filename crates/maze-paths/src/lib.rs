//! Graph queries over maze grids.
//!
//! - **Path graph view**: the [`Neighbors`] helper and [`NeighborQuery`]
//!   answer "which adjacent cells are unvisited / reachable" for a
//!   [`MazeGrid`](maze_core::MazeGrid).
//! - **Incremental A\***: [`AstarSearch`] expands one node per
//!   [`step`](AstarSearch::step).
//! - **BFS** distance maps ([`PathRange::bfs_map`]) and **connected
//!   components** ([`PathRange::cc_map_all`]) for exhaustive checks.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, connected components |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! `MazeGrid` implements all three: neighbours are the open cardinal cells,
//! every step costs 1 and the estimate is the Manhattan distance.

mod astar;
mod bfs;
mod cc;
mod distance;
mod neighbors;
mod pathrange;
mod traits;

pub use astar::{AstarSearch, Membership, SearchNode, SearchStatus, SearchStep};
pub use distance::manhattan;
pub use neighbors::{NeighborQuery, Neighbors, collect_neighbors};
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
