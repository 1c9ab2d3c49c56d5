//! **maze-core**: grid and wall model for perfect mazes.
//!
//! This crate provides the foundational types shared by the generator, the
//! pathfinder and the session: geometry primitives, compass sides, the
//! per-cell wall mask and the [`MazeGrid`] itself.

pub mod geom;
pub mod grid;
pub mod walls;

pub use geom::{Point, Range};
pub use grid::{GridError, MazeCell, MazeGrid};
pub use walls::{Side, Walls};
