//! Perfect-maze generation.
//!
//! [`MazeGen`] carves a [`MazeGrid`](maze_core::MazeGrid) with the
//! randomized depth-first backtracker. The choice among unvisited neighbours
//! is delegated to a [`NeighborChooser`], so a run can be seeded
//! ([`MazeGen::seeded`]), recorded and replayed exactly.

pub mod carve;
pub mod chooser;
pub mod verify;

pub use carve::{CarveStats, MazeGen};
pub use chooser::{FirstChooser, NeighborChooser, RandomChooser, Recorder, ReplayChooser};
pub use verify::{is_perfect, tree_distance};
